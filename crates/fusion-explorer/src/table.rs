// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Headless Table
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Fixed-width text rendering of one evaluation cycle.

use fusion_scaling::{FieldCurves, ScalingLaw};
use std::fmt::Write;

const RADIUS_WIDTH: usize = 8;
const FIELD_WIDTH: usize = 22;

/// Table of R [m] against the required field [T] of each law, plus the
/// law that binds at each radius.
pub fn render(curves: &FieldCurves) -> String {
    let mut out = String::new();
    let _ = write!(out, "{:>w$}", "R [m]", w = RADIUS_WIDTH);
    for law in ScalingLaw::ALL {
        let _ = write!(out, "{:>w$}", format!("{} [T]", law.label()), w = FIELD_WIDTH);
    }
    let _ = writeln!(out, "  binding");

    for i in 0..curves.len() {
        let _ = write!(out, "{:>w$.2}", curves.radii[i], w = RADIUS_WIDTH);
        for law in ScalingLaw::ALL {
            let _ = write!(out, "{:>w$.3}", curves.get(law)[i], w = FIELD_WIDTH);
        }
        if let Some((law, _)) = curves.binding_field(i) {
            let _ = write!(out, "  {}", law.label());
        }
        out.push('\n');
    }
    out
}
