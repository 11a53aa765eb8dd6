// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Fusion Power Scaling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Field required to reach a target fusion power (Eq. 2.1).
//!
//! `P_fus = c · β_N² · B⁴ · R³ / (q² · A⁴)`
//!
//! Pressure at the beta limit scales as β_N·B²/(q·A) and fusion power
//! density as pressure squared over a volume ∝ R³/A².

use crate::calibration::{check_inputs, finish, reference_point};
use fusion_types::error::FusionResult;
use fusion_types::params::ReactorParameters;
use ndarray::Array1;

/// Calibration constant `c` from the reference design.
pub fn calibrate(reference: &ReactorParameters) -> FusionResult<f64> {
    let (b_ref, r_ref) = reference_point(reference)?;
    let c = reference.fusion_power_mw
        * reference.safety_factor.powi(2)
        * reference.aspect_ratio.powi(4)
        / (reference.beta_n.powi(2) * b_ref.powi(4) * r_ref.powi(3));
    tracing::debug!(c, "fusion power calibration constant");
    Ok(c)
}

/// Forward relation: fusion power [MW] at field `b` [T] and radius `r` [m].
pub fn fusion_power_mw(c: f64, params: &ReactorParameters, b: f64, r: f64) -> f64 {
    c * params.beta_n.powi(2) * b.powi(4) * r.powi(3)
        / (params.safety_factor.powi(2) * params.aspect_ratio.powi(4))
}

/// Inverse relation: field [T] needed at radius `r` [m].
pub fn required_field(c: f64, params: &ReactorParameters, r: f64) -> f64 {
    params.fusion_power_mw.powf(0.25) * params.safety_factor.sqrt() * params.aspect_ratio
        / (c.powf(0.25) * params.beta_n.sqrt() * r.powf(0.75))
}

/// Required field at each radius for `target`, calibrated on `reference`.
pub fn evaluate(
    radii: &Array1<f64>,
    target: &ReactorParameters,
    reference: &ReactorParameters,
) -> FusionResult<Array1<f64>> {
    check_inputs(radii, target, reference)?;
    let c = calibrate(reference)?;
    finish("fusion power", radii.mapv(|r| required_field(c, target, r)))
}
