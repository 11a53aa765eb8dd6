// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Alpha particle energy fraction (3.5/17.6), rounded to 1/5 as in the
/// power-balance relation.
pub const ALPHA_FRACTION: f64 = 0.2;

/// Bootstrap-current coefficient c_BS in f_BS = c_BS · A^0.5 · q · β_N.
/// Ratio of three fit coefficients from the companion bootstrap scaling.
pub const C_BOOTSTRAP: f64 = 0.02228;

/// Effective ion charge, held fixed (Z_eff ≪ 5).
pub const Z_EFF: f64 = 1.0;

/// Offset added to Z_eff in the current-drive efficiency term.
pub const CD_CHARGE_OFFSET: f64 = 5.0;

// ── ITER calibration point ───────────────────────────────────────────

/// Aspect ratio R/a.
pub const ITER_ASPECT_RATIO: f64 = 3.1;
/// Edge safety factor.
pub const ITER_SAFETY_FACTOR: f64 = 3.1;
/// Confinement enhancement over the H-mode scaling.
pub const ITER_H_FACTOR: f64 = 1.0;
/// Normalized beta.
pub const ITER_BETA_N: f64 = 1.8;
/// Greenwald density fraction.
pub const ITER_GREENWALD_FRACTION: f64 = 0.85;
/// Margin over the L-H threshold power.
pub const ITER_LH_FRACTION: f64 = 1.33;
/// Fusion power [MW].
pub const ITER_FUSION_POWER_MW: f64 = 400.0;
/// P_fus / P_CD.
pub const ITER_Q_CD: f64 = 1.0;
/// P_fus / P_aux.
pub const ITER_Q_PB: f64 = 10.0;
/// On-axis toroidal field [T].
pub const ITER_FIELD_T: f64 = 5.2;
/// Major radius [m].
pub const ITER_RADIUS_M: f64 = 6.2;
