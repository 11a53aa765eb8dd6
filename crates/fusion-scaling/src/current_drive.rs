// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Current Drive Scaling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Field required for a target current-drive gain Q_CD (Eq. 2.3).
//!
//! `Q_CD = c · β_N³ · R³ · B³ / (A³ · f_GW² · (5 + Z_eff) · (1 − f_BS))`
//! with bootstrap fraction `f_BS = c_BS · A^0.5 · q · β_N`.
//!
//! Z_eff is fixed, so the `(5 + Z_eff)` term cancels against the
//! reference and the inverse is a pure product of ratios.

use crate::calibration::{check_inputs, finish, ratio_pow, reference_point};
use fusion_types::constants::{CD_CHARGE_OFFSET, Z_EFF};
use fusion_types::error::{FusionError, FusionResult};
use fusion_types::params::ReactorParameters;
use ndarray::Array1;

/// `1 − f_BS`: fraction of the plasma current that must be driven.
fn driven_fraction(params: &ReactorParameters) -> FusionResult<f64> {
    let f_bs = params.bootstrap_fraction();
    if !f_bs.is_finite() || f_bs >= 1.0 {
        return Err(FusionError::invalid(
            "bootstrap_fraction",
            f_bs,
            "c_BS·A^0.5·q·beta_N must be < 1",
        ));
    }
    Ok(1.0 - f_bs)
}

/// Calibration constant `c` from the reference design.
pub fn calibrate(reference: &ReactorParameters) -> FusionResult<f64> {
    let (b_ref, r_ref) = reference_point(reference)?;
    let driven = driven_fraction(reference)?;
    let c = reference.q_cd
        * reference.aspect_ratio.powi(3)
        * reference.greenwald_fraction.powi(2)
        * (CD_CHARGE_OFFSET + Z_EFF)
        * driven
        / (reference.beta_n.powi(3) * r_ref.powi(3) * b_ref.powi(3));
    tracing::debug!(c, driven, "current drive calibration constant");
    Ok(c)
}

/// Forward relation: Q_CD at field `b` [T] and radius `r` [m].
pub fn current_drive_gain(
    c: f64,
    params: &ReactorParameters,
    b: f64,
    r: f64,
) -> FusionResult<f64> {
    let driven = driven_fraction(params)?;
    Ok(c * params.beta_n.powi(3) * r.powi(3) * b.powi(3)
        / (params.aspect_ratio.powi(3)
            * params.greenwald_fraction.powi(2)
            * (CD_CHARGE_OFFSET + Z_EFF)
            * driven))
}

/// Field [T] at the reference radius; the curve then falls as 1/R.
///
/// `B_ref · (Q_CD/Q_CD,ref)^(1/3) · (A/A_ref) · (β_N,ref/β_N)
///  · (f_GW/f_GW,ref)^(2/3) · ((1−f_BS)/(1−f_BS,ref))^(1/3)`
fn field_at_reference_radius(
    target: &ReactorParameters,
    reference: &ReactorParameters,
    b_ref: f64,
) -> FusionResult<f64> {
    let suppression = ratio_pow(
        "bootstrap_fraction",
        driven_fraction(target)?,
        driven_fraction(reference)?,
        1.0 / 3.0,
    )?;
    Ok(b_ref
        * ratio_pow("q_cd", target.q_cd, reference.q_cd, 1.0 / 3.0)?
        * ratio_pow("aspect_ratio", target.aspect_ratio, reference.aspect_ratio, 1.0)?
        * ratio_pow("beta_n", reference.beta_n, target.beta_n, 1.0)?
        * ratio_pow(
            "greenwald_fraction",
            target.greenwald_fraction,
            reference.greenwald_fraction,
            2.0 / 3.0,
        )?
        * suppression)
}

/// Required field at each radius for `target`, calibrated on `reference`.
pub fn evaluate(
    radii: &Array1<f64>,
    target: &ReactorParameters,
    reference: &ReactorParameters,
) -> FusionResult<Array1<f64>> {
    let (b_ref, r_ref) = check_inputs(radii, target, reference)?;
    let b0 = field_at_reference_radius(target, reference, b_ref)?;
    tracing::debug!(b0, "current drive field at reference radius");
    finish("current drive", radii.mapv(|r| b0 * r_ref / r))
}
