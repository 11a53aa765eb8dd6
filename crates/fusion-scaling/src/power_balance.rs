// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Power Balance Scaling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Field required for a target power-balance gain Q_PB (Eq. 2.2).
//!
//! `Q_PB = 1 / (c · q^3.1 · A^3.53 · H^-3.23 · β_N^-0.1 · R^-2.7 · B^-3.7 − 1/5)`
//!
//! The exponents follow from the H-mode confinement scaling at fixed
//! β_N and f_GW. The 1/5 is the alpha self-heating fraction.

use crate::calibration::{check_inputs, finish, reference_point};
use fusion_types::constants::ALPHA_FRACTION;
use fusion_types::error::FusionResult;
use fusion_types::params::ReactorParameters;
use ndarray::Array1;

const Q_EXP: f64 = 3.1;
const A_EXP: f64 = 3.53;
const H_EXP: f64 = -3.23;
const BETA_EXP: f64 = -0.1;
const R_EXP: f64 = -2.7;
/// Field exponent (enters as B^-3.7).
const B_EXP: f64 = 3.7;

/// `q^3.1 · A^3.53 · H^-3.23 · β_N^-0.1 · R^-2.7`.
fn confinement_factor(params: &ReactorParameters, r: f64) -> f64 {
    params.safety_factor.powf(Q_EXP)
        * params.aspect_ratio.powf(A_EXP)
        * params.h_factor.powf(H_EXP)
        * params.beta_n.powf(BETA_EXP)
        * r.powf(R_EXP)
}

/// `1/Q_PB + 1/5`: heating power lost per unit fusion power.
fn loss_ratio(q_pb: f64) -> f64 {
    1.0 / q_pb + ALPHA_FRACTION
}

/// Calibration constant `c` from the reference design.
pub fn calibrate(reference: &ReactorParameters) -> FusionResult<f64> {
    let (b_ref, r_ref) = reference_point(reference)?;
    let c = loss_ratio(reference.q_pb) * b_ref.powf(B_EXP) / confinement_factor(reference, r_ref);
    tracing::debug!(c, "power balance calibration constant");
    Ok(c)
}

/// Forward relation: Q_PB at field `b` [T] and radius `r` [m].
///
/// Returns infinity once alpha heating alone sustains the plasma.
pub fn power_balance_gain(c: f64, params: &ReactorParameters, b: f64, r: f64) -> f64 {
    let denom = c * confinement_factor(params, r) * b.powf(-B_EXP) - ALPHA_FRACTION;
    if denom <= 0.0 {
        return f64::INFINITY;
    }
    1.0 / denom
}

/// Inverse relation: field [T] needed at radius `r` [m].
pub fn required_field(c: f64, params: &ReactorParameters, r: f64) -> f64 {
    (c * confinement_factor(params, r) / loss_ratio(params.q_pb)).powf(1.0 / B_EXP)
}

/// Required field at each radius for `target`, calibrated on `reference`.
pub fn evaluate(
    radii: &Array1<f64>,
    target: &ReactorParameters,
    reference: &ReactorParameters,
) -> FusionResult<Array1<f64>> {
    check_inputs(radii, target, reference)?;
    let c = calibrate(reference)?;
    finish("power balance", radii.mapv(|r| required_field(c, target, r)))
}
