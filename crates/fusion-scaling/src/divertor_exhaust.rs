// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Divertor Exhaust Scaling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Field at which divertor impurity exhaust matches the reference (Eq. 2.4).
//!
//! `f_Z,div = c · f_LH^1.14 · q^0.32 · B^0.88 · R^1.33 / f_GW^1.18`
//!
//! The impurity fraction is held at its reference value, so `c` never
//! needs to be known: the field follows from ratios alone.

use crate::calibration::{check_inputs, finish, ratio_pow};
use fusion_types::error::FusionResult;
use fusion_types::params::ReactorParameters;
use ndarray::Array1;

const GW_EXP: f64 = 1.18;
const LH_EXP: f64 = 1.14;
const Q_EXP: f64 = 0.32;
const R_EXP: f64 = 1.33;
const B_EXP: f64 = 0.88;

/// `f_Z,div / f_Z,div,ref` for `params` at field `b` [T] and radius `r` [m].
pub fn impurity_exhaust_ratio(
    params: &ReactorParameters,
    b: f64,
    r: f64,
    reference: &ReactorParameters,
) -> FusionResult<f64> {
    let (b_ref, r_ref) = reference.calibration()?;
    Ok(ratio_pow("lh_fraction", params.lh_fraction, reference.lh_fraction, LH_EXP)?
        * ratio_pow("safety_factor", params.safety_factor, reference.safety_factor, Q_EXP)?
        * ratio_pow("field", b, b_ref, B_EXP)?
        * ratio_pow("radius", r, r_ref, R_EXP)?
        * ratio_pow(
            "greenwald_fraction",
            reference.greenwald_fraction,
            params.greenwald_fraction,
            GW_EXP,
        )?)
}

/// Required field at each radius for `target`, calibrated on `reference`.
pub fn evaluate(
    radii: &Array1<f64>,
    target: &ReactorParameters,
    reference: &ReactorParameters,
) -> FusionResult<Array1<f64>> {
    let (b_ref, r_ref) = check_inputs(radii, target, reference)?;

    // Radius-independent part of the product inside the 1/0.88 power.
    let k = ratio_pow(
        "greenwald_fraction",
        target.greenwald_fraction,
        reference.greenwald_fraction,
        GW_EXP,
    )? * ratio_pow("lh_fraction", reference.lh_fraction, target.lh_fraction, LH_EXP)?
        * ratio_pow("safety_factor", reference.safety_factor, target.safety_factor, Q_EXP)?;
    tracing::debug!(k, "divertor exhaust ratio product");

    finish(
        "divertor exhaust",
        radii.mapv(|r| b_ref * (k * (r_ref / r).powf(R_EXP)).powf(1.0 / B_EXP)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use fusion_types::error::FusionError;
    use ndarray::array;

    fn iter() -> ReactorParameters {
        ReactorParameters::iter_reference()
    }

    #[test]
    fn test_reproduces_reference() {
        let b = evaluate(&array![6.2], &iter(), &iter()).unwrap();
        assert!((b[0] - 5.2).abs() / 5.2 < 1e-12, "B = {}", b[0]);
    }

    #[test]
    fn test_sweep_endpoints() {
        let b = evaluate(&array![2.0, 10.0], &iter(), &iter()).unwrap();
        assert!((b[0] - 28.749_450).abs() < 1e-5, "B(2) = {}", b[0]);
        assert!((b[1] - 2.524_827).abs() < 1e-5, "B(10) = {}", b[1]);
    }

    #[test]
    fn test_higher_density_raises_field() {
        let target = ReactorParameters {
            greenwald_fraction: 1.2,
            ..iter().as_target()
        };
        let b = evaluate(&array![6.2], &target, &iter()).unwrap();
        assert!((b[0] - 8.256_976).abs() < 1e-5, "B = {}", b[0]);
    }

    #[test]
    fn test_exhaust_ratio_held_at_reference() {
        let reference = iter();
        let target = ReactorParameters {
            greenwald_fraction: 1.0,
            lh_fraction: 1.1,
            safety_factor: 4.2,
            ..reference.as_target()
        };
        let radii = array![2.5, 6.2, 9.0];
        let b = evaluate(&radii, &target, &reference).unwrap();
        for (r, b) in radii.iter().zip(b.iter()) {
            let ratio = impurity_exhaust_ratio(&target, *b, *r, &reference).unwrap();
            assert!((ratio - 1.0).abs() < 1e-12, "f_Z ratio = {ratio} at R = {r}");
        }
    }

    #[test]
    fn test_uncalibrated_reference() {
        let result = evaluate(&array![6.2], &iter(), &iter().as_target());
        assert!(matches!(result, Err(FusionError::UncalibratedReference(_))));
    }
}
