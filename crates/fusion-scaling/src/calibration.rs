// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Calibration Helpers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Precondition checks shared by the four laws.

use fusion_types::error::{require_positive, FusionError, FusionResult};
use fusion_types::params::ReactorParameters;
use ndarray::Array1;

/// Validate a reference and return its `(B_ref, R_ref)`.
pub(crate) fn reference_point(reference: &ReactorParameters) -> FusionResult<(f64, f64)> {
    let point = reference.calibration()?;
    reference.validate()?;
    Ok(point)
}

/// Every radius must be finite and > 0.
pub(crate) fn check_radii(radii: &Array1<f64>) -> FusionResult<()> {
    for &r in radii {
        require_positive("radius", r)?;
    }
    Ok(())
}

/// Full precondition set for one law evaluation.
pub(crate) fn check_inputs(
    radii: &Array1<f64>,
    target: &ReactorParameters,
    reference: &ReactorParameters,
) -> FusionResult<(f64, f64)> {
    let point = reference_point(reference)?;
    target.validate()?;
    check_radii(radii)?;
    Ok(point)
}

/// `(num / den)^exp` for strictly positive operands.
pub(crate) fn ratio_pow(name: &'static str, num: f64, den: f64, exp: f64) -> FusionResult<f64> {
    require_positive(name, num)?;
    require_positive(name, den)?;
    Ok((num / den).powf(exp))
}

/// Reject a curve containing a non-finite or non-positive field.
pub(crate) fn finish(law: &str, field: Array1<f64>) -> FusionResult<Array1<f64>> {
    if let Some(bad) = field.iter().find(|b| !b.is_finite() || **b <= 0.0) {
        return Err(FusionError::PhysicsViolation(format!(
            "{law} law produced non-physical field {bad}"
        )));
    }
    Ok(field)
}
