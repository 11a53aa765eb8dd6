// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Errors
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FusionError {
    #[error("Invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: String,
    },

    #[error("Uncalibrated reference: {0}")]
    UncalibratedReference(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FusionError {
    /// Shorthand for an [`FusionError::InvalidParameter`].
    pub fn invalid(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        FusionError::InvalidParameter {
            name,
            value,
            reason: reason.into(),
        }
    }

    /// Name of the offending parameter, when the error is tied to one.
    pub fn parameter(&self) -> Option<&'static str> {
        match self {
            FusionError::InvalidParameter { name, .. } => Some(name),
            _ => None,
        }
    }
}

pub type FusionResult<T> = Result<T, FusionError>;

/// Require `value` to be finite and strictly positive.
pub fn require_positive(name: &'static str, value: f64) -> FusionResult<f64> {
    if !value.is_finite() {
        return Err(FusionError::invalid(name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(FusionError::invalid(name, value, "must be > 0"));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("q", 3.1).unwrap(), 3.1);
        assert!(require_positive("q", 0.0).is_err());
        assert!(require_positive("q", -1.0).is_err());
        assert!(require_positive("q", f64::NAN).is_err());
        assert!(require_positive("q", f64::INFINITY).is_err());
    }

    #[test]
    fn test_message_names_parameter() {
        let err = FusionError::invalid("beta_n", -0.5, "must be > 0");
        assert_eq!(err.parameter(), Some("beta_n"));
        let msg = err.to_string();
        assert!(msg.contains("beta_n"), "message should name parameter: {msg}");
        assert!(msg.contains("-0.5"), "message should carry value: {msg}");
    }
}
