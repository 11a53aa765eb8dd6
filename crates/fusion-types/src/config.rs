// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::error::{FusionError, FusionResult};
use crate::params::ReactorParameters;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

/// Top-level explorer configuration.
/// Every section is optional in JSON; missing sections take the ITER defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerConfig {
    #[serde(default = "ReactorParameters::iter_reference")]
    pub reference: ReactorParameters,
    #[serde(default)]
    pub sweep: RadiusSweep,
    #[serde(default)]
    pub plot: PlotBounds,
}

/// Major-radius sweep, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusSweep {
    /// First radius [m] (default: 2.0)
    #[serde(default = "default_sweep_start")]
    pub start_m: f64,
    /// Last radius [m] (default: 10.0)
    #[serde(default = "default_sweep_stop")]
    pub stop_m: f64,
    /// Spacing [m] (default: 0.25)
    #[serde(default = "default_sweep_step")]
    pub step_m: f64,
}

/// Vertical axis of the field chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotBounds {
    /// Lower field bound [T] (default: 5.0)
    #[serde(default = "default_field_min")]
    pub field_min_t: f64,
    /// Upper field bound [T] (default: 14.0)
    #[serde(default = "default_field_max")]
    pub field_max_t: f64,
}

fn default_sweep_start() -> f64 {
    2.0
}
fn default_sweep_stop() -> f64 {
    10.0
}
fn default_sweep_step() -> f64 {
    0.25
}
fn default_field_min() -> f64 {
    5.0
}
fn default_field_max() -> f64 {
    14.0
}

impl Default for RadiusSweep {
    fn default() -> Self {
        RadiusSweep {
            start_m: default_sweep_start(),
            stop_m: default_sweep_stop(),
            step_m: default_sweep_step(),
        }
    }
}

impl Default for PlotBounds {
    fn default() -> Self {
        PlotBounds {
            field_min_t: default_field_min(),
            field_max_t: default_field_max(),
        }
    }
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        ExplorerConfig {
            reference: ReactorParameters::iter_reference(),
            sweep: RadiusSweep::default(),
            plot: PlotBounds::default(),
        }
    }
}

/// Upper bound on sweep length.
pub const MAX_SWEEP_POINTS: usize = 1_000_000;

/// Allowed relative gap between the span and a whole number of steps.
const STEP_FIT_TOL: f64 = 1e-9;

impl RadiusSweep {
    /// Number of steps spanning the sweep, before rounding.
    fn step_span(&self) -> f64 {
        (self.stop_m - self.start_m) / self.step_m
    }

    /// Number of sample points, endpoints included. A sweep that fails
    /// [`RadiusSweep::validate`] gives 0 when reversed or undefined and
    /// saturates at [`MAX_SWEEP_POINTS`] when too dense.
    pub fn point_count(&self) -> usize {
        let steps = self.step_span().round();
        if steps.is_nan() || steps < 0.0 {
            return 0;
        }
        if steps >= (MAX_SWEEP_POINTS - 1) as f64 {
            return MAX_SWEEP_POINTS;
        }
        steps as usize + 1
    }

    /// Radii [m] from `start_m` to `stop_m`.
    pub fn radii(&self) -> Array1<f64> {
        Array1::linspace(self.start_m, self.stop_m, self.point_count())
    }

    pub fn validate(&self) -> FusionResult<()> {
        if !self.start_m.is_finite() || self.start_m <= 0.0 {
            return Err(FusionError::ConfigError(
                "sweep start_m must be finite and > 0".to_string(),
            ));
        }
        if !self.stop_m.is_finite() || self.stop_m < self.start_m {
            return Err(FusionError::ConfigError(
                "sweep stop_m must be finite and >= start_m".to_string(),
            ));
        }
        if !self.step_m.is_finite() || self.step_m <= 0.0 {
            return Err(FusionError::ConfigError(
                "sweep step_m must be finite and > 0".to_string(),
            ));
        }
        let steps = self.step_span();
        if !steps.is_finite() || steps >= (MAX_SWEEP_POINTS - 1) as f64 {
            return Err(FusionError::ConfigError(format!(
                "sweep has more than {MAX_SWEEP_POINTS} points"
            )));
        }
        if (steps - steps.round()).abs() > STEP_FIT_TOL * steps.max(1.0) {
            return Err(FusionError::ConfigError(format!(
                "sweep step_m {} does not divide [{}, {}] evenly",
                self.step_m, self.start_m, self.stop_m
            )));
        }
        Ok(())
    }
}

impl PlotBounds {
    pub fn validate(&self) -> FusionResult<()> {
        if !self.field_min_t.is_finite()
            || !self.field_max_t.is_finite()
            || self.field_min_t >= self.field_max_t
        {
            return Err(FusionError::ConfigError(
                "plot field_min_t must be < field_max_t".to_string(),
            ));
        }
        Ok(())
    }
}

impl ExplorerConfig {
    /// Load and validate from a JSON file.
    pub fn from_file(path: &str) -> FusionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        tracing::info!(path, "loaded explorer config");
        Ok(config)
    }

    pub fn validate(&self) -> FusionResult<()> {
        self.reference.validate()?;
        self.reference.calibration()?;
        self.sweep.validate()?;
        self.plot.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!(
            "fusion_types_{}_{}.json",
            name,
            std::process::id()
        ));
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(contents.as_bytes()).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn test_default_sweep_has_33_points() {
        let radii = RadiusSweep::default().radii();
        assert_eq!(radii.len(), 33);
        assert!((radii[0] - 2.0).abs() < 1e-12);
        assert!((radii[32] - 10.0).abs() < 1e-12);
        assert!((radii[1] - 2.25).abs() < 1e-12);
        // R = 6.2 is not on the grid, 6.0 and 6.25 are
        assert!((radii[16] - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_config_validates() {
        let cfg = ExplorerConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.plot.field_min_t, 5.0);
        assert_eq!(cfg.plot.field_max_t, 14.0);
    }

    #[test]
    fn test_load_partial_config() {
        let path = write_temp("partial", r#"{ "sweep": { "step_m": 0.5 } }"#);
        let cfg = ExplorerConfig::from_file(&path).unwrap();
        assert_eq!(cfg.reference, ReactorParameters::iter_reference());
        assert_eq!(cfg.sweep.step_m, 0.5);
        assert_eq!(cfg.sweep.start_m, 2.0);
        assert_eq!(cfg.sweep.radii().len(), 17);
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_uncalibrated_reference_rejected() {
        let path = write_temp(
            "uncal",
            r#"{ "reference": {
                "aspect_ratio": 3.1, "safety_factor": 3.1, "h_factor": 1.0,
                "beta_n": 1.8, "greenwald_fraction": 0.85, "lh_fraction": 1.33,
                "fusion_power_mw": 400.0, "q_cd": 1.0, "q_pb": 10.0
            } }"#,
        );
        let result = ExplorerConfig::from_file(&path);
        assert!(matches!(result, Err(FusionError::UncalibratedReference(_))));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_bad_sweep_rejected() {
        let cfg = ExplorerConfig {
            sweep: RadiusSweep {
                start_m: 0.0,
                ..RadiusSweep::default()
            },
            ..ExplorerConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(FusionError::ConfigError(_))));
    }

    #[test]
    fn test_tiny_step_rejected_before_sampling() {
        let sweep = RadiusSweep {
            start_m: 2.0,
            stop_m: 10.0,
            step_m: 1e-300,
        };
        assert!(matches!(sweep.validate(), Err(FusionError::ConfigError(_))));
        assert_eq!(sweep.point_count(), MAX_SWEEP_POINTS);
    }

    #[test]
    fn test_uneven_step_rejected() {
        let sweep = RadiusSweep {
            start_m: 2.0,
            stop_m: 10.0,
            step_m: 3.0,
        };
        match sweep.validate() {
            Err(FusionError::ConfigError(msg)) => assert!(msg.contains("evenly"), "{msg}"),
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn test_decimal_step_accepted() {
        let sweep = RadiusSweep {
            start_m: 2.0,
            stop_m: 10.0,
            step_m: 0.1,
        };
        sweep.validate().unwrap();
        assert_eq!(sweep.point_count(), 81);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ExplorerConfig::from_file("/nonexistent/explorer.json");
        assert!(matches!(result, Err(FusionError::Io(_))));
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = ExplorerConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: ExplorerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(cfg, cfg2);
    }
}
