// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Control Domains
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The eight user-adjustable design parameters and their control ranges.
//!
//! Aspect ratio is not adjustable; it stays at the reference value.

use crate::error::{FusionError, FusionResult};
use crate::params::ReactorParameters;

/// An adjustable input of the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    LhFraction,
    GreenwaldFraction,
    SafetyFactor,
    HFactor,
    FusionPower,
    QPowerBalance,
    QCurrentDrive,
    BetaN,
}

/// Closed control range with a fixed adjustment step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterDomain {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl ParameterDomain {
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && value <= self.max
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Move `value` by `steps` increments, staying in range.
    ///
    /// Integer-stepped domains snap to the step grid so repeated
    /// increments do not accumulate rounding.
    pub fn nudge(&self, value: f64, steps: i32) -> f64 {
        let raw = value + f64::from(steps) * self.step;
        let snapped = self.min + ((raw - self.min) / self.step).round() * self.step;
        self.clamp(snapped)
    }
}

impl Parameter {
    /// Display order of the controls.
    pub const ALL: [Parameter; 8] = [
        Parameter::LhFraction,
        Parameter::GreenwaldFraction,
        Parameter::SafetyFactor,
        Parameter::HFactor,
        Parameter::FusionPower,
        Parameter::QPowerBalance,
        Parameter::QCurrentDrive,
        Parameter::BetaN,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Parameter::LhFraction => "f_LH",
            Parameter::GreenwaldFraction => "f_GW",
            Parameter::SafetyFactor => "q",
            Parameter::HFactor => "H",
            Parameter::FusionPower => "P_fus",
            Parameter::QPowerBalance => "Q_PB",
            Parameter::QCurrentDrive => "Q_CD",
            Parameter::BetaN => "beta_N",
        }
    }

    /// Field name in [`ReactorParameters`], used in error messages.
    pub fn field_name(self) -> &'static str {
        match self {
            Parameter::LhFraction => "lh_fraction",
            Parameter::GreenwaldFraction => "greenwald_fraction",
            Parameter::SafetyFactor => "safety_factor",
            Parameter::HFactor => "h_factor",
            Parameter::FusionPower => "fusion_power_mw",
            Parameter::QPowerBalance => "q_pb",
            Parameter::QCurrentDrive => "q_cd",
            Parameter::BetaN => "beta_n",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Parameter::FusionPower => "MW",
            _ => "",
        }
    }

    pub fn domain(self) -> ParameterDomain {
        let (min, max, step) = match self {
            Parameter::LhFraction => (1.0, 1.33, 0.01),
            Parameter::GreenwaldFraction => (0.85, 1.2, 0.01),
            Parameter::SafetyFactor => (3.1, 6.0, 0.1),
            Parameter::HFactor => (1.0, 1.2, 0.01),
            Parameter::FusionPower => (400.0, 3500.0, 100.0),
            Parameter::QPowerBalance => (1.0, 100.0, 1.0),
            Parameter::QCurrentDrive => (1.0, 100.0, 1.0),
            Parameter::BetaN => (1.8, 3.5, 0.1),
        };
        ParameterDomain { min, max, step }
    }

    pub fn get(self, params: &ReactorParameters) -> f64 {
        match self {
            Parameter::LhFraction => params.lh_fraction,
            Parameter::GreenwaldFraction => params.greenwald_fraction,
            Parameter::SafetyFactor => params.safety_factor,
            Parameter::HFactor => params.h_factor,
            Parameter::FusionPower => params.fusion_power_mw,
            Parameter::QPowerBalance => params.q_pb,
            Parameter::QCurrentDrive => params.q_cd,
            Parameter::BetaN => params.beta_n,
        }
    }

    /// Copy of `params` with this parameter replaced.
    pub fn set(self, params: &ReactorParameters, value: f64) -> ReactorParameters {
        let mut out = *params;
        match self {
            Parameter::LhFraction => out.lh_fraction = value,
            Parameter::GreenwaldFraction => out.greenwald_fraction = value,
            Parameter::SafetyFactor => out.safety_factor = value,
            Parameter::HFactor => out.h_factor = value,
            Parameter::FusionPower => out.fusion_power_mw = value,
            Parameter::QPowerBalance => out.q_pb = value,
            Parameter::QCurrentDrive => out.q_cd = value,
            Parameter::BetaN => out.beta_n = value,
        }
        out
    }
}

/// Reject any adjustable parameter outside its control range.
pub fn check_domains(params: &ReactorParameters) -> FusionResult<()> {
    for p in Parameter::ALL {
        let value = p.get(params);
        let d = p.domain();
        if !d.contains(value) {
            return Err(FusionError::invalid(
                p.field_name(),
                value,
                format!("outside control range [{}, {}]", d.min, d.max),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iter_point_inside_all_domains() {
        check_domains(&ReactorParameters::iter_reference()).expect("ITER within controls");
    }

    #[test]
    fn test_out_of_range_names_field() {
        let p = Parameter::FusionPower.set(&ReactorParameters::iter_reference(), 5000.0);
        let err = check_domains(&p).unwrap_err();
        assert_eq!(err.parameter(), Some("fusion_power_mw"));
    }

    #[test]
    fn test_get_set_roundtrip() {
        let base = ReactorParameters::iter_reference();
        for p in Parameter::ALL {
            let d = p.domain();
            let updated = p.set(&base, d.max);
            assert_eq!(p.get(&updated), d.max, "{}", p.label());
            assert_eq!(updated.aspect_ratio, base.aspect_ratio);
            assert_eq!(updated.field_ref, base.field_ref);
        }
    }

    #[test]
    fn test_nudge_clamps_and_snaps() {
        let d = Parameter::QPowerBalance.domain();
        assert_eq!(d.nudge(1.0, -1), 1.0);
        assert_eq!(d.nudge(99.0, 5), 100.0);
        assert_eq!(d.nudge(10.0, 1), 11.0);

        let d = Parameter::BetaN.domain();
        let mut v = d.min;
        for _ in 0..17 {
            v = d.nudge(v, 1);
        }
        assert!((v - 3.5).abs() < 1e-12, "17 steps of 0.1 from 1.8 should be 3.5: {v}");
    }

    #[test]
    fn test_fusion_power_steps_of_100() {
        let d = Parameter::FusionPower.domain();
        assert_eq!(d.nudge(400.0, 1), 500.0);
        assert_eq!(d.nudge(3500.0, 1), 3500.0);
    }
}
