// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Reactor Parameters
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One point in the space of reactor designs.
//!
//! A reference point additionally carries its on-axis field and major
//! radius; the scaling laws back-solve their constants from it.

use crate::constants::*;
use crate::error::{require_positive, FusionError, FusionResult};
use serde::{Deserialize, Serialize};

/// Physics and engineering parameters of one design point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReactorParameters {
    /// A = R/a.
    pub aspect_ratio: f64,
    /// q.
    pub safety_factor: f64,
    /// H.
    pub h_factor: f64,
    /// β_N.
    pub beta_n: f64,
    /// f_GW.
    pub greenwald_fraction: f64,
    /// f_LH.
    pub lh_fraction: f64,
    /// P_fus [MW].
    pub fusion_power_mw: f64,
    /// Q_CD = P_fus / P_CD.
    pub q_cd: f64,
    /// Q_PB = P_fus / P_aux.
    pub q_pb: f64,
    /// On-axis field [T], set on calibration references only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_ref: Option<f64>,
    /// Major radius [m], set on calibration references only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius_ref: Option<f64>,
}

impl ReactorParameters {
    /// The ITER calibration point (B = 5.2 T at R = 6.2 m).
    pub fn iter_reference() -> Self {
        ReactorParameters {
            aspect_ratio: ITER_ASPECT_RATIO,
            safety_factor: ITER_SAFETY_FACTOR,
            h_factor: ITER_H_FACTOR,
            beta_n: ITER_BETA_N,
            greenwald_fraction: ITER_GREENWALD_FRACTION,
            lh_fraction: ITER_LH_FRACTION,
            fusion_power_mw: ITER_FUSION_POWER_MW,
            q_cd: ITER_Q_CD,
            q_pb: ITER_Q_PB,
            field_ref: Some(ITER_FIELD_T),
            radius_ref: Some(ITER_RADIUS_M),
        }
    }

    /// Copy with the calibration fields cleared.
    pub fn as_target(&self) -> Self {
        ReactorParameters {
            field_ref: None,
            radius_ref: None,
            ..*self
        }
    }

    /// Copy carrying a calibration point.
    pub fn with_calibration(&self, field_t: f64, radius_m: f64) -> Self {
        ReactorParameters {
            field_ref: Some(field_t),
            radius_ref: Some(radius_m),
            ..*self
        }
    }

    pub fn is_calibrated(&self) -> bool {
        self.field_ref.is_some() && self.radius_ref.is_some()
    }

    /// Check every field the scaling laws divide by or raise to a
    /// fractional power.
    pub fn validate(&self) -> FusionResult<()> {
        require_positive("aspect_ratio", self.aspect_ratio)?;
        if self.aspect_ratio <= 1.0 {
            return Err(FusionError::invalid(
                "aspect_ratio",
                self.aspect_ratio,
                "must be > 1",
            ));
        }
        require_positive("safety_factor", self.safety_factor)?;
        require_positive("h_factor", self.h_factor)?;
        require_positive("beta_n", self.beta_n)?;
        require_positive("greenwald_fraction", self.greenwald_fraction)?;
        require_positive("lh_fraction", self.lh_fraction)?;
        if self.lh_fraction < 1.0 {
            return Err(FusionError::invalid(
                "lh_fraction",
                self.lh_fraction,
                "must be >= 1",
            ));
        }
        require_positive("fusion_power_mw", self.fusion_power_mw)?;
        require_positive("q_cd", self.q_cd)?;
        require_positive("q_pb", self.q_pb)?;
        Ok(())
    }

    /// Validated `(B_ref [T], R_ref [m])` of a calibration reference.
    pub fn calibration(&self) -> FusionResult<(f64, f64)> {
        let (field, radius) = match (self.field_ref, self.radius_ref) {
            (Some(b), Some(r)) => (b, r),
            (None, _) => {
                return Err(FusionError::UncalibratedReference(
                    "reference has no field_ref".to_string(),
                ))
            }
            (_, None) => {
                return Err(FusionError::UncalibratedReference(
                    "reference has no radius_ref".to_string(),
                ))
            }
        };
        Ok((
            require_positive("field_ref", field)?,
            require_positive("radius_ref", radius)?,
        ))
    }

    /// Bootstrap current fraction f_BS = c_BS · A^0.5 · q · β_N.
    pub fn bootstrap_fraction(&self) -> f64 {
        C_BOOTSTRAP * self.aspect_ratio.sqrt() * self.safety_factor * self.beta_n
    }
}
