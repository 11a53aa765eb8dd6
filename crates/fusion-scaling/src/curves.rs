// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Field Curves
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The four laws as one family, and their joint evaluation over a sweep.

use crate::{current_drive, divertor_exhaust, fusion_power, power_balance};
use fusion_types::error::FusionResult;
use fusion_types::params::ReactorParameters;
use ndarray::Array1;

/// One of the four field/radius constraints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalingLaw {
    FusionPower,
    PowerBalance,
    CurrentDrive,
    DivertorExhaust,
}

impl ScalingLaw {
    pub const ALL: [ScalingLaw; 4] = [
        ScalingLaw::FusionPower,
        ScalingLaw::PowerBalance,
        ScalingLaw::CurrentDrive,
        ScalingLaw::DivertorExhaust,
    ];

    pub fn index(self) -> usize {
        match self {
            ScalingLaw::FusionPower => 0,
            ScalingLaw::PowerBalance => 1,
            ScalingLaw::CurrentDrive => 2,
            ScalingLaw::DivertorExhaust => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ScalingLaw::FusionPower => "Fusion power",
            ScalingLaw::PowerBalance => "Power balance",
            ScalingLaw::CurrentDrive => "Current drive",
            ScalingLaw::DivertorExhaust => "Divertor exhaust",
        }
    }

    pub fn equation(self) -> &'static str {
        match self {
            ScalingLaw::FusionPower => "Eq. 2.1",
            ScalingLaw::PowerBalance => "Eq. 2.2",
            ScalingLaw::CurrentDrive => "Eq. 2.3",
            ScalingLaw::DivertorExhaust => "Eq. 2.4",
        }
    }

    /// Required field [T] at each radius in `radii`.
    pub fn evaluate(
        self,
        radii: &Array1<f64>,
        target: &ReactorParameters,
        reference: &ReactorParameters,
    ) -> FusionResult<Array1<f64>> {
        match self {
            ScalingLaw::FusionPower => fusion_power::evaluate(radii, target, reference),
            ScalingLaw::PowerBalance => power_balance::evaluate(radii, target, reference),
            ScalingLaw::CurrentDrive => current_drive::evaluate(radii, target, reference),
            ScalingLaw::DivertorExhaust => divertor_exhaust::evaluate(radii, target, reference),
        }
    }
}

/// Required-field curves of all four laws over one radius sweep.
#[derive(Debug, Clone)]
pub struct FieldCurves {
    pub radii: Array1<f64>,
    /// Indexed by [`ScalingLaw::index`].
    pub fields: [Array1<f64>; 4],
}

impl FieldCurves {
    pub fn get(&self, law: ScalingLaw) -> &Array1<f64> {
        &self.fields[law.index()]
    }

    pub fn len(&self) -> usize {
        self.radii.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radii.is_empty()
    }

    /// Fields of all four laws at sweep index `i`.
    pub fn sample(&self, i: usize) -> Option<[f64; 4]> {
        if i >= self.len() {
            return None;
        }
        Some(self.fields.each_ref().map(|f| f[i]))
    }

    /// Largest required field at sweep index `i`: the field that meets
    /// all four constraints, and the law that sets it.
    pub fn binding_field(&self, i: usize) -> Option<(ScalingLaw, f64)> {
        let sample = self.sample(i)?;
        ScalingLaw::ALL
            .into_iter()
            .map(|law| (law, sample[law.index()]))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// Sweep index nearest to radius `r` [m]; `None` for an empty sweep.
pub fn nearest_index(radii: &Array1<f64>, r: f64) -> Option<usize> {
    radii
        .iter()
        .enumerate()
        .min_by(|a, b| (a.1 - r).abs().total_cmp(&(b.1 - r).abs()))
        .map(|(i, _)| i)
}

/// Evaluate all four laws; the first failure aborts the whole set.
pub fn evaluate_all(
    radii: &Array1<f64>,
    target: &ReactorParameters,
    reference: &ReactorParameters,
) -> FusionResult<FieldCurves> {
    let fields = [
        ScalingLaw::FusionPower.evaluate(radii, target, reference)?,
        ScalingLaw::PowerBalance.evaluate(radii, target, reference)?,
        ScalingLaw::CurrentDrive.evaluate(radii, target, reference)?,
        ScalingLaw::DivertorExhaust.evaluate(radii, target, reference)?,
    ];
    tracing::debug!(points = radii.len(), "evaluated field curves");
    Ok(FieldCurves {
        radii: radii.clone(),
        fields,
    })
}
