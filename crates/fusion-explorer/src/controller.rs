// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Exploration Controller
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Binds the eight control values to the four scaling laws.
//!
//! Every event rebuilds the target from the control values and reruns
//! all four laws over the whole sweep. A rejected cycle keeps no curves.

use fusion_scaling::{evaluate_all, nearest_index, FieldCurves};
use fusion_types::domain::{check_domains, Parameter};
use fusion_types::error::{FusionError, FusionResult};
use fusion_types::params::ReactorParameters;
use ndarray::Array1;

/// Input to the controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    SelectNext,
    SelectPrev,
    /// Move the selected control by one step.
    Increase,
    Decrease,
    /// Move the radius read-out cursor.
    CursorLeft,
    CursorRight,
    /// Restore the initial control values.
    Reset,
    /// Set a control directly, without clamping.
    Set(Parameter, f64),
}

pub struct ExplorationController {
    reference: ReactorParameters,
    radii: Array1<f64>,
    initial: [f64; 8],
    values: [f64; 8],
    selected: usize,
    cursor: usize,
    cycles: u64,
    outcome: FusionResult<FieldCurves>,
}

impl ExplorationController {
    /// `initial` supplies the starting control values; its aspect ratio
    /// and calibration fields are ignored.
    pub fn new(
        reference: ReactorParameters,
        radii: Array1<f64>,
        initial: &ReactorParameters,
    ) -> Self {
        let values = Parameter::ALL.map(|p| p.get(initial));
        let cursor = reference
            .radius_ref
            .and_then(|r_ref| nearest_index(&radii, r_ref))
            .unwrap_or(0);
        let mut controller = ExplorationController {
            reference,
            radii,
            initial: values,
            values,
            selected: 0,
            cursor,
            cycles: 0,
            outcome: Err(FusionError::ConfigError("not evaluated".to_string())),
        };
        controller.recompute();
        controller
    }

    /// Fresh target for this cycle: reference aspect ratio, current controls.
    pub fn target(&self) -> ReactorParameters {
        let base = ReactorParameters {
            aspect_ratio: self.reference.aspect_ratio,
            ..self.reference.as_target()
        };
        Parameter::ALL
            .iter()
            .zip(self.values)
            .fold(base, |params, (p, v)| p.set(&params, v))
    }

    /// Run one full evaluation cycle without storing it.
    pub fn evaluate(&self) -> FusionResult<FieldCurves> {
        let target = self.target();
        check_domains(&target)?;
        evaluate_all(&self.radii, &target, &self.reference)
    }

    pub fn handle(&mut self, event: ControlEvent) {
        let n = Parameter::ALL.len();
        match event {
            ControlEvent::SelectNext => self.selected = (self.selected + 1) % n,
            ControlEvent::SelectPrev => self.selected = (self.selected + n - 1) % n,
            ControlEvent::Increase => self.nudge_selected(1),
            ControlEvent::Decrease => self.nudge_selected(-1),
            ControlEvent::CursorLeft => self.cursor = self.cursor.saturating_sub(1),
            ControlEvent::CursorRight => {
                self.cursor = (self.cursor + 1).min(self.radii.len().saturating_sub(1))
            }
            ControlEvent::Reset => self.values = self.initial,
            ControlEvent::Set(p, v) => self.values[Self::slot(p)] = v,
        }
        self.recompute();
    }

    fn nudge_selected(&mut self, steps: i32) {
        let p = Parameter::ALL[self.selected];
        let v = &mut self.values[self.selected];
        *v = p.domain().nudge(*v, steps);
    }

    fn slot(p: Parameter) -> usize {
        Parameter::ALL.iter().position(|q| *q == p).unwrap_or(0)
    }

    fn recompute(&mut self) {
        self.cycles += 1;
        self.outcome = self.evaluate();
        match &self.outcome {
            Ok(_) => tracing::debug!(cycle = self.cycles, "evaluation cycle complete"),
            Err(e) => tracing::warn!(cycle = self.cycles, error = %e, "evaluation cycle rejected"),
        }
    }

    pub fn reference(&self) -> &ReactorParameters {
        &self.reference
    }

    pub fn radii(&self) -> &Array1<f64> {
        &self.radii
    }

    pub fn value(&self, p: Parameter) -> f64 {
        self.values[Self::slot(p)]
    }

    pub fn selected(&self) -> Parameter {
        Parameter::ALL[self.selected]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn curves(&self) -> Option<&FieldCurves> {
        self.outcome.as_ref().ok()
    }

    pub fn error(&self) -> Option<&FusionError> {
        self.outcome.as_ref().err()
    }
}
