// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Scaling Laws
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Required on-axis field versus major radius under four constraints.
//!
//! Each law is calibrated so that the reference design point is
//! reproduced exactly at its own radius, then projected to a target
//! design over a radius sweep:
//! - `fusion_power`: fusion power output (Eq. 2.1)
//! - `power_balance`: auxiliary-heating multiplication Q_PB (Eq. 2.2)
//! - `current_drive`: current-drive multiplication Q_CD (Eq. 2.3)
//! - `divertor_exhaust`: divertor impurity exhaust (Eq. 2.4)

mod calibration;
pub mod current_drive;
pub mod curves;
pub mod divertor_exhaust;
pub mod fusion_power;
pub mod power_balance;

pub use curves::{evaluate_all, nearest_index, FieldCurves, ScalingLaw};
