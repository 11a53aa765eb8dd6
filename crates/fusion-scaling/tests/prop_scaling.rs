// ─────────────────────────────────────────────────────────────────────
// SCPN Fusion Core — Property-Based Tests (proptest) for fusion-scaling
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for the four scaling laws.
//!
//! Covers: calibration round-trip, monotonic decrease in R, sweep
//! shape, singleton/sweep consistency, and bounded-control safety.

use fusion_scaling::{evaluate_all, ScalingLaw};
use fusion_types::config::RadiusSweep;
use fusion_types::domain::Parameter;
use fusion_types::params::ReactorParameters;
use ndarray::{array, Array1};
use proptest::prelude::*;

fn iter() -> ReactorParameters {
    ReactorParameters::iter_reference()
}

/// A target with every adjustable control drawn from its range.
fn any_target() -> impl Strategy<Value = ReactorParameters> {
    proptest::collection::vec(0.0f64..=1.0, Parameter::ALL.len()).prop_map(|fracs| {
        Parameter::ALL
            .iter()
            .zip(fracs)
            .fold(iter().as_target(), |params, (p, frac)| {
                let d = p.domain();
                p.set(&params, d.clamp(d.min + frac * (d.max - d.min)))
            })
    })
}

// ── Fixed Scenarios ──────────────────────────────────────────────────

#[test]
fn iter_point_reproduced_by_every_law() {
    for law in ScalingLaw::ALL {
        let b = law.evaluate(&array![6.2], &iter(), &iter()).unwrap();
        assert_eq!(b.len(), 1);
        assert!(
            (b[0] - 5.2).abs() / 5.2 < 1e-9,
            "{} returned {} at the reference radius",
            law.label(),
            b[0]
        );
    }
}

#[test]
fn iter_curves_non_increasing_over_sweep() {
    let radii = RadiusSweep::default().radii();
    let curves = evaluate_all(&radii, &iter(), &iter()).unwrap();
    for law in ScalingLaw::ALL {
        let b = curves.get(law);
        for i in 1..b.len() {
            assert!(
                b[i] <= b[i - 1],
                "{} increases between R={} and R={}",
                law.label(),
                radii[i - 1],
                radii[i]
            );
        }
    }
}

#[test]
fn doubled_fusion_power_scenario() {
    let target = ReactorParameters {
        fusion_power_mw: 800.0,
        ..iter().as_target()
    };
    let b = ScalingLaw::FusionPower
        .evaluate(&array![6.2], &target, &iter())
        .unwrap();
    assert!((b[0] - 6.184).abs() < 1e-3, "B = {}", b[0]);
}

#[test]
fn minimum_power_balance_gain_stays_finite() {
    let target = ReactorParameters {
        q_pb: 1.0,
        ..iter().as_target()
    };
    let radii = RadiusSweep::default().radii();
    let b = ScalingLaw::PowerBalance
        .evaluate(&radii, &target, &iter())
        .unwrap();
    assert!(b.iter().all(|v| v.is_finite() && *v > 0.0));
}

#[test]
fn empty_sweep_gives_empty_curves() {
    let radii = Array1::<f64>::zeros(0);
    let curves = evaluate_all(&radii, &iter(), &iter()).unwrap();
    assert!(curves.is_empty());
}

// ── Properties over the control space ────────────────────────────────

proptest! {
    /// Any in-range control setting evaluates to finite, positive fields.
    #[test]
    fn controls_never_produce_nan(target in any_target()) {
        let radii = RadiusSweep::default().radii();
        let curves = evaluate_all(&radii, &target, &iter()).unwrap();
        for law in ScalingLaw::ALL {
            prop_assert!(curves.get(law).iter().all(|b| b.is_finite() && *b > 0.0),
                "{} produced a non-physical field for {:?}", law.label(), target);
        }
    }

    /// Every law falls monotonically with R for any in-range target.
    #[test]
    fn fields_decrease_with_radius(target in any_target()) {
        let radii = RadiusSweep::default().radii();
        let curves = evaluate_all(&radii, &target, &iter()).unwrap();
        for law in ScalingLaw::ALL {
            let b = curves.get(law);
            for i in 1..b.len() {
                prop_assert!(b[i] < b[i - 1], "{} not decreasing at {}", law.label(), i);
            }
        }
    }

    /// A singleton evaluation equals the matching sweep element.
    #[test]
    fn singleton_matches_sweep(target in any_target(), idx in 0usize..33) {
        let radii = RadiusSweep::default().radii();
        let curves = evaluate_all(&radii, &target, &iter()).unwrap();
        let single = evaluate_all(&array![radii[idx]], &target, &iter()).unwrap();
        for law in ScalingLaw::ALL {
            prop_assert_eq!(single.get(law)[0], curves.get(law)[idx]);
        }
    }

    /// Output length and order follow the input radii.
    #[test]
    fn output_follows_input_order(mut radii in proptest::collection::vec(0.5f64..20.0, 0..40)) {
        radii.reverse();
        let radii = Array1::from(radii);
        for law in ScalingLaw::ALL {
            let b = law.evaluate(&radii, &iter(), &iter()).unwrap();
            prop_assert_eq!(b.len(), radii.len());
            for i in 1..radii.len() {
                if radii[i] > radii[i - 1] {
                    prop_assert!(b[i] <= b[i - 1]);
                } else if radii[i] < radii[i - 1] {
                    prop_assert!(b[i] >= b[i - 1]);
                }
            }
        }
    }

    /// Re-calibrating on any consistent point reproduces that point.
    #[test]
    fn recalibrated_reference_roundtrip(b_ref in 2.0f64..20.0, r_ref in 1.0f64..10.0) {
        let reference = iter().with_calibration(b_ref, r_ref);
        for law in ScalingLaw::ALL {
            let b = law.evaluate(&array![r_ref], &reference, &reference).unwrap();
            prop_assert!((b[0] - b_ref).abs() / b_ref < 1e-9,
                "{}: {} vs {}", law.label(), b[0], b_ref);
        }
    }

    /// A non-positive radius anywhere in the sweep is rejected.
    #[test]
    fn nonpositive_radius_rejected(bad in -10.0f64..=0.0, pos in 0usize..33) {
        let mut radii = RadiusSweep::default().radii();
        radii[pos] = bad;
        for law in ScalingLaw::ALL {
            let err = law.evaluate(&radii, &iter(), &iter()).unwrap_err();
            prop_assert_eq!(err.parameter(), Some("radius"));
        }
    }
}
