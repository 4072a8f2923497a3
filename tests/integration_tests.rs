//! End-to-end tests for the reference hallway scenario
//!
//! Runs the four-position hallway with the scripted DOOR, WALL, DOOR
//! observation sequence and checks every intermediate value against
//! golden numbers. The goldens were computed once from a reference run
//! and are written as exact fractions: with the hallway models every
//! intermediate distribution is rational.

mod helpers;

use beliefgrid::scenario::{alternating_readings, HallwayScenario};
use beliefgrid::{FilterHistory, SensorReading};
use helpers::{approx_eq, assert_history_normalized, vec_approx_eq};

const GOLDEN_TOLERANCE: f64 = 1e-12;

// Step 1: predict from uniform, then DOOR
const PREDICTED_1: [f64; 4] = [0.05, 0.2, 0.25, 0.5];
const BELIEF_1: [f64; 4] = [4.0 / 143.0, 34.0 / 143.0, 20.0 / 143.0, 85.0 / 143.0];
const ETA_1: f64 = 200.0 / 143.0;

// Step 2: WALL
const PREDICTED_2: [f64; 4] = [4.0 / 715.0, 46.0 / 715.0, 126.0 / 715.0, 539.0 / 715.0];
const BELIEF_2: [f64; 4] = [16.0 / 1105.0, 46.0 / 1105.0, 504.0 / 1105.0, 539.0 / 1105.0];
const ETA_2: f64 = 220.0 / 51.0;

// Step 3: DOOR
const PREDICTED_3: [f64; 4] = [
    16.0 / 5525.0,
    94.0 / 5525.0,
    658.0 / 5525.0,
    4757.0 / 5525.0,
];
const BELIEF_3: [f64; 4] = [
    128.0 / 87859.0,
    1598.0 / 87859.0,
    5264.0 / 87859.0,
    80869.0 / 87859.0,
];
const ETA_3: f64 = 110500.0 / 87859.0;

fn reference_history() -> FilterHistory {
    HallwayScenario::default().run().expect("reference run")
}

#[test]
fn test_history_shape_and_step_zero() {
    let history = reference_history();

    assert_eq!(history.len(), 4);
    assert_eq!(history.num_updates(), 3);

    let initial = history.initial();
    assert_eq!(initial.timestep, 0);
    assert!(initial.reading.is_none());
    assert!(initial.predicted.is_none());
    assert!(initial.eta.is_none());
    assert!(vec_approx_eq(
        &initial.belief,
        &[0.25, 0.25, 0.25, 0.25],
        GOLDEN_TOLERANCE
    ));
}

#[test]
fn test_every_belief_is_normalized() {
    assert_history_normalized(&reference_history(), 1e-9);
}

#[test]
fn test_golden_step_one() {
    let history = reference_history();
    let step = history.get(1).expect("step 1");

    assert_eq!(step.reading, Some(SensorReading::Door));
    let predicted = step.predicted.as_ref().expect("predicted belief");
    assert!(vec_approx_eq(predicted, &PREDICTED_1, GOLDEN_TOLERANCE));
    assert!(vec_approx_eq(&step.belief, &BELIEF_1, GOLDEN_TOLERANCE));
    assert!(approx_eq(step.eta.expect("eta"), ETA_1, GOLDEN_TOLERANCE));

    // Doors favor p1 and p3, so after DOOR the third position must beat
    // the first
    assert!(step.belief[2] > step.belief[0]);
}

#[test]
fn test_golden_step_two() {
    let history = reference_history();
    let step = history.get(2).expect("step 2");

    assert_eq!(step.reading, Some(SensorReading::Wall));
    let predicted = step.predicted.as_ref().expect("predicted belief");
    assert!(vec_approx_eq(predicted, &PREDICTED_2, GOLDEN_TOLERANCE));
    assert!(vec_approx_eq(&step.belief, &BELIEF_2, GOLDEN_TOLERANCE));
    assert!(approx_eq(step.eta.expect("eta"), ETA_2, GOLDEN_TOLERANCE));
}

#[test]
fn test_golden_step_three() {
    let history = reference_history();
    let step = history.get(3).expect("step 3");

    assert_eq!(step.reading, Some(SensorReading::Door));
    let predicted = step.predicted.as_ref().expect("predicted belief");
    assert!(vec_approx_eq(predicted, &PREDICTED_3, GOLDEN_TOLERANCE));
    assert!(vec_approx_eq(&step.belief, &BELIEF_3, GOLDEN_TOLERANCE));
    assert!(approx_eq(step.eta.expect("eta"), ETA_3, GOLDEN_TOLERANCE));

    // Three steps of forward drift leave the robot almost certainly at
    // the end of the hallway
    assert_eq!(step.most_likely_position(), 3);
}

#[test]
fn test_etas_in_step_order() {
    let history = reference_history();
    let etas: Vec<f64> = history.etas().collect();

    assert_eq!(etas.len(), 3);
    assert!(approx_eq(etas[0], ETA_1, GOLDEN_TOLERANCE));
    assert!(approx_eq(etas[1], ETA_2, GOLDEN_TOLERANCE));
    assert!(approx_eq(etas[2], ETA_3, GOLDEN_TOLERANCE));
}

#[test]
fn test_step_by_step_matches_run() {
    let scenario = HallwayScenario::default();
    let mut filter = scenario.build_filter().expect("filter");
    for reading in alternating_readings(3) {
        filter.step(reading).expect("step");
    }

    let ran = reference_history();
    let stepped = filter.into_history();
    assert_eq!(stepped.len(), ran.len());
    for (a, b) in stepped.records().iter().zip(ran.records()) {
        assert!(vec_approx_eq(
            &a.belief,
            b.belief.as_slice(),
            GOLDEN_TOLERANCE
        ));
    }
}

#[test]
fn test_history_serializes_to_json() {
    let history = reference_history();
    let value = serde_json::to_value(&history).expect("serialize history");

    let steps = value
        .get("steps")
        .and_then(|s| s.as_array())
        .expect("steps array");
    assert_eq!(steps.len(), 4);
    assert_eq!(steps[1]["reading"], serde_json::json!("Door"));
    assert!(steps[0]["eta"].is_null());
}
