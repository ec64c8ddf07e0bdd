// File: crates/pulse-core/tests/axes.rs
// Purpose: Validate gridline and tick positioning.

use pulse_core::grid::{gridline_ys, linspace, ratio_to_y};
use pulse_core::{label_baseline, value_ticks};

const EPS: f64 = 1e-9;

#[test]
fn gridlines_split_drawable_height_into_quarters() {
    let ys = gridline_ys(120.0);
    let want = [100.0, 80.0, 60.0, 40.0, 20.0];
    assert_eq!(ys.len(), want.len());
    for (got, want) in ys.iter().zip(want) {
        assert!((got - want).abs() < EPS, "expected {want}, got {got}");
    }
}

#[test]
fn ratio_endpoints_map_to_baseline_and_top() {
    let height = 200.0;
    assert!((ratio_to_y(0.0, height) - (height - 20.0)).abs() < EPS);
    assert!((ratio_to_y(1.0, height) - 20.0).abs() < EPS);
}

#[test]
fn value_ticks_round_half_and_full_scale() {
    let ticks = value_ticks(70.0, 120.0);
    let texts: Vec<&str> = ticks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["0", "35", "70"]);

    // anchored left of the plot, nudged onto the gridline
    for t in &ticks {
        assert!((t.x - 15.0).abs() < EPS);
    }
    assert!((ticks[0].y - 103.0).abs() < EPS);
    assert!((ticks[2].y - 23.0).abs() < EPS);
}

#[test]
fn value_ticks_round_to_nearest_integer() {
    let ticks = value_ticks(45.0, 120.0);
    let texts: Vec<&str> = ticks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["0", "23", "45"]);
}

#[test]
fn point_labels_sit_near_the_bottom_edge() {
    assert!((label_baseline(120.0) - 115.0).abs() < EPS);
}

#[test]
fn linspace_is_inclusive_of_both_ends() {
    let v = linspace(0.0, 1.0, 5);
    assert_eq!(v, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    // degenerate step count still yields the endpoints
    assert_eq!(linspace(2.0, 4.0, 1), vec![2.0, 4.0]);
}
