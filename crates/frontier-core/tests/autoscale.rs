// File: crates/frontier-core/tests/autoscale.rs
// Purpose: Validate auto-Y bounds computation and its fallbacks.

use frontier_core::auto_y_bounds;
use frontier_core::state::{DEFAULT_Y_MAX, DEFAULT_Y_MIN};

#[test]
fn pads_by_eight_percent_of_range() {
    // Range 634, padding 50.72: floor(797 - 50.72) = 746, ceil(1431 + 50.72) = 1482.
    let (min, max) = auto_y_bounds(&[797.0, 1431.0]);
    assert_eq!(min, 746.0);
    assert_eq!(max, 1482.0);
}

#[test]
fn intermediate_scores_do_not_change_extremes() {
    let (min, max) = auto_y_bounds(&[1431.0, 900.0, 797.0, 1200.0]);
    assert_eq!(min, 746.0);
    assert_eq!(max, 1482.0);
}

#[test]
fn empty_input_falls_back_to_defaults() {
    assert_eq!(auto_y_bounds(&[]), (DEFAULT_Y_MIN, DEFAULT_Y_MAX));
}

#[test]
fn flat_range_widens_symmetrically() {
    // min == max widens by 20 each way before padding.
    let (min, max) = auto_y_bounds(&[1000.0, 1000.0]);
    assert!(min < 1000.0 && max > 1000.0);
    assert_eq!(1000.0 - min, max - 1000.0);
}

#[test]
fn minimum_is_floored_at_zero() {
    let (min, _) = auto_y_bounds(&[1.0, 500.0]);
    assert!(min >= 0.0);
}
