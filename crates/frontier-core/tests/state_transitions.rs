// File: crates/frontier-core/tests/state_transitions.rs
// Purpose: Validate view-state transitions, the auto-Y flag rules, and axis
// input parsing fallbacks.

use chrono::NaiveDate;

use frontier_core::dataset::{date_to_ms, ONE_DAY_MS};
use frontier_core::{
    parse_date_input, parse_score_input, Dataset, RangeShortcut, VendorId, ViewState,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date")
}

#[test]
fn initial_state_hides_low_scoring_vendors() {
    let state = ViewState::new(today());
    assert!(state.auto_y);
    for vendor in [VendorId::Zhipu, VendorId::Minimax, VendorId::Meta, VendorId::Mistral] {
        assert!(state.is_hidden(vendor));
    }
    assert!(!state.is_hidden(VendorId::Openai));

    let (x0, x1) = state.effective_x();
    assert_eq!(x1 - x0, 365.0 * ONE_DAY_MS);
    assert_eq!(x1, date_to_ms(today()));
}

#[test]
fn manual_y_bounds_disable_auto() {
    let mut state = ViewState::new(today());
    state.set_y_bounds(Some(800.0), Some(1500.0));
    assert!(!state.auto_y);
    assert_eq!(state.effective_y(), (800.0, 1500.0));
}

#[test]
fn x_bounds_leave_auto_y_alone() {
    let mut state = ViewState::new(today());
    state.set_x_bounds(Some(0.0), Some(ONE_DAY_MS));
    assert!(state.auto_y);
}

#[test]
fn swapped_bounds_are_normalized() {
    let mut state = ViewState::new(today());
    state.set_y_bounds(Some(1500.0), Some(800.0));
    assert_eq!(state.effective_y(), (800.0, 1500.0));
}

#[test]
fn pan_shifts_both_ranges_and_disables_auto() {
    let mut state = ViewState::new(today());
    let (x0, x1) = state.effective_x();
    let (y0, y1) = state.effective_y();

    state.pan(ONE_DAY_MS, 10.0);
    assert!(!state.auto_y);
    assert_eq!(state.effective_x(), (x0 + ONE_DAY_MS, x1 + ONE_DAY_MS));
    assert_eq!(state.effective_y(), (y0 + 10.0, y1 + 10.0));
}

#[test]
fn zoom_preserves_center_and_scales_span() {
    let mut state = ViewState::new(today());
    let (x0, x1) = state.effective_x();
    let center = (x0 + x1) / 2.0;
    let span = x1 - x0;

    state.zoom(2.0);
    let (nx0, nx1) = state.effective_x();
    assert!(((nx0 + nx1) / 2.0 - center).abs() < 1.0);
    assert!(((nx1 - nx0) - span / 2.0).abs() < 1.0);

    // Degenerate factors are ignored.
    state.zoom(0.0);
    assert_eq!(state.effective_x(), (nx0, nx1));
}

#[test]
fn range_shortcut_sets_window_and_reenables_auto() {
    let dataset = Dataset::builtin();
    let mut state = ViewState::new(today());
    state.set_y_bounds(Some(800.0), Some(1500.0));
    assert!(!state.auto_y);

    state.apply_range(RangeShortcut::LastDays(90), &dataset);
    assert!(state.auto_y);
    let (x0, x1) = state.effective_x();
    assert_eq!(x1, date_to_ms(today()));
    assert_eq!(x1 - x0, 90.0 * ONE_DAY_MS);
}

#[test]
fn beginning_shortcut_uses_dataset_extent() {
    let dataset = Dataset::builtin();
    let (start, end) = dataset.date_extent().expect("non-empty dataset");
    let mut state = ViewState::new(today());

    state.apply_range(RangeShortcut::Beginning, &dataset);
    assert_eq!(state.effective_x(), (date_to_ms(start), date_to_ms(end)));
}

#[test]
fn reset_restores_defaults_and_auto() {
    let dataset = Dataset::builtin();
    let mut state = ViewState::new(today());
    state.pan(ONE_DAY_MS * 30.0, -100.0);
    assert!(!state.auto_y);

    state.reset(&dataset);
    assert!(state.auto_y);
    let (start, end) = dataset.date_extent().expect("non-empty dataset");
    assert_eq!(state.effective_x(), (date_to_ms(start), date_to_ms(end)));
    assert_eq!(
        state.effective_y(),
        (frontier_core::state::DEFAULT_Y_MIN, frontier_core::state::DEFAULT_Y_MAX)
    );
}

#[test]
fn hidden_vendors_persist_across_filter_changes() {
    let mut state = ViewState::new(today());
    state.toggle_vendor(VendorId::Openai);
    state.set_filter(frontier_core::FilterKey::Anthropic);
    state.set_filter(frontier_core::FilterKey::All);
    assert!(state.is_hidden(VendorId::Openai));
}

#[test]
fn malformed_axis_input_clears_the_bound() {
    assert_eq!(parse_date_input(""), None);
    assert_eq!(parse_date_input("not-a-date"), None);
    assert_eq!(parse_date_input("2025-13-40"), None);
    let ms = parse_date_input("2025-06-17").expect("valid date input");
    assert_eq!(
        ms,
        date_to_ms(NaiveDate::from_ymd_opt(2025, 6, 17).expect("valid date"))
    );

    assert_eq!(parse_score_input(""), None);
    assert_eq!(parse_score_input("abc"), None);
    assert_eq!(parse_score_input("NaN"), None);
    assert_eq!(parse_score_input(" 1050 "), Some(1050.0));
}
