// File: crates/frontier-core/tests/ticks.rs
// Purpose: Validate month tick layout, including termination on extreme
// zoomed-out ranges.

use chrono::NaiveDate;

use frontier_core::dataset::date_to_ms;
use frontier_core::scale::month_ticks;

fn ms(y: i32, m: u32, d: u32) -> f64 {
    date_to_ms(NaiveDate::from_ymd_opt(y, m, d).expect("valid date"))
}

#[test]
fn one_tick_per_month_over_a_year() {
    let ticks = month_ticks(ms(2025, 1, 1), ms(2026, 1, 1));
    assert_eq!(ticks.len(), 13);
    assert_eq!(ticks[0].1, "Jan 25");
    assert_eq!(ticks[12].1, "Jan 26");
    for pair in ticks.windows(2) {
        assert!(pair[0].0 < pair[1].0);
    }
}

#[test]
fn wide_ranges_skip_months() {
    let ticks = month_ticks(ms(2020, 1, 1), ms(2026, 1, 1));
    assert!(!ticks.is_empty());
    assert!(ticks.len() <= 17, "72 months must be strided down");
}

#[test]
fn extreme_zoom_out_terminates_with_bounded_ticks() {
    // An X max far beyond the calendar's last representable month; the
    // cursor advance must stop instead of walking forever.
    let ticks = month_ticks(0.0, 8.0e18);
    assert!(ticks.len() <= 32);
}

#[test]
fn unrepresentable_bounds_yield_no_ticks() {
    assert!(month_ticks(0.0, f64::MAX).is_empty());
    assert!(month_ticks(ms(2026, 1, 1), ms(2025, 1, 1)).is_empty());
}
