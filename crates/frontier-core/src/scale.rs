// File: crates/frontier-core/src/scale.rs
// Summary: Auto-Y bounds, linear world<->pixel scales, and tick layout helpers.

use crate::dataset::{ms_to_date, ONE_DAY_MS};
use crate::state::{DEFAULT_Y_MAX, DEFAULT_Y_MIN};

/// Fraction of the score range added as padding above and below.
pub const Y_PADDING_FRACTION: f64 = 0.08;
/// Symmetric widening applied when all visible scores are equal.
pub const Y_FLAT_MARGIN: f64 = 20.0;

/// Compute auto-Y bounds from visible scores.
/// Empty input falls back to the fixed default range; a flat range widens
/// symmetrically; otherwise pad by 8% of the range, flooring the minimum at 0.
pub fn auto_y_bounds(scores: &[f64]) -> (f64, f64) {
    let mut it = scores.iter().copied();
    let Some(first) = it.next() else {
        return (DEFAULT_Y_MIN, DEFAULT_Y_MAX);
    };
    let (mut min, mut max) = it.fold((first, first), |(lo, hi), s| (lo.min(s), hi.max(s)));
    if min == max {
        min -= Y_FLAT_MARGIN;
        max += Y_FLAT_MARGIN;
    }
    let padding = (max - min) * Y_PADDING_FRACTION;
    (((min - padding).floor()).max(0.0), (max + padding).ceil())
}

/// Linear world-to-pixel mapping for one axis. For Y, construct with
/// `px_min` = bottom and `px_max` = top so larger values map upward.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub world_min: f64,
    pub world_max: f64,
    pub px_min: f32,
    pub px_max: f32,
}

impl LinearScale {
    pub fn new(world_min: f64, world_max: f64, px_min: f32, px_max: f32) -> Self {
        let mut s = Self { world_min, world_max, px_min, px_max };
        if (s.world_max - s.world_min).abs() < 1e-9 {
            s.world_max = s.world_min + 1.0;
        }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.world_min) / (self.world_max - self.world_min);
        self.px_min + t as f32 * (self.px_max - self.px_min)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let t = ((px - self.px_min) / (self.px_max - self.px_min)) as f64;
        self.world_min + t * (self.world_max - self.world_min)
    }

    pub fn world_span(&self) -> f64 {
        self.world_max - self.world_min
    }
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 {
        return vec![start, end];
    }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Hard ceiling on emitted ticks, independent of the stride math.
const MAX_TICKS: usize = 32;

/// Month boundaries inside an epoch-ms range, with `MMM yy` labels.
/// Wide ranges skip months to keep at most ~16 ticks. The cursor advance is
/// checked: a calendar overflow ends the walk instead of repeating a date.
pub fn month_ticks(x_min_ms: f64, x_max_ms: f64) -> Vec<(f64, String)> {
    let (Some(start), Some(end)) = (ms_to_date(x_min_ms), ms_to_date(x_max_ms)) else {
        return Vec::new();
    };
    if end < start {
        return Vec::new();
    }
    use chrono::Datelike;
    let months_total = (end.year() as i64 * 12 + end.month() as i64)
        - (start.year() as i64 * 12 + start.month() as i64);
    let stride = ((months_total / 16) + 1).max(1).min(u32::MAX as i64) as u32;

    let mut out = Vec::new();
    let mut cursor = first_of_next_month_or_same(start);
    while cursor <= end && out.len() < MAX_TICKS {
        let ms = crate::dataset::date_to_ms(cursor);
        if ms >= x_min_ms && ms <= x_max_ms {
            out.push((ms, cursor.format("%b %y").to_string()));
        }
        match add_months(cursor, stride) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    out
}

fn first_of_next_month_or_same(date: chrono::NaiveDate) -> chrono::NaiveDate {
    use chrono::Datelike;
    match date.with_day(1) {
        Some(first) if first == date => first,
        Some(first) => add_months(first, 1).unwrap_or(first),
        None => date,
    }
}

fn add_months(date: chrono::NaiveDate, months: u32) -> Option<chrono::NaiveDate> {
    date.checked_add_months(chrono::Months::new(months))
}

/// Convenience: a span expressed in whole days, for label thresholds.
pub fn span_days(x_min_ms: f64, x_max_ms: f64) -> f64 {
    (x_max_ms - x_min_ms) / ONE_DAY_MS
}
