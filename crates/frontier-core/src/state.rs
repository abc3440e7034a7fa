// File: crates/frontier-core/src/state.rs
// Summary: View state (filter, hidden vendors, axis bounds, auto-Y) with named transitions.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::dataset::{date_to_ms, Dataset, ONE_DAY_MS};
use crate::vendor::{FilterKey, VendorId};

pub const DEFAULT_Y_MIN: f64 = 950.0;
pub const DEFAULT_Y_MAX: f64 = 1450.0;
/// Initial X window: this many days back from today.
pub const DEFAULT_X_WINDOW_DAYS: f64 = 365.0;

/// Explicit axis bounds; `None` means "auto" (defaults or auto-Y fill in).
/// X values are epoch milliseconds, Y values are score units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisBounds {
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

/// Which axis an explicit bound edit targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisKind {
    X,
    Y,
}

/// Date-range shortcuts from the toolbar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeShortcut {
    LastDays(u32),
    Beginning,
}

/// The single mutable state behind the chart. All mutation goes through the
/// named transitions below so the render pipeline can be tested without a UI.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub active_filter: FilterKey,
    pub hidden_vendors: BTreeSet<VendorId>,
    pub bounds: AxisBounds,
    pub auto_y: bool,
    today: NaiveDate,
}

impl ViewState {
    /// Starting state: `all` filter, low-scoring vendors hidden, auto-Y on,
    /// X window covering the last year.
    pub fn new(today: NaiveDate) -> Self {
        let hidden = [VendorId::Zhipu, VendorId::Minimax, VendorId::Meta, VendorId::Mistral]
            .into_iter()
            .collect();
        let mut state = Self {
            active_filter: FilterKey::All,
            hidden_vendors: hidden,
            bounds: AxisBounds::default(),
            auto_y: true,
            today,
        };
        state.bounds.x_min = Some(state.default_x_min());
        state.bounds.x_max = Some(state.default_x_max());
        state.bounds.y_min = Some(DEFAULT_Y_MIN);
        state.bounds.y_max = Some(DEFAULT_Y_MAX);
        state
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn default_x_min(&self) -> f64 {
        date_to_ms(self.today) - DEFAULT_X_WINDOW_DAYS * ONE_DAY_MS
    }

    pub fn default_x_max(&self) -> f64 {
        date_to_ms(self.today)
    }

    /// Effective X range: explicit bounds, falling back to the default window.
    pub fn effective_x(&self) -> (f64, f64) {
        ordered(
            self.bounds.x_min.unwrap_or_else(|| self.default_x_min()),
            self.bounds.x_max.unwrap_or_else(|| self.default_x_max()),
        )
    }

    /// Effective Y range: explicit bounds, falling back to the fixed defaults.
    pub fn effective_y(&self) -> (f64, f64) {
        ordered(
            self.bounds.y_min.unwrap_or(DEFAULT_Y_MIN),
            self.bounds.y_max.unwrap_or(DEFAULT_Y_MAX),
        )
    }

    // ---- transitions --------------------------------------------------------

    pub fn set_filter(&mut self, filter: FilterKey) {
        self.active_filter = filter;
    }

    /// Legend toggle; hidden membership persists across filter changes.
    pub fn toggle_vendor(&mut self, vendor: VendorId) {
        if !self.hidden_vendors.remove(&vendor) {
            self.hidden_vendors.insert(vendor);
        }
    }

    pub fn is_hidden(&self, vendor: VendorId) -> bool {
        self.hidden_vendors.contains(&vendor)
    }

    /// Explicit X bounds; `None` clears a bound back to auto.
    pub fn set_x_bounds(&mut self, min: Option<f64>, max: Option<f64>) {
        (self.bounds.x_min, self.bounds.x_max) = normalized(min, max);
    }

    /// Explicit Y bounds; manual Y editing turns auto-Y off.
    pub fn set_y_bounds(&mut self, min: Option<f64>, max: Option<f64>) {
        (self.bounds.y_min, self.bounds.y_max) = normalized(min, max);
        self.auto_y = false;
    }

    /// Auto-Y writeback from the adapter; keeps the auto flag on.
    pub fn write_auto_y(&mut self, min: f64, max: f64) {
        let (lo, hi) = ordered(min, max);
        self.bounds.y_min = Some(lo);
        self.bounds.y_max = Some(hi);
    }

    /// Shift both ranges; manual panning turns auto-Y off.
    pub fn pan(&mut self, dx_ms: f64, dy_score: f64) {
        let (x0, x1) = self.effective_x();
        let (y0, y1) = self.effective_y();
        self.bounds.x_min = Some(x0 + dx_ms);
        self.bounds.x_max = Some(x1 + dx_ms);
        self.bounds.y_min = Some(y0 + dy_score);
        self.bounds.y_max = Some(y1 + dy_score);
        self.auto_y = false;
    }

    /// Scale both spans about their centers; `factor > 1` zooms in.
    pub fn zoom(&mut self, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) {
            return;
        }
        let (x0, x1) = self.effective_x();
        let (y0, y1) = self.effective_y();
        let (cx, cy) = ((x0 + x1) / 2.0, (y0 + y1) / 2.0);
        let hx = (x1 - x0) / factor / 2.0;
        let hy = (y1 - y0) / factor / 2.0;
        self.bounds.x_min = Some(cx - hx);
        self.bounds.x_max = Some(cx + hx);
        self.bounds.y_min = Some(cy - hy);
        self.bounds.y_max = Some(cy + hy);
    }

    /// Date-range shortcut: sets the X window and re-enables auto-Y.
    pub fn apply_range(&mut self, shortcut: RangeShortcut, dataset: &Dataset) {
        match shortcut {
            RangeShortcut::LastDays(days) => {
                let end = date_to_ms(self.today);
                self.bounds.x_min = Some(end - days as f64 * ONE_DAY_MS);
                self.bounds.x_max = Some(end);
            }
            RangeShortcut::Beginning => {
                if let Some((start, end)) = dataset.date_extent() {
                    self.bounds.x_min = Some(date_to_ms(start));
                    self.bounds.x_max = Some(date_to_ms(end));
                }
            }
        }
        self.auto_y = true;
    }

    /// Reset: full dataset X extent, fixed default Y range, auto-Y back on.
    pub fn reset(&mut self, dataset: &Dataset) {
        match dataset.date_extent() {
            Some((start, end)) => {
                self.bounds.x_min = Some(date_to_ms(start));
                self.bounds.x_max = Some(date_to_ms(end));
            }
            None => {
                self.bounds.x_min = Some(self.default_x_min());
                self.bounds.x_max = Some(self.default_x_max());
            }
        }
        self.bounds.y_min = Some(DEFAULT_Y_MIN);
        self.bounds.y_max = Some(DEFAULT_Y_MAX);
        self.auto_y = true;
    }
}

fn ordered(a: f64, b: f64) -> (f64, f64) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

fn normalized(min: Option<f64>, max: Option<f64>) -> (Option<f64>, Option<f64>) {
    match (min, max) {
        (Some(a), Some(b)) => {
            let (lo, hi) = ordered(a, b);
            (Some(lo), Some(hi))
        }
        other => other,
    }
}

/// Parse an axis date input (`YYYY-MM-DD`). Empty or malformed text clears
/// the bound rather than raising an error.
pub fn parse_date_input(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .map(date_to_ms)
}

/// Parse an axis score input. Empty, malformed, or non-finite text clears
/// the bound.
pub fn parse_score_input(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}
