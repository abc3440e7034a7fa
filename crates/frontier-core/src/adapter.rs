// File: crates/frontier-core/src/adapter.rs
// Summary: Chart adapter: owns the chart object and keeps it, the stat
// summary, and the legend consistent with the view state.

use std::path::Path;

use crate::chart::{Chart, RenderOptions};
use crate::dataset::Dataset;
use crate::error::RenderError;
use crate::icon::{IconCache, LogoStore};
use crate::overlay::{HighlightRingOverlay, ModelLabelOverlay, Overlay};
use crate::scale::auto_y_bounds;
use crate::series::{build_series, visible_records};
use crate::state::{
    parse_date_input, parse_score_input, AxisKind, RangeShortcut, ViewState,
};
use crate::stats::Summary;
use crate::theme::Theme;
use crate::vendor::{FilterKey, Rgb, VendorId};

/// One legend row, in registry display order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LegendEntry {
    pub vendor: VendorId,
    pub name: &'static str,
    pub color: Rgb,
    pub hidden: bool,
}

/// Owns the single chart instance. Every interaction funnels through a named
/// state transition followed by `refresh`, which rebuilds the derived pieces
/// (series, auto-Y bounds, summary) from scratch; redundant refreshes are
/// harmless and produce identical configuration.
pub struct ChartAdapter {
    dataset: Dataset,
    state: ViewState,
    chart: Chart,
    icons: IconCache,
    logos: LogoStore,
    overlays: Vec<Box<dyn Overlay>>,
    theme: Theme,
    summary: Summary,
}

impl ChartAdapter {
    /// Adapter with today's date and no logo loading.
    pub fn new(dataset: Dataset) -> Self {
        Self::with_today(dataset, chrono::Utc::now().date_naive())
    }

    /// Deterministic constructor: "today" fixes the default X window.
    pub fn with_today(dataset: Dataset, today: chrono::NaiveDate) -> Self {
        let state = ViewState::new(today);
        let overlays: Vec<Box<dyn Overlay>> =
            vec![Box::new(ModelLabelOverlay), Box::new(HighlightRingOverlay)];
        let mut adapter = Self {
            dataset,
            state,
            chart: Chart::new(),
            icons: IconCache::new(),
            logos: LogoStore::disabled(),
            overlays,
            theme: Theme::dark(),
            summary: Summary::default(),
        };
        adapter.refresh();
        adapter
    }

    /// Start background logo loading from `dir`; completions arrive via
    /// `poll_logos`.
    pub fn load_logos(&mut self, dir: impl AsRef<Path>) {
        self.logos = LogoStore::spawn(dir.as_ref());
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Badge colors depend on the theme, so switching drops the icon cache.
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.icons = IconCache::new();
    }

    /// Rebuild everything derived from (dataset, state) and write it into the
    /// chart. When auto-Y is on, recompute Y bounds from visible scores and
    /// store them back into the state.
    pub fn refresh(&mut self) {
        if self.state.auto_y {
            let scores: Vec<f64> = visible_records(&self.dataset, &self.state)
                .iter()
                .map(|r| r.score)
                .collect();
            let (lo, hi) = auto_y_bounds(&scores);
            self.state.write_auto_y(lo, hi);
        }
        self.sync_chart();
    }

    /// Push the current state into the chart as-is, without recomputing
    /// auto-Y bounds. Zooming uses this so the scaled Y span stays on screen;
    /// the auto recompute happens on the next state-changing refresh.
    fn sync_chart(&mut self) {
        let series = build_series(&self.dataset, &self.state);
        let (x_min, x_max) = self.state.effective_x();
        let (y_min, y_max) = self.state.effective_y();
        self.chart.series = series;
        self.chart.x_axis.min = x_min;
        self.chart.x_axis.max = x_max;
        self.chart.y_axis.min = y_min;
        self.chart.y_axis.max = y_max;
        self.summary = Summary::compute(&visible_records(&self.dataset, &self.state));
        tracing::debug!(
            series = self.chart.series.len(),
            visible = self.summary.visible_count,
            auto_y = self.state.auto_y,
            "chart refreshed"
        );
    }

    // ---- interactions -------------------------------------------------------

    pub fn set_filter(&mut self, filter: FilterKey) {
        self.state.set_filter(filter);
        self.refresh();
    }

    pub fn toggle_vendor(&mut self, vendor: VendorId) {
        self.state.toggle_vendor(vendor);
        self.refresh();
    }

    /// Explicit bounds for one axis; editing Y turns auto-Y off.
    pub fn set_axis(&mut self, axis: AxisKind, min: Option<f64>, max: Option<f64>) {
        match axis {
            AxisKind::X => self.state.set_x_bounds(min, max),
            AxisKind::Y => self.state.set_y_bounds(min, max),
        }
        self.refresh();
    }

    /// Axis edit from textual inputs. Malformed or empty text clears the
    /// corresponding bound instead of erroring.
    pub fn apply_axis_input(&mut self, axis: AxisKind, min_text: &str, max_text: &str) {
        let (min, max) = match axis {
            AxisKind::X => (parse_date_input(min_text), parse_date_input(max_text)),
            AxisKind::Y => (parse_score_input(min_text), parse_score_input(max_text)),
        };
        self.set_axis(axis, min, max);
    }

    pub fn pan(&mut self, dx_ms: f64, dy_score: f64) {
        self.state.pan(dx_ms, dy_score);
        self.refresh();
    }

    /// `factor > 1` zooms in about the view center. Both axes scale even while
    /// auto-Y is on; the flag itself is left untouched.
    pub fn zoom(&mut self, factor: f64) {
        self.state.zoom(factor);
        self.sync_chart();
    }

    pub fn reset_axes(&mut self) {
        self.state.reset(&self.dataset);
        self.refresh();
    }

    pub fn apply_range(&mut self, shortcut: RangeShortcut) {
        self.state.apply_range(shortcut, &self.dataset);
        self.refresh();
    }

    /// Drain logo completions and repaint affected cached badges in place.
    /// Returns the number of vendors that completed; a non-zero count means
    /// the caller should redraw the chart. The loader reports every vendor
    /// exactly once, so counts across calls sum to the registry size.
    pub fn poll_logos(&mut self) -> usize {
        let changed = self.logos.poll();
        for &vendor in &changed {
            if let Err(err) = self.icons.repaint_vendor(vendor, &self.logos, &self.theme) {
                tracing::warn!(%vendor, error = %err, "badge repaint failed");
            }
        }
        changed.len()
    }

    /// Legend rows for every vendor present in the dataset, display order.
    pub fn legend(&self) -> Vec<LegendEntry> {
        VendorId::ORDER
            .iter()
            .filter(|&&v| self.dataset.contains_vendor(v))
            .map(|&vendor| {
                let info = vendor.info();
                LegendEntry {
                    vendor,
                    name: info.display_name,
                    color: info.color,
                    hidden: self.state.is_hidden(vendor),
                }
            })
            .collect()
    }

    // ---- rendering ----------------------------------------------------------

    pub fn render_to_rgba8(
        &mut self,
        opts: &RenderOptions,
    ) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let opts = RenderOptions { theme: self.theme, ..*opts };
        self.chart
            .render_to_rgba8(&opts, &mut self.icons, &self.logos, &self.overlays)
    }

    pub fn render_to_png_bytes(&mut self, opts: &RenderOptions) -> Result<Vec<u8>, RenderError> {
        let opts = RenderOptions { theme: self.theme, ..*opts };
        self.chart
            .render_to_png_bytes(&opts, &mut self.icons, &self.logos, &self.overlays)
    }

    pub fn render_to_png(
        &mut self,
        opts: &RenderOptions,
        path: impl AsRef<Path>,
    ) -> Result<(), RenderError> {
        let opts = RenderOptions { theme: self.theme, ..*opts };
        self.chart
            .render_to_png(&opts, &mut self.icons, &self.logos, &self.overlays, path)
    }
}
