// File: crates/frontier-core/src/lib.rs
// Summary: Core library entry point; exports the chart state, series, and rendering API.

pub mod adapter;
pub mod chart;
pub mod dataset;
pub mod error;
pub mod icon;
pub mod overlay;
pub mod scale;
pub mod series;
pub mod state;
pub mod stats;
pub mod theme;
pub mod vendor;

pub use adapter::{ChartAdapter, LegendEntry};
pub use chart::{Axis, Chart, Insets, PlotLayout, RenderOptions};
pub use dataset::{Dataset, Record, ONE_DAY_MS};
pub use error::{DataError, RenderError};
pub use icon::{IconCache, IconKey, LogoStore, VendorIcon, ICON_SIZE};
pub use overlay::{HighlightRingOverlay, ModelLabelOverlay, Overlay, PointStyle};
pub use scale::{auto_y_bounds, LinearScale};
pub use series::{build_series, visible_records, PlottedPoint, PlottedSeries};
pub use state::{
    parse_date_input, parse_score_input, AxisBounds, AxisKind, RangeShortcut, ViewState,
};
pub use stats::Summary;
pub use theme::Theme;
pub use vendor::{FilterKey, Rgb, VendorId, VendorInfo};
