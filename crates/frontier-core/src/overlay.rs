// File: crates/frontier-core/src/overlay.rs
// Summary: Overlay pass drawn after series: model-name labels and highlight
// rings, plus the pure per-point style dispatch.

use skia_safe as skia;

use crate::chart::{Chart, PlotLayout};
use crate::dataset::ONE_DAY_MS;
use crate::theme::Theme;

/// Line stroke opacity.
pub const LINE_OPACITY: f32 = 0.55;
/// Marker opacity for every point but the most recent.
pub const SECONDARY_POINT_OPACITY: f32 = 0.55;
/// Label opacity for each series' most recent point.
pub const LATEST_LABEL_OPACITY: f32 = 0.95;
/// Label opacity for older points.
pub const SECONDARY_LABEL_OPACITY: f32 = 0.55;
/// Visible X spans at or below this get a label on every point; wider spans
/// label only each series' most recent point.
pub const LABEL_RANGE_THRESHOLD_MS: f64 = 548.0 * ONE_DAY_MS;

/// Resolved marker style for one point, independent of the render backend.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointStyle {
    pub radius: f32,
    pub border_width: f32,
    pub opacity: f32,
}

impl PointStyle {
    pub fn for_point(is_highlight: bool) -> Self {
        if is_highlight {
            Self { radius: 13.0, border_width: 4.0, opacity: 1.0 }
        } else {
            Self { radius: 7.0, border_width: 2.0, opacity: SECONDARY_POINT_OPACITY }
        }
    }
}

/// Custom visuals painted after the series pass.
pub trait Overlay {
    fn id(&self) -> &'static str;
    fn draw(&self, canvas: &skia::Canvas, chart: &Chart, layout: &PlotLayout, theme: &Theme);
}

/// Text label with the model name next to each point. Wide views only label
/// the most recent point per series; recent labels are brighter.
pub struct ModelLabelOverlay;

impl Overlay for ModelLabelOverlay {
    fn id(&self) -> &'static str {
        "model_labels"
    }

    fn draw(&self, canvas: &skia::Canvas, chart: &Chart, layout: &PlotLayout, theme: &Theme) {
        let range_ms = chart.x_axis.max - chart.x_axis.min;
        let show_all = range_ms <= LABEL_RANGE_THRESHOLD_MS;

        let mut font = skia::Font::default();
        font.set_size(9.0);
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_color(theme.point_label);

        for series in &chart.series {
            for (index, point) in series.points.iter().enumerate() {
                let is_latest = index == series.highlight_index;
                if !show_all && !is_latest {
                    continue;
                }
                let px = layout.x.to_px(point.x);
                let py = layout.y.to_px(point.y);
                if !layout.contains(px, py) {
                    continue;
                }
                paint.set_alpha_f(if is_latest {
                    LATEST_LABEL_OPACITY
                } else {
                    SECONDARY_LABEL_OPACITY
                });
                canvas.draw_str(&point.model, (px + 8.0, py - 8.0), &font, &paint);
            }
        }
    }
}

/// Ring around each series' most recent point, in the vendor color.
pub struct HighlightRingOverlay;

impl Overlay for HighlightRingOverlay {
    fn id(&self) -> &'static str {
        "latest_highlight"
    }

    fn draw(&self, canvas: &skia::Canvas, chart: &Chart, layout: &PlotLayout, _theme: &Theme) {
        let mut ring = skia::Paint::default();
        ring.set_anti_alias(true);
        ring.set_style(skia::paint::Style::Stroke);
        ring.set_stroke_width(2.0);

        for series in &chart.series {
            let Some(point) = series.points.get(series.highlight_index) else {
                continue;
            };
            let px = layout.x.to_px(point.x);
            let py = layout.y.to_px(point.y);
            if !layout.contains(px, py) {
                continue;
            }
            let radius = PointStyle::for_point(true).radius;
            ring.set_color(series.vendor.info().color.with_alpha(0.45));
            canvas.draw_circle((px, py), radius + 7.0, &ring);
        }
    }
}
