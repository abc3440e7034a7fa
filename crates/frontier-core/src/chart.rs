// File: crates/frontier-core/src/chart.rs
// Summary: Chart model and headless rendering pipeline using Skia CPU raster surfaces.

use skia_safe as skia;

use crate::error::RenderError;
use crate::icon::{IconCache, LogoStore};
use crate::overlay::{Overlay, PointStyle, LINE_OPACITY};
use crate::scale::{linspace, month_ticks, LinearScale};
use crate::series::PlottedSeries;
use crate::theme::Theme;

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Screen margins, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        // Extra right margin keeps latest-model labels inside the surface.
        Self::new(72, 120, 24, 56)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub label: String,
    pub min: f64,
    pub max: f64,
}

impl Axis {
    pub fn new(label: impl Into<String>, min: f64, max: f64) -> Self {
        Self { label: label.into(), min, max }
    }

    pub fn default_x() -> Self {
        Self::new("Release date", 0.0, 1.0)
    }

    pub fn default_y() -> Self {
        Self::new("Coding score", crate::state::DEFAULT_Y_MIN, crate::state::DEFAULT_Y_MAX)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::dark(),
            draw_labels: true,
        }
    }
}

/// World-to-pixel mapping of the plot area for one rendered frame.
#[derive(Clone, Copy, Debug)]
pub struct PlotLayout {
    pub x: LinearScale,
    pub y: LinearScale,
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotLayout {
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.left && px <= self.right && py >= self.top && py <= self.bottom
    }
}

/// The one stateful chart object: plotted series plus current axis ranges.
/// X is epoch milliseconds, Y is score units.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    pub series: Vec<PlottedSeries>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self { series: Vec::new(), x_axis: Axis::default_x(), y_axis: Axis::default_y() }
    }

    pub fn plot_layout(&self, opts: &RenderOptions) -> PlotLayout {
        let left = opts.insets.left as f32;
        let right = (opts.width - opts.insets.right as i32) as f32;
        let top = opts.insets.top as f32;
        let bottom = (opts.height - opts.insets.bottom as i32) as f32;
        PlotLayout {
            x: LinearScale::new(self.x_axis.min, self.x_axis.max, left, right),
            y: LinearScale::new(self.y_axis.min, self.y_axis.max, bottom, top),
            left,
            top,
            right,
            bottom,
        }
    }

    /// Render to an RGBA8 buffer: `(pixels, width, height, stride)`.
    pub fn render_to_rgba8(
        &self,
        opts: &RenderOptions,
        icons: &mut IconCache,
        logos: &LogoStore,
        overlays: &[Box<dyn Overlay>],
    ) -> Result<(Vec<u8>, i32, i32, usize), RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts, icons, logos, overlays)?;

        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(RenderError::Encode);
        }
        Ok((pixels, opts.width, opts.height, stride))
    }

    pub fn render_to_png_bytes(
        &self,
        opts: &RenderOptions,
        icons: &mut IconCache,
        logos: &LogoStore,
        overlays: &[Box<dyn Overlay>],
    ) -> Result<Vec<u8>, RenderError> {
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or(RenderError::Surface { width: opts.width, height: opts.height })?;
        self.draw(surface.canvas(), opts, icons, logos, overlays)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(RenderError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(
        &self,
        opts: &RenderOptions,
        icons: &mut IconCache,
        logos: &LogoStore,
        overlays: &[Box<dyn Overlay>],
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<(), RenderError> {
        let bytes = self.render_to_png_bytes(opts, icons, logos, overlays)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    fn draw(
        &self,
        canvas: &skia::Canvas,
        opts: &RenderOptions,
        icons: &mut IconCache,
        logos: &LogoStore,
        overlays: &[Box<dyn Overlay>],
    ) -> Result<(), RenderError> {
        let theme = &opts.theme;
        canvas.clear(theme.background);

        let layout = self.plot_layout(opts);
        draw_grid(canvas, &layout, &self.x_axis, &self.y_axis, theme, opts.draw_labels);

        // Series clip to the plot area; ascending draw order puts the
        // highest latest score on top.
        let mut order: Vec<&PlottedSeries> = self.series.iter().collect();
        order.sort_by_key(|s| s.draw_order);

        canvas.save();
        canvas.clip_rect(
            skia::Rect::from_ltrb(layout.left, layout.top, layout.right, layout.bottom),
            skia::ClipOp::Intersect,
            true,
        );
        for series in &order {
            draw_line(canvas, &layout, series);
        }
        for series in &order {
            draw_markers(canvas, &layout, series, icons, logos, theme)?;
        }
        canvas.restore();

        if opts.draw_labels {
            for overlay in overlays {
                overlay.draw(canvas, self, &layout, theme);
            }
        }
        Ok(())
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::new()
    }
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(
    canvas: &skia::Canvas,
    layout: &PlotLayout,
    x_axis: &Axis,
    y_axis: &Axis,
    theme: &Theme,
    draw_labels: bool,
) {
    let mut grid = skia::Paint::default();
    grid.set_anti_alias(true);
    grid.set_stroke_width(1.0);
    grid.set_color(theme.grid);

    let mut tick_paint = skia::Paint::default();
    tick_paint.set_anti_alias(true);
    tick_paint.set_color(theme.tick_label);
    let mut tick_font = skia::Font::default();
    tick_font.set_size(10.0);

    // Vertical lines at month boundaries, labelled "MMM yy".
    for (ms, label) in month_ticks(x_axis.min, x_axis.max) {
        let px = layout.x.to_px(ms);
        canvas.draw_line((px, layout.top), (px, layout.bottom), &grid);
        if draw_labels {
            canvas.draw_str(&label, (px - 14.0, layout.bottom + 16.0), &tick_font, &tick_paint);
        }
    }

    // Horizontal score lines.
    for y in linspace(y_axis.min, y_axis.max, 6) {
        let py = layout.y.to_px(y);
        canvas.draw_line((layout.left, py), (layout.right, py), &grid);
        if draw_labels {
            let label = format!("{:.0}", y);
            canvas.draw_str(&label, (layout.left - 40.0, py + 4.0), &tick_font, &tick_paint);
        }
    }

    let mut axis_paint = skia::Paint::default();
    axis_paint.set_anti_alias(true);
    axis_paint.set_stroke_width(1.5);
    axis_paint.set_color(theme.axis_line);
    canvas.draw_line((layout.left, layout.bottom), (layout.right, layout.bottom), &axis_paint);
    canvas.draw_line((layout.left, layout.top), (layout.left, layout.bottom), &axis_paint);

    if draw_labels {
        let mut title_paint = skia::Paint::default();
        title_paint.set_anti_alias(true);
        title_paint.set_color(theme.axis_title);
        let mut title_font = skia::Font::default();
        title_font.set_size(11.0);
        canvas.draw_str(
            &x_axis.label,
            (layout.right - 80.0, layout.bottom + 36.0),
            &title_font,
            &title_paint,
        );
        canvas.draw_str(&y_axis.label, (layout.left - 56.0, layout.top - 8.0), &title_font, &title_paint);
    }
}

fn draw_line(canvas: &skia::Canvas, layout: &PlotLayout, series: &PlottedSeries) {
    if series.points.len() < 2 {
        return;
    }
    let mut path = skia::Path::new();
    let first = &series.points[0];
    path.move_to((layout.x.to_px(first.x), layout.y.to_px(first.y)));
    for point in series.points.iter().skip(1) {
        path.line_to((layout.x.to_px(point.x), layout.y.to_px(point.y)));
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(2.0);
    stroke.set_color(series.vendor.info().color.with_alpha(LINE_OPACITY));
    canvas.draw_path(&path, &stroke);
}

fn draw_markers(
    canvas: &skia::Canvas,
    layout: &PlotLayout,
    series: &PlottedSeries,
    icons: &mut IconCache,
    logos: &LogoStore,
    theme: &Theme,
) -> Result<(), RenderError> {
    let color = series.vendor.info().color;
    for (index, point) in series.points.iter().enumerate() {
        let style = PointStyle::for_point(index == series.highlight_index);
        let icon = icons.icon(series.vendor, color, style.opacity, logos, theme)?;
        let px = layout.x.to_px(point.x);
        let py = layout.y.to_px(point.y);
        let dst = skia::Rect::from_xywh(
            px - style.radius,
            py - style.radius,
            style.radius * 2.0,
            style.radius * 2.0,
        );
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        canvas.draw_image_rect(&icon.image(), None, dst, &paint);
    }
    Ok(())
}
