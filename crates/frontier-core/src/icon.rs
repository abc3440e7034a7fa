// File: crates/frontier-core/src/icon.rs
// Summary: Raster vendor badges used as point markers, with a keyed cache and
// background logo loading that repaints cached entries in place.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::rc::Rc;

use crossbeam_channel::{unbounded, Receiver};
use skia_safe as skia;

use crate::error::RenderError;
use crate::theme::Theme;
use crate::vendor::{Rgb, VendorId};

/// Badge edge length in pixels.
pub const ICON_SIZE: i32 = 26;

/// Structured cache key. Opacity is quantized to 1/1000 so the key stays
/// hashable; two draws within the same millistep share one badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct IconKey {
    pub vendor: VendorId,
    pub color: Rgb,
    opacity_milli: u16,
}

impl IconKey {
    pub fn new(vendor: VendorId, color: Rgb, opacity: f32) -> Self {
        Self {
            vendor,
            color,
            opacity_milli: (opacity.clamp(0.0, 1.0) * 1000.0).round() as u16,
        }
    }

    pub fn opacity(&self) -> f32 {
        self.opacity_milli as f32 / 1000.0
    }
}

/// A cached badge. The raster is mutable after creation: when a logo finishes
/// loading the image is replaced in place and callers just repaint.
pub struct VendorIcon {
    key: IconKey,
    image: RefCell<skia::Image>,
}

impl VendorIcon {
    pub fn key(&self) -> IconKey {
        self.key
    }

    /// Current raster (cheap refcounted handle).
    pub fn image(&self) -> skia::Image {
        self.image.borrow().clone()
    }

    fn repaint(&self, logo: Option<&skia::Image>, theme: &Theme) -> Result<(), RenderError> {
        *self.image.borrow_mut() = render_badge(self.key, logo, theme)?;
        Ok(())
    }
}

/// Load state of one vendor logo. Failures are permanent: the badge keeps
/// its initials fallback and the file is never retried.
enum LogoState {
    Loading,
    Ready(skia::Image),
    Failed,
}

/// Owns the background logo reads. File bytes cross the channel; decoding to
/// a Skia image happens on the caller's thread in `poll`.
pub struct LogoStore {
    states: HashMap<VendorId, LogoState>,
    rx: Receiver<(VendorId, Option<Vec<u8>>)>,
}

impl LogoStore {
    /// Spawn a reader thread over `dir/<vendor>.png` for every vendor.
    pub fn spawn(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let (tx, rx) = unbounded();
        std::thread::spawn(move || {
            for vendor in VendorId::ORDER {
                let path = dir.join(vendor.info().logo);
                let bytes = std::fs::read(&path).ok();
                if bytes.is_none() {
                    tracing::debug!(vendor = %vendor, path = %path.display(), "logo unavailable");
                }
                if tx.send((vendor, bytes)).is_err() {
                    return;
                }
            }
        });
        let states = VendorId::ORDER
            .iter()
            .map(|&v| (v, LogoState::Loading))
            .collect();
        Self { states, rx }
    }

    /// No logo loading at all; every badge renders initials. Used by headless
    /// rendering and tests.
    pub fn disabled() -> Self {
        let (_tx, rx) = unbounded();
        let states = VendorId::ORDER
            .iter()
            .map(|&v| (v, LogoState::Failed))
            .collect();
        Self { states, rx }
    }

    /// Drain completed loads. Returns the vendors whose state changed; the
    /// caller repaints their cached badges and requests a redraw.
    pub fn poll(&mut self) -> Vec<VendorId> {
        let mut changed = Vec::new();
        for (vendor, bytes) in self.rx.try_iter() {
            let decoded =
                bytes.and_then(|b| skia::Image::from_encoded(skia::Data::new_copy(&b)));
            let state = match decoded {
                Some(image) => LogoState::Ready(image),
                None => LogoState::Failed,
            };
            self.states.insert(vendor, state);
            changed.push(vendor);
        }
        changed
    }

    pub fn ready(&self, vendor: VendorId) -> Option<&skia::Image> {
        match self.states.get(&vendor) {
            Some(LogoState::Ready(image)) => Some(image),
            _ => None,
        }
    }
}

/// Badge cache keyed by `(vendor, color, opacity)`. Entries are never
/// evicted; a logo completion repaints matching entries in place.
pub struct IconCache {
    entries: HashMap<IconKey, Rc<VendorIcon>>,
}

impl IconCache {
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Fetch or render the badge for this key. Identical arguments return
    /// the same `Rc` without redrawing.
    pub fn icon(
        &mut self,
        vendor: VendorId,
        color: Rgb,
        opacity: f32,
        logos: &LogoStore,
        theme: &Theme,
    ) -> Result<Rc<VendorIcon>, RenderError> {
        let key = IconKey::new(vendor, color, opacity);
        if let Some(icon) = self.entries.get(&key) {
            return Ok(Rc::clone(icon));
        }
        let image = render_badge(key, logos.ready(vendor), theme)?;
        let icon = Rc::new(VendorIcon { key, image: RefCell::new(image) });
        self.entries.insert(key, Rc::clone(&icon));
        Ok(icon)
    }

    /// Redraw every cached badge of `vendor` with its current logo state.
    pub fn repaint_vendor(
        &self,
        vendor: VendorId,
        logos: &LogoStore,
        theme: &Theme,
    ) -> Result<bool, RenderError> {
        let mut repainted = false;
        for icon in self.entries.values() {
            if icon.key.vendor == vendor {
                icon.repaint(logos.ready(vendor), theme)?;
                repainted = true;
            }
        }
        Ok(repainted)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for IconCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Draw one badge: dark filled circle, logo clipped into an inner circle when
/// available (initials text otherwise), then a ring in the vendor color.
fn render_badge(
    key: IconKey,
    logo: Option<&skia::Image>,
    theme: &Theme,
) -> Result<skia::Image, RenderError> {
    let mut surface = skia::surfaces::raster_n32_premul((ICON_SIZE, ICON_SIZE))
        .ok_or(RenderError::Surface { width: ICON_SIZE, height: ICON_SIZE })?;
    let canvas = surface.canvas();
    canvas.clear(skia::Color::TRANSPARENT);

    let opacity = key.opacity();
    let size = ICON_SIZE as f32;
    let center = (size / 2.0, size / 2.0);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_color(theme.badge_fill);
    fill.set_alpha_f(opacity);
    canvas.draw_circle(center, size / 2.0 - 2.0, &fill);

    match logo {
        Some(image) => {
            canvas.save();
            let mut clip = skia::Path::new();
            clip.add_circle(center, size / 2.0 - 5.0, None);
            canvas.clip_path(&clip, skia::ClipOp::Intersect, true);
            let dst = skia::Rect::from_xywh(4.0, 4.0, size - 8.0, size - 8.0);
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_alpha_f(opacity);
            canvas.draw_image_rect(image, None, dst, &paint);
            canvas.restore();
        }
        None => {
            let initials = key.vendor.info().initials;
            let mut text = skia::Paint::default();
            text.set_anti_alias(true);
            text.set_color(theme.badge_text);
            text.set_alpha_f(opacity);
            let mut font = skia::Font::default();
            font.set_size(10.0);
            let (width, _) = font.measure_str(initials, Some(&text));
            canvas.draw_str(
                initials,
                (center.0 - width / 2.0, center.1 + 3.5),
                &font,
                &text,
            );
        }
    }

    let mut ring = skia::Paint::default();
    ring.set_anti_alias(true);
    ring.set_style(skia::paint::Style::Stroke);
    ring.set_stroke_width(2.0);
    ring.set_color(key.color.with_alpha(opacity));
    canvas.draw_circle(center, size / 2.0 - 2.0, &ring);

    Ok(surface.image_snapshot())
}
