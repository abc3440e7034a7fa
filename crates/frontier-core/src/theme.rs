// File: crates/frontier-core/src/theme.rs
// Summary: Dark/light theming for chart rendering colors.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub tick_label: skia::Color,
    pub axis_title: skia::Color,
    pub point_label: skia::Color,
    pub badge_fill: skia::Color,
    pub badge_text: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 0x0a, 0x0a, 0x0a),
            grid: skia::Color::from_argb(255, 0x2a, 0x2a, 0x2a),
            axis_line: skia::Color::from_argb(255, 0x3a, 0x3a, 0x3a),
            tick_label: skia::Color::from_argb(255, 0x55, 0x55, 0x55),
            axis_title: skia::Color::from_argb(255, 0x66, 0x66, 0x66),
            point_label: skia::Color::from_argb(217, 0xf5, 0xf5, 0xf5),
            badge_fill: skia::Color::from_argb(255, 0x0a, 0x0a, 0x0a),
            badge_text: skia::Color::from_argb(255, 0xf5, 0xf5, 0xf5),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 0xfa, 0xfa, 0xfc),
            grid: skia::Color::from_argb(255, 0xe6, 0xe6, 0xeb),
            axis_line: skia::Color::from_argb(255, 0xc0, 0xc0, 0xc8),
            tick_label: skia::Color::from_argb(255, 0x6a, 0x6a, 0x72),
            axis_title: skia::Color::from_argb(255, 0x50, 0x50, 0x58),
            point_label: skia::Color::from_argb(230, 0x20, 0x20, 0x28),
            badge_fill: skia::Color::from_argb(255, 0xff, 0xff, 0xff),
            badge_text: skia::Color::from_argb(255, 0x20, 0x20, 0x28),
        }
    }
}

/// Built-in presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() {
        if t.name.eq_ignore_ascii_case(name) {
            return t;
        }
    }
    Theme::dark()
}
