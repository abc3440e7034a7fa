// File: crates/frontier-core/src/vendor.rs
// Summary: Closed vendor registry (display names, colors, logos, initials) and filter keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::error::DataError;

/// Identifier of a model vendor. The set is closed: records referencing
/// anything else are rejected at dataset construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorId {
    Openai,
    Anthropic,
    Google,
    Alibaba,
    Deepseek,
    Meta,
    Xai,
    Mistral,
    Zhipu,
    Minimax,
    Moonshot,
}

impl VendorId {
    /// Canonical display order used for legend iteration and series output.
    /// Draw order (by latest score) is computed separately.
    pub const ORDER: [VendorId; 11] = [
        VendorId::Openai,
        VendorId::Anthropic,
        VendorId::Google,
        VendorId::Xai,
        VendorId::Alibaba,
        VendorId::Deepseek,
        VendorId::Moonshot,
        VendorId::Zhipu,
        VendorId::Minimax,
        VendorId::Meta,
        VendorId::Mistral,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            VendorId::Openai => "openai",
            VendorId::Anthropic => "anthropic",
            VendorId::Google => "google",
            VendorId::Alibaba => "alibaba",
            VendorId::Deepseek => "deepseek",
            VendorId::Meta => "meta",
            VendorId::Xai => "xai",
            VendorId::Mistral => "mistral",
            VendorId::Zhipu => "zhipu",
            VendorId::Minimax => "minimax",
            VendorId::Moonshot => "moonshot",
        }
    }

    /// Position in `ORDER`; used as the tie-break when ranking by score.
    pub fn registry_index(&self) -> usize {
        Self::ORDER
            .iter()
            .position(|v| v == self)
            .unwrap_or(Self::ORDER.len())
    }

    pub fn info(&self) -> VendorInfo {
        match self {
            VendorId::Openai => VendorInfo {
                display_name: "OpenAI",
                color: Rgb::new(0xff, 0xff, 0xff),
                logo: "openai.png",
                initials: "O",
            },
            VendorId::Anthropic => VendorInfo {
                display_name: "Anthropic",
                color: Rgb::new(0xf9, 0x73, 0x16),
                logo: "anthropic.png",
                initials: "A",
            },
            VendorId::Google => VendorInfo {
                display_name: "Google",
                color: Rgb::new(0x42, 0x85, 0xf4),
                logo: "google.png",
                initials: "G",
            },
            VendorId::Alibaba => VendorInfo {
                display_name: "Qwen",
                color: Rgb::new(0x8b, 0x5c, 0xf6),
                logo: "alibaba.png",
                initials: "Q",
            },
            VendorId::Deepseek => VendorInfo {
                display_name: "DeepSeek",
                color: Rgb::new(0x25, 0x63, 0xeb),
                logo: "deepseek.png",
                initials: "D",
            },
            VendorId::Meta => VendorInfo {
                display_name: "Meta",
                color: Rgb::new(0x08, 0x66, 0xff),
                logo: "meta.png",
                initials: "M",
            },
            VendorId::Xai => VendorInfo {
                display_name: "xAI",
                color: Rgb::new(0x37, 0x41, 0x51),
                logo: "xai.png",
                initials: "X",
            },
            VendorId::Mistral => VendorInfo {
                display_name: "Mistral",
                color: Rgb::new(0xef, 0x44, 0x44),
                logo: "mistral.png",
                initials: "Mi",
            },
            VendorId::Zhipu => VendorInfo {
                display_name: "Zhipu",
                color: Rgb::new(0x06, 0xb6, 0xd4),
                logo: "zhipu.png",
                initials: "Z",
            },
            VendorId::Minimax => VendorInfo {
                display_name: "MiniMax",
                color: Rgb::new(0xec, 0x48, 0x99),
                logo: "minimax.png",
                initials: "Mx",
            },
            VendorId::Moonshot => VendorInfo {
                display_name: "Moonshot",
                color: Rgb::new(0xfb, 0xbf, 0x24),
                logo: "moonshot.png",
                initials: "K",
            },
        }
    }
}

impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VendorId {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(VendorId::Openai),
            "anthropic" => Ok(VendorId::Anthropic),
            "google" => Ok(VendorId::Google),
            "alibaba" => Ok(VendorId::Alibaba),
            "deepseek" => Ok(VendorId::Deepseek),
            "meta" => Ok(VendorId::Meta),
            "xai" => Ok(VendorId::Xai),
            "mistral" => Ok(VendorId::Mistral),
            "zhipu" => Ok(VendorId::Zhipu),
            "minimax" => Ok(VendorId::Minimax),
            "moonshot" => Ok(VendorId::Moonshot),
            other => Err(DataError::UnknownVendor(other.to_string())),
        }
    }
}

/// Static descriptor for one vendor: legend name, stroke color, logo asset
/// file name (relative to the logo directory), and initials fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VendorInfo {
    pub display_name: &'static str,
    pub color: Rgb,
    pub logo: &'static str,
    pub initials: &'static str,
}

/// Solid color, hashable so it can participate in icon cache keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rgb` or `#rrggbb` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let raw = hex.trim().trim_start_matches('#');
        let expanded: String = match raw.len() {
            3 => raw.chars().flat_map(|c| [c, c]).collect(),
            6 => raw.to_string(),
            _ => return None,
        };
        let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
        let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
        let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Skia color with an alpha in `0.0..=1.0`.
    pub fn with_alpha(&self, alpha: f32) -> skia::Color {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        skia::Color::from_argb(a, self.r, self.g, self.b)
    }
}

/// Filter buttons: `All`, one per primary vendor, `Other` for the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FilterKey {
    #[default]
    All,
    Openai,
    Anthropic,
    Google,
    Alibaba,
    Deepseek,
    Meta,
    Other,
}

/// Vendors grouped under the `Other` filter.
pub const OTHER_VENDORS: [VendorId; 5] = [
    VendorId::Xai,
    VendorId::Mistral,
    VendorId::Zhipu,
    VendorId::Minimax,
    VendorId::Moonshot,
];

impl FilterKey {
    /// Allow-list of vendors the filter admits; `None` means every vendor.
    pub fn allow_list(&self) -> Option<&'static [VendorId]> {
        match self {
            FilterKey::All => None,
            FilterKey::Openai => Some(&[VendorId::Openai]),
            FilterKey::Anthropic => Some(&[VendorId::Anthropic]),
            FilterKey::Google => Some(&[VendorId::Google]),
            FilterKey::Alibaba => Some(&[VendorId::Alibaba]),
            FilterKey::Deepseek => Some(&[VendorId::Deepseek]),
            FilterKey::Meta => Some(&[VendorId::Meta]),
            FilterKey::Other => Some(&OTHER_VENDORS),
        }
    }

    pub fn admits(&self, vendor: VendorId) -> bool {
        match self.allow_list() {
            None => true,
            Some(list) => list.contains(&vendor),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::All => "all",
            FilterKey::Openai => "openai",
            FilterKey::Anthropic => "anthropic",
            FilterKey::Google => "google",
            FilterKey::Alibaba => "alibaba",
            FilterKey::Deepseek => "deepseek",
            FilterKey::Meta => "meta",
            FilterKey::Other => "other",
        }
    }
}

impl FromStr for FilterKey {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(FilterKey::All),
            "openai" => Ok(FilterKey::Openai),
            "anthropic" => Ok(FilterKey::Anthropic),
            "google" => Ok(FilterKey::Google),
            "alibaba" | "qwen" => Ok(FilterKey::Alibaba),
            "deepseek" => Ok(FilterKey::Deepseek),
            "meta" => Ok(FilterKey::Meta),
            "other" => Ok(FilterKey::Other),
            other => Err(DataError::UnknownFilter(other.to_string())),
        }
    }
}
