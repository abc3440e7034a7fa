// File: crates/frontier-core/tests/vendor_style.rs
// Purpose: Validate registry lookups, color parsing, filter allow-lists, and
// the per-point style dispatch.

use frontier_core::overlay::{
    PointStyle, LABEL_RANGE_THRESHOLD_MS, LATEST_LABEL_OPACITY, SECONDARY_LABEL_OPACITY,
};
use frontier_core::{FilterKey, Rgb, VendorId, ONE_DAY_MS};

#[test]
fn registry_covers_every_vendor_once() {
    assert_eq!(VendorId::ORDER.len(), 11);
    for (index, vendor) in VendorId::ORDER.iter().enumerate() {
        assert_eq!(vendor.registry_index(), index);
        let info = vendor.info();
        assert!(!info.display_name.is_empty());
        assert!(!info.initials.is_empty());
    }
    assert_eq!(VendorId::Alibaba.info().display_name, "Qwen");
    assert_eq!(VendorId::Anthropic.info().color.hex(), "#f97316");
}

#[test]
fn hex_color_parsing() {
    assert_eq!(Rgb::from_hex("#f97316"), Some(Rgb::new(0xf9, 0x73, 0x16)));
    assert_eq!(Rgb::from_hex("4285f4"), Some(Rgb::new(0x42, 0x85, 0xf4)));
    assert_eq!(Rgb::from_hex("#abc"), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
    assert_eq!(Rgb::from_hex("#nope"), None);
    assert_eq!(Rgb::from_hex(""), None);
}

#[test]
fn alpha_is_scaled_into_the_skia_color() {
    let color = Rgb::new(0xf9, 0x73, 0x16);
    assert_eq!(color.with_alpha(1.0).a(), 255);
    assert_eq!(color.with_alpha(0.0).a(), 0);
    let half = color.with_alpha(0.5);
    assert_eq!(half.r(), 0xf9);
    assert!((half.a() as i32 - 128).abs() <= 1);
}

#[test]
fn filter_allow_lists() {
    assert!(FilterKey::All.admits(VendorId::Minimax));
    assert!(FilterKey::Openai.admits(VendorId::Openai));
    assert!(!FilterKey::Openai.admits(VendorId::Anthropic));

    // "Other" covers exactly the non-primary vendors.
    for vendor in [
        VendorId::Xai,
        VendorId::Mistral,
        VendorId::Zhipu,
        VendorId::Minimax,
        VendorId::Moonshot,
    ] {
        assert!(FilterKey::Other.admits(vendor));
    }
    assert!(!FilterKey::Other.admits(VendorId::Openai));
    assert!(!FilterKey::Other.admits(VendorId::Google));
}

#[test]
fn filter_keys_parse_from_button_names() {
    assert_eq!("all".parse::<FilterKey>().expect("parse"), FilterKey::All);
    assert_eq!("Other".parse::<FilterKey>().expect("parse"), FilterKey::Other);
    assert_eq!("qwen".parse::<FilterKey>().expect("parse"), FilterKey::Alibaba);
    assert!("everything".parse::<FilterKey>().is_err());
}

#[test]
fn point_style_dispatch() {
    let highlight = PointStyle::for_point(true);
    assert_eq!(highlight.radius, 13.0);
    assert_eq!(highlight.border_width, 4.0);
    assert_eq!(highlight.opacity, 1.0);

    let secondary = PointStyle::for_point(false);
    assert_eq!(secondary.radius, 7.0);
    assert_eq!(secondary.border_width, 2.0);
    assert!(secondary.opacity < 1.0);

    assert!(LATEST_LABEL_OPACITY > SECONDARY_LABEL_OPACITY);
}

#[test]
fn label_threshold_is_548_days() {
    assert_eq!(LABEL_RANGE_THRESHOLD_MS, 548.0 * ONE_DAY_MS);
}
