// File: crates/frontier-core/tests/icons.rs
// Purpose: Validate icon cache keying and badge rendering fallbacks.

use std::rc::Rc;

use frontier_core::icon::{IconCache, LogoStore, ICON_SIZE};
use frontier_core::{ChartAdapter, Dataset, Theme, VendorId};

#[test]
fn identical_keys_share_one_cached_badge() {
    let mut cache = IconCache::new();
    let logos = LogoStore::disabled();
    let theme = Theme::dark();
    let color = VendorId::Anthropic.info().color;

    let a = cache
        .icon(VendorId::Anthropic, color, 0.55, &logos, &theme)
        .expect("render badge");
    let b = cache
        .icon(VendorId::Anthropic, color, 0.55, &logos, &theme)
        .expect("render badge");
    assert!(Rc::ptr_eq(&a, &b), "identical arguments must hit the cache");
    assert_eq!(cache.len(), 1);
}

#[test]
fn different_opacity_is_a_cache_miss() {
    let mut cache = IconCache::new();
    let logos = LogoStore::disabled();
    let theme = Theme::dark();
    let color = VendorId::Openai.info().color;

    let dim = cache
        .icon(VendorId::Openai, color, 0.55, &logos, &theme)
        .expect("render badge");
    let full = cache
        .icon(VendorId::Openai, color, 1.0, &logos, &theme)
        .expect("render badge");
    assert!(!Rc::ptr_eq(&dim, &full));
    assert_eq!(cache.len(), 2);
}

#[test]
fn badge_raster_has_expected_size() {
    let mut cache = IconCache::new();
    let logos = LogoStore::disabled();
    let theme = Theme::dark();
    let color = VendorId::Google.info().color;

    let icon = cache
        .icon(VendorId::Google, color, 1.0, &logos, &theme)
        .expect("render badge");
    let image = icon.image();
    assert_eq!(image.width(), ICON_SIZE);
    assert_eq!(image.height(), ICON_SIZE);
}

#[test]
fn missing_logo_directory_resolves_to_failed_loads() {
    let mut logos = LogoStore::spawn("definitely/not/a/real/dir");
    // The loader thread reports one completion per vendor.
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    let mut seen = Vec::new();
    while seen.len() < VendorId::ORDER.len() && std::time::Instant::now() < deadline {
        seen.extend(logos.poll());
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    assert_eq!(seen.len(), VendorId::ORDER.len());
    for vendor in VendorId::ORDER {
        assert!(logos.ready(vendor).is_none(), "{vendor} must fall back to initials");
    }
}

#[test]
fn adapter_poll_counts_sum_to_every_vendor() {
    let today = chrono::NaiveDate::from_ymd_opt(2026, 2, 1).expect("valid date");
    let mut adapter = ChartAdapter::with_today(Dataset::builtin(), today);
    adapter.load_logos("definitely/not/a/real/dir");

    // Completions may arrive split across several drains; the counts must
    // still add up to one per vendor.
    let deadline = std::time::Instant::now() + std::time::Duration::from_secs(5);
    let mut completed = 0;
    while completed < VendorId::ORDER.len() && std::time::Instant::now() < deadline {
        completed += adapter.poll_logos();
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
    assert_eq!(completed, VendorId::ORDER.len());
    assert_eq!(adapter.poll_logos(), 0, "drained loader reports nothing further");
}

#[test]
fn repaint_reuses_the_same_cache_entry() {
    let mut cache = IconCache::new();
    let logos = LogoStore::disabled();
    let theme = Theme::dark();
    let color = VendorId::Xai.info().color;

    let before = cache
        .icon(VendorId::Xai, color, 1.0, &logos, &theme)
        .expect("render badge");
    cache
        .repaint_vendor(VendorId::Xai, &logos, &theme)
        .expect("repaint");
    let after = cache
        .icon(VendorId::Xai, color, 1.0, &logos, &theme)
        .expect("render badge");
    assert!(Rc::ptr_eq(&before, &after), "repaint mutates in place, never reallocates");
}
