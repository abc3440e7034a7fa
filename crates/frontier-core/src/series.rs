// File: crates/frontier-core/src/series.rs
// Summary: Pure series builder: visible records -> per-vendor plotted series.

use crate::dataset::{Dataset, Record};
use crate::state::ViewState;
use crate::vendor::VendorId;

/// One plotted point: epoch-ms date, score, and the model name for labels.
#[derive(Clone, Debug, PartialEq)]
pub struct PlottedPoint {
    pub x: f64,
    pub y: f64,
    pub model: String,
}

/// One vendor's line. `highlight_index` is always the most recent point;
/// `draw_order` ranks vendors ascending by latest score so higher scorers
/// paint on top. Output order itself follows the registry display order.
#[derive(Clone, Debug, PartialEq)]
pub struct PlottedSeries {
    pub vendor: VendorId,
    pub points: Vec<PlottedPoint>,
    pub highlight_index: usize,
    pub draw_order: usize,
}

impl PlottedSeries {
    pub fn latest_score(&self) -> f64 {
        self.points
            .get(self.highlight_index)
            .map(|p| p.y)
            .unwrap_or(0.0)
    }
}

/// Records that pass the visibility predicate: admitted by the active filter
/// and not hidden by the legend. Shared by the stat panel and auto-Y.
pub fn visible_records<'a>(dataset: &'a Dataset, state: &ViewState) -> Vec<&'a Record> {
    dataset
        .records()
        .iter()
        .filter(|r| state.active_filter.admits(r.vendor) && !state.is_hidden(r.vendor))
        .collect()
}

/// Build plotted series for exactly the visible vendors. Pure and
/// deterministic: identical inputs always yield identical output.
pub fn build_series(dataset: &Dataset, state: &ViewState) -> Vec<PlottedSeries> {
    let visible = visible_records(dataset, state);

    let mut series: Vec<PlottedSeries> = Vec::new();
    for vendor in VendorId::ORDER {
        let mut group: Vec<&Record> =
            visible.iter().copied().filter(|r| r.vendor == vendor).collect();
        if group.is_empty() {
            continue;
        }
        // Stable: same-date records keep dataset insertion order.
        group.sort_by_key(|r| r.date);
        let points = group
            .iter()
            .map(|r| PlottedPoint { x: r.epoch_ms(), y: r.score, model: r.model.clone() })
            .collect::<Vec<_>>();
        let highlight_index = points.len() - 1;
        series.push(PlottedSeries { vendor, points, highlight_index, draw_order: 0 });
    }

    assign_draw_order(&mut series);
    series
}

/// Rank vendors ascending by latest score (ties keep registry order) and
/// store the rank as `draw_order`. Ranks are a permutation of `0..k`.
fn assign_draw_order(series: &mut [PlottedSeries]) {
    let mut ranked: Vec<usize> = (0..series.len()).collect();
    ranked.sort_by(|&a, &b| {
        series[a]
            .latest_score()
            .partial_cmp(&series[b].latest_score())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(series[a].vendor.registry_index().cmp(&series[b].vendor.registry_index()))
    });
    for (rank, idx) in ranked.into_iter().enumerate() {
        series[idx].draw_order = rank;
    }
}
