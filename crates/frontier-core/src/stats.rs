// File: crates/frontier-core/src/stats.rs
// Summary: Stat panel summary derived from the currently visible records.

use crate::dataset::Record;

/// Score of the first benchmarked model; progress is measured against it.
pub const BASELINE_SCORE: f64 = 923.0;
const PROGRESS_DIVISOR: f64 = 3.2;

/// Values shown in the stat panel. `Default` is the empty-dataset fallback
/// (zeros, blank model) so an all-hidden view never panics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub highest_score: f64,
    pub highest_model: String,
    pub visible_count: usize,
    pub progress_delta: i64,
}

impl Summary {
    /// Compute from post-filter, post-hidden records. Ties on score keep the
    /// earlier record.
    pub fn compute(records: &[&Record]) -> Self {
        let Some(highest) = records
            .iter()
            .copied()
            .reduce(|a, b| if b.score > a.score { b } else { a })
        else {
            return Self::default();
        };
        Self {
            highest_score: highest.score,
            highest_model: highest.model.clone(),
            visible_count: records.len(),
            progress_delta: ((highest.score - BASELINE_SCORE) / PROGRESS_DIVISOR).round() as i64,
        }
    }
}
