//! Yearly paper count aggregation

use crate::models::{Paper, YearCounts};

/// Group papers by their `year` field and count them
///
/// The result is a `BTreeMap`, so consumers iterate in ascending year order.
/// An empty input yields an empty map.
#[must_use]
pub fn count_by_year(papers: &[Paper]) -> YearCounts {
    let mut counts = YearCounts::new();
    for paper in papers {
        *counts.entry(paper.year.clone()).or_insert(0) += 1;
    }
    counts
}
