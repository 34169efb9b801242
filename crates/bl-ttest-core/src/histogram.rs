//! Shared-edge histogram over two samples
//!
//! Both samples are binned against the same 20 equal-width bins spanning
//! their combined range, so the two frequency columns line up row for row
//! on screen and in the exported workbook.

use crate::types::Sample;

/// Number of bins in every histogram table
pub const BIN_COUNT: usize = 20;

/// Shared bin edges plus one frequency column per sample
#[derive(Debug, Clone)]
pub struct HistogramTable {
    /// Bin edges, length BIN_COUNT + 1
    pub edges: Vec<f64>,
    /// Integer-truncated "lo-hi" label per bin, length BIN_COUNT
    pub labels: Vec<String>,
    /// Frequencies for sample 1, length BIN_COUNT
    pub counts1: Vec<u32>,
    /// Frequencies for sample 2, length BIN_COUNT
    pub counts2: Vec<u32>,
}

/// Bin both samples onto shared equal-width edges
///
/// The range spans the combined min and max of both samples. A zero-width
/// range expands by 0.5 on each side so the edges stay distinct. Values on
/// an interior edge count toward the bin on the right; values equal to the
/// last edge count toward the final bin.
pub fn build_histogram(sample1: &Sample, sample2: &Sample) -> HistogramTable {
    let combined = sample1.values().iter().chain(sample2.values().iter());
    let (mut lo, mut hi) = combined.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
        (lo.min(x), hi.max(x))
    });
    if !lo.is_finite() || !hi.is_finite() {
        // both samples empty; keep the edges well-formed
        (lo, hi) = (0.0, 1.0);
    } else if lo == hi {
        (lo, hi) = (lo - 0.5, hi + 0.5);
    }

    let width = (hi - lo) / BIN_COUNT as f64;
    let edges: Vec<f64> = (0..=BIN_COUNT).map(|i| lo + i as f64 * width).collect();
    let labels = (0..BIN_COUNT)
        .map(|i| format!("{}-{}", edges[i] as i64, edges[i + 1] as i64))
        .collect();

    HistogramTable {
        counts1: bin_counts(sample1.values(), lo, width),
        counts2: bin_counts(sample2.values(), lo, width),
        edges,
        labels,
    }
}

fn bin_counts(values: &[f64], lo: f64, width: f64) -> Vec<u32> {
    let mut counts = vec![0u32; BIN_COUNT];
    for &x in values {
        let idx = ((x - lo) / width).floor() as isize;
        let idx = idx.clamp(0, BIN_COUNT as isize - 1) as usize;
        counts[idx] += 1;
    }
    counts
}
