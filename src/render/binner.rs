//! Equal-width binning over a resolved [`Range`].
//!
//! Bin `i` covers `[min + i*step, min + (i+1)*step)`; the last bin is closed
//! on the right so `max` itself is counted. Indices are clamped into
//! `[0, N-1]`, so every sample lands somewhere.
//!
//! A degenerate range (`min == max`) has `step == 0`; every sample goes to
//! bin 0 instead of dividing by zero.

use tracing::debug;

use crate::core::{bounds::Range, config::BinCount};

/// Counts for `N` equal-width bins across `range`.
#[derive(Clone, Debug, PartialEq)]
pub struct BinSet {
    pub range: Range,
    pub counts: Vec<u64>,
}

impl BinSet {
    /// Count every sample into one of `bins` buckets. Pure: same inputs,
    /// same counts.
    #[must_use]
    pub fn build(samples: &[f64], range: Range, bins: BinCount) -> Self {
        let n = bins.get();
        let mut counts = vec![0u64; n];
        let step = range.step(n);

        for &v in samples {
            counts[bin_index(range, v, step, n)] += 1;
        }

        let set = Self { range, counts };
        if tracing::enabled!(tracing::Level::DEBUG) {
            for (i, (mid, count)) in set.midpoints().zip(set.counts.iter().copied()).enumerate() {
                debug!(bin = i, midpoint = mid, count, "bin");
            }
        }
        set
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Width of one bin.
    #[inline]
    #[must_use]
    pub fn step(&self) -> f64 {
        self.range.step(self.counts.len())
    }

    /// Center of bin `i`, from the range alone.
    #[inline]
    #[must_use]
    pub fn midpoint(&self, i: usize) -> f64 {
        self.range.point(self.step(), i as f64 + 0.5)
    }

    pub fn midpoints(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.counts.len()).map(|i| self.midpoint(i))
    }

    #[inline]
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    #[inline]
    #[must_use]
    pub fn max_count(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn bin_index(range: Range, v: f64, step: f64, n: usize) -> usize {
    if step == 0.0 {
        return 0;
    }
    let raw = range.offset(v, step).floor();
    // `as` saturates, so a negative offset becomes 0 and overflow becomes usize::MAX
    (raw.max(0.0) as usize).min(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn range(min: f64, max: f64) -> Range {
        Range { min, max }
    }

    #[test]
    fn one_through_ten_fill_ten_bins_evenly() {
        let samples: Vec<f64> = (1..=10).map(f64::from).collect();
        let set = BinSet::build(&samples, range(1.0, 10.0), BinCount::Ten);
        assert_eq!(set.counts, vec![1; 10]);
        assert_eq!(set.total(), 10);
        assert_eq!(set.max_count(), 1);
    }

    #[test]
    fn max_lands_in_the_last_bin() {
        let set = BinSet::build(&[0.0, 100.0], range(0.0, 100.0), BinCount::Twenty);
        assert_eq!(set.counts[0], 1);
        assert_eq!(set.counts[19], 1);
        assert_eq!(set.total(), 2);
    }

    #[test]
    fn lower_edges_are_inclusive() {
        // step is 1.0; 3.0 opens bin 3
        let set = BinSet::build(&[2.999, 3.0], range(0.0, 10.0), BinCount::Ten);
        assert_eq!(set.counts[2], 1);
        assert_eq!(set.counts[3], 1);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let set = BinSet::build(&[-50.0, 50.0], range(0.0, 10.0), BinCount::Ten);
        assert_eq!(set.counts[0], 1);
        assert_eq!(set.counts[9], 1);
    }

    #[test]
    fn degenerate_range_puts_everything_in_bin_zero() {
        let set = BinSet::build(&[5.0; 7], range(5.0, 5.0), BinCount::Forty);
        assert_eq!(set.counts[0], 7);
        assert!(set.counts[1..].iter().all(|&c| c == 0));
        assert_eq!(set.len(), 40);
    }

    #[test]
    fn sum_of_counts_is_the_sample_count() {
        let samples: Vec<f64> = (0..1000).map(|i| f64::from(i).sin() * 37.0).collect();
        let r = Range::resolve(&samples, &crate::core::config::Config::default()).unwrap();
        for bins in [BinCount::Ten, BinCount::Twenty, BinCount::Forty, BinCount::Eighty] {
            let set = BinSet::build(&samples, r, bins);
            assert_eq!(set.total(), 1000);
        }
    }

    #[test]
    fn extreme_magnitudes_fill_both_end_bins() {
        let samples = [-1e308, 0.0, 1e308];
        let r = Range::resolve(&samples, &crate::Config::default()).unwrap();
        let set = BinSet::build(&samples, r, BinCount::Ten);
        assert_eq!(set.counts[0], 1);
        assert_eq!(set.counts[5], 1);
        assert_eq!(set.counts[9], 1);
        assert!(set.step().is_finite());
        assert!(set.midpoints().all(f64::is_finite));
    }

    #[test]
    fn binning_is_repeatable() {
        let samples = [0.3, 0.1, 0.9, 0.5, 0.5, 0.7];
        let a = BinSet::build(&samples, range(0.1, 0.9), BinCount::Ten);
        let b = BinSet::build(&samples, range(0.1, 0.9), BinCount::Ten);
        assert_eq!(a, b);
    }

    #[test]
    fn midpoints_depend_only_on_range_and_count() {
        let set = BinSet::build(&[], range(0.0, 10.0), BinCount::Ten);
        let mids: Vec<f64> = set.midpoints().collect();
        assert_eq!(mids.len(), 10);
        assert!((mids[0] - 0.5).abs() < 1e-12);
        assert!((mids[9] - 9.5).abs() < 1e-12);
        assert_eq!(set.max_count(), 0);
    }
}
