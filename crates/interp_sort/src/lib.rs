mod bin_map;
mod common;
mod distribute;
#[cfg(feature = "parallel")]
mod parallel;
mod sampler;

use rand::Rng;

use bin_map::BinMap;

#[cfg(feature = "parallel")]
pub use parallel::par_sort;

#[derive(Clone, Copy, Debug)]
pub struct TunedParams {
    pub direct_sort_threshold: usize,
    pub recurse_factor: usize,
}

pub const TUNED_PARAMS: TunedParams = TunedParams {
    direct_sort_threshold: 64,
    recurse_factor: 5,
};

/// Receives the sorted pivot sample drawn at each recursive step.
///
/// Purely diagnostic: an observer can trace or record the samples but has no
/// way to influence the sort.
pub trait PivotObserver {
    fn pivots_sampled(&mut self, depth: usize, pivots: &[i64]);
}

pub struct NoopObserver;

impl PivotObserver for NoopObserver {
    fn pivots_sampled(&mut self, _depth: usize, _pivots: &[i64]) {}
}

/// Sorts `data` in place, non-decreasing.
///
/// Distribution-based: a small random sample approximates the value
/// distribution, a piecewise-linear map routes every element into one of
/// `n / log2(n)` bins in a single pass, and only bins that stay large are
/// recursed into. Not stable. Ranges shorter than
/// `TUNED_PARAMS.direct_sort_threshold` go straight to a comparison sort.
pub fn sort(data: &mut [i64]) {
    sort_with_rng(data, &mut rand::rng());
}

/// Same as [`sort`] with an injectable random source for the pivot sampling.
pub fn sort_with_rng<R: Rng + ?Sized>(data: &mut [i64], rng: &mut R) {
    sort_observed(data, rng, &mut NoopObserver);
}

/// Same as [`sort_with_rng`], additionally reporting every pivot sample to
/// `observer` in recursion order.
pub fn sort_observed<R, O>(data: &mut [i64], rng: &mut R, observer: &mut O)
where
    R: Rng + ?Sized,
    O: PivotObserver,
{
    sort_recursive(data, rng, observer, 0);
}

pub(crate) fn sort_recursive<R, O>(data: &mut [i64], rng: &mut R, observer: &mut O, depth: usize)
where
    R: Rng + ?Sized,
    O: PivotObserver,
{
    let len = data.len();
    if len < 2 {
        return;
    }
    if len < TUNED_PARAMS.direct_sort_threshold {
        data.sort_unstable();
        return;
    }
    if data.is_sorted() {
        return;
    }

    let pivots = sampler::sample_pivots(data, sampler::pivot_count(len), rng);
    observer.pivots_sampled(depth, &pivots);

    // Fewer than two distinct pivots means the sample gives the interpolation
    // nothing to calibrate against; sort the range outright.
    if pivots.first() == pivots.last() {
        data.sort_unstable();
        return;
    }

    let bin_count = (len / common::floor_log2(len)).max(pivots.len() + 2);
    let map = BinMap::build(pivots, bin_count);
    let bins = distribute::distribute(data, &map);

    let threshold = TUNED_PARAMS.recurse_factor * len / bin_count;
    let mut cur = 0usize;
    for mut bin in bins {
        if bin.is_empty() {
            continue;
        }
        // A bin that swallowed the whole range cannot shrink by recursing.
        if bin.len() < threshold || bin.len() == len {
            bin.sort_unstable();
        } else {
            sort_recursive(&mut bin, rng, observer, depth + 1);
        }
        data[cur..cur + bin.len()].copy_from_slice(&bin);
        cur += bin.len();
    }
    debug_assert_eq!(cur, len);
}
