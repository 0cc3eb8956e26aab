use rayon::prelude::*;

use crate::bin_map::BinMap;
use crate::{NoopObserver, TUNED_PARAMS, common, distribute, sampler, sort_recursive};

/// Parallel variant of [`crate::sort`]: one sequential sampling and
/// distribution pass, then the bins are sorted concurrently.
///
/// The counted bin sizes fix every bin's output offset up front, so the range
/// is pre-split into disjoint chunks and copy-back needs no synchronization.
/// Bin-id order of the chunks preserves the global order.
pub fn par_sort(data: &mut [i64]) {
    let len = data.len();
    if len < TUNED_PARAMS.direct_sort_threshold {
        data.sort_unstable();
        return;
    }
    if data.is_sorted() {
        return;
    }

    let mut rng = rand::rng();
    let pivots = sampler::sample_pivots(data, sampler::pivot_count(len), &mut rng);
    if pivots.first() == pivots.last() {
        data.sort_unstable();
        return;
    }

    let bin_count = (len / common::floor_log2(len)).max(pivots.len() + 2);
    let map = BinMap::build(pivots, bin_count);
    let bins = distribute::distribute(data, &map);
    let threshold = TUNED_PARAMS.recurse_factor * len / bin_count;

    let mut jobs = Vec::with_capacity(bins.len());
    let mut rest: &mut [i64] = data;
    for bin in bins {
        let (chunk, tail) = std::mem::take(&mut rest).split_at_mut(bin.len());
        rest = tail;
        if !bin.is_empty() {
            jobs.push((chunk, bin));
        }
    }
    debug_assert!(rest.is_empty());

    jobs.into_par_iter().for_each(|(chunk, mut bin)| {
        if bin.len() < threshold || bin.len() == len {
            bin.sort_unstable();
        } else {
            sort_recursive(&mut bin, &mut rand::rng(), &mut NoopObserver, 1);
        }
        chunk.copy_from_slice(&bin);
    });
}
