use rand::Rng;

// Sample size follows 2^round(log2(log2(n))): 4 pivots in the tens, 8 in the
// hundreds, 16 around a million elements.
pub(crate) fn pivot_count(len: usize) -> usize {
    debug_assert!(len >= 4);
    let double_log = (len as f64).log2().log2();
    let count = 2f64.powf(double_log.round()) as usize;
    count.max(2)
}

// Draws `count` values from `data` uniformly with replacement (duplicates are
// expected on skewed input) and returns them sorted ascending.
pub(crate) fn sample_pivots<R: Rng + ?Sized>(data: &[i64], count: usize, rng: &mut R) -> Vec<i64> {
    let mut pivots = Vec::with_capacity(count);
    for _ in 0..count {
        pivots.push(data[rng.random_range(0..data.len())]);
    }
    pivots.sort_unstable();
    pivots
}
