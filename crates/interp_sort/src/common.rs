#[inline]
pub(crate) fn lower_bound(sorted: &[i64], value: i64) -> usize {
    let mut l = 0usize;
    let mut r = sorted.len();
    while l < r {
        let m = l + (r - l) / 2;
        if sorted[m] < value {
            l = m + 1;
        } else {
            r = m;
        }
    }
    l
}

#[inline]
pub(crate) fn floor_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        usize::BITS as usize - 1 - n.leading_zeros() as usize
    }
}
