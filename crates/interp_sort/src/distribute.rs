use crate::bin_map::BinMap;

// Two passes over the range: count per-bin sizes, allocate each bin at its
// exact final size, then place. The bin index is recomputed in the second
// pass instead of cached, trading a second lookup for a length-n scratch
// table.
pub(crate) fn distribute(data: &[i64], map: &BinMap) -> Vec<Vec<i64>> {
    let mut sizes = vec![0usize; map.bin_count()];
    for &value in data {
        sizes[map.bin_of(value)] += 1;
    }

    let mut bins: Vec<Vec<i64>> = sizes.iter().map(|&size| Vec::with_capacity(size)).collect();
    for &value in data {
        bins[map.bin_of(value)].push(value);
    }

    debug_assert_eq!(bins.iter().map(Vec::len).sum::<usize>(), data.len());
    bins
}

#[cfg(test)]
mod tests {
    use crate::bin_map::BinMap;

    use super::distribute;

    fn test_data() -> Vec<i64> {
        (0..1_000).map(|i| (i * 7919) % 997 - 498).collect()
    }

    #[test]
    fn every_element_lands_in_exactly_one_bin() {
        let data = test_data();
        let map = BinMap::build(vec![-300, -100, 100, 300], 64);
        let bins = distribute(&data, &map);

        assert_eq!(bins.len(), 64);
        assert_eq!(bins.iter().map(Vec::len).sum::<usize>(), data.len());

        let mut gathered: Vec<i64> = bins.iter().flatten().copied().collect();
        gathered.sort_unstable();
        let mut expected = data.clone();
        expected.sort_unstable();
        assert_eq!(gathered, expected);
    }

    #[test]
    fn earlier_bins_hold_smaller_values() {
        let data = test_data();
        let map = BinMap::build(vec![-300, -100, 100, 300], 64);
        let bins = distribute(&data, &map);

        let mut prev_max: Option<i64> = None;
        for bin in &bins {
            let Some(&min) = bin.iter().min() else {
                continue;
            };
            if let Some(prev) = prev_max {
                assert!(prev <= min);
            }
            prev_max = bin.iter().max().copied();
        }
    }

    #[test]
    fn counted_sizes_match_filled_sizes() {
        let data = test_data();
        let map = BinMap::build(vec![-400, 0, 50, 450], 32);
        for bin in distribute(&data, &map) {
            // exact-capacity allocation means the fill pass never grows a bin
            assert_eq!(bin.capacity(), bin.len());
        }
    }
}
