extern crate alloc;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;

/// Keys of `counts` ordered by descending count.
///
/// The sort is stable over the map's ascending key order, so equal counts
/// come out with the smaller packed color first.
pub fn sorted_by_frequency(counts: &BTreeMap<u32, u32>) -> Vec<u32> {
    let mut pairs: Vec<(u32, u32)> = counts.iter().map(|(&k, &v)| (k, v)).collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1));
    pairs.into_iter().map(|(k, _)| k).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descending_with_key_ties() {
        let counts = BTreeMap::from([(5, 2), (1, 7), (3, 2), (9, 7), (2, 1)]);
        assert_eq!(sorted_by_frequency(&counts), vec![1, 9, 3, 5, 2]);
    }

    #[test]
    fn empty() {
        assert!(sorted_by_frequency(&BTreeMap::new()).is_empty());
    }
}
