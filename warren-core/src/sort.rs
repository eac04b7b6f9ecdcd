//! Ascending top-k selection.
//!
//! Kruskal's scan uses this with `k` equal to the edge count, where it
//! behaves as a plain ascending sort.

use std::collections::BinaryHeap;

/// Returns the `k` smallest items in ascending order.
///
/// Items are selected through a bounded max-heap, so the cost is
/// `O(n log k)` rather than a full comparison sort when `k` is small. Equal
/// items are kept and emitted in input order. `k == 0` yields an empty
/// result; when `k` meets or exceeds the input length the entire input is
/// returned sorted.
///
/// # Examples
/// ```
/// use warren_core::top_k_sort;
///
/// let smallest = top_k_sort(3, [9, 2, 7, 4, 1, 8]);
/// assert_eq!(smallest, vec![1, 2, 4]);
///
/// let all = top_k_sort(4, [3, 1, 2, 0]);
/// assert_eq!(all, vec![0, 1, 2, 3]);
/// ```
#[must_use]
pub fn top_k_sort<T: Ord>(k: usize, items: impl IntoIterator<Item = T>) -> Vec<T> {
    if k == 0 {
        return Vec::new();
    }

    // Position-decorated entries make the heap order total and stable: among
    // equal items the later arrival is evicted first.
    let mut worst_first: BinaryHeap<(T, usize)> = BinaryHeap::new();
    for (position, item) in items.into_iter().enumerate() {
        worst_first.push((item, position));
        if worst_first.len() > k {
            worst_first.pop();
        }
    }

    worst_first
        .into_sorted_vec()
        .into_iter()
        .map(|(item, _)| item)
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::top_k_sort;

    #[rstest]
    #[case::empty_input(0, vec![], vec![])]
    #[case::zero_k(0, vec![5, 1, 3], vec![])]
    #[case::partial(2, vec![5, 1, 3], vec![1, 3])]
    #[case::full(3, vec![5, 1, 3], vec![1, 3, 5])]
    #[case::oversized_k(10, vec![5, 1, 3], vec![1, 3, 5])]
    fn selects_the_k_smallest_ascending(
        #[case] k: usize,
        #[case] input: Vec<i32>,
        #[case] expected: Vec<i32>,
    ) {
        assert_eq!(top_k_sort(k, input), expected);
    }

    #[derive(Clone, Debug)]
    struct Keyed {
        key: i32,
        tag: &'static str,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Keyed {}

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }

    #[test]
    fn equal_items_keep_input_order() {
        let keyed = |key, tag| Keyed { key, tag };
        let input = vec![
            keyed(2, "late"),
            keyed(1, "first"),
            keyed(1, "second"),
            keyed(0, "min"),
            keyed(1, "third"),
        ];
        let ordered: Vec<&str> = top_k_sort(3, input).into_iter().map(|item| item.tag).collect();
        assert_eq!(ordered, vec!["min", "first", "second"]);
    }

    #[test]
    fn degenerates_to_a_full_sort_at_k_equal_len() {
        let input = vec![4, 4, 2, 9, 2, 0];
        let mut expected = input.clone();
        expected.sort();
        assert_eq!(top_k_sort(input.len(), input), expected);
    }
}
