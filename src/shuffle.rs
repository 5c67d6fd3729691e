//! Fisher-Yates (Knuth) shuffle

use crate::rand::Random;

/// Reorders `values` into a uniformly random permutation.
///
/// Walks from the last index down, swapping each element with one picked uniformly from `0..=i`. The same
/// allocation is reordered and handed back, so the original order is lost.
pub fn shuffle<T>(mut values: Vec<T>, random: &impl Random) -> Vec<T> {
    for i in (1..values.len()).rev() {
        let j = random.random_range(0..=i);
        values.swap(i, j);
    }
    values
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{rand::RandomImpl, test_helpers::rand::FakeRandom};

    #[test]
    fn shuffle_empty_returns_empty() {
        let result = shuffle(Vec::<String>::new(), &RandomImpl);

        assert!(result.is_empty());
    }

    #[test]
    fn shuffle_single_element_does_not_ask_for_random_index() {
        /* FakeRandom panics when its sequence is exhausted */
        let random = FakeRandom::default();

        let result = shuffle(vec!["7"], &random);

        assert_eq!(result, vec!["7"]);
    }

    #[test]
    fn shuffle_swaps_from_last_index_down() {
        /* i = 3 swaps with 0, i = 2 with 2 (no-op), i = 1 with 0 */
        let random = FakeRandom::default().with_random_sequence(vec![0, 2, 0]);

        let result = shuffle(vec!["a", "b", "c", "d"], &random);

        assert_eq!(result, vec!["b", "d", "c", "a"]);
        assert_eq!(random.requested_ranges(), vec![0..=3, 0..=2, 0..=1]);
    }

    #[test]
    fn shuffle_reuses_the_same_allocation() {
        let values = vec![1, 2, 3, 4, 5];
        let pointer = values.as_ptr();

        let result = shuffle(values, &RandomImpl);

        assert_eq!(result.as_ptr(), pointer);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let values: Vec<String> = ["1", "2", "2", "3", "", "42"]
            .iter()
            .map(|s| s.to_string())
            .collect();

        for _ in 0..100 {
            let mut result = shuffle(values.clone(), &RandomImpl);
            let mut expected = values.clone();
            result.sort();
            expected.sort();
            assert_eq!(result, expected);
        }
    }

    #[test]
    fn shuffle_produces_more_than_one_ordering() {
        let orderings: HashSet<Vec<u8>> = (0..200)
            .map(|_| shuffle(vec![1, 2, 3, 4], &RandomImpl))
            .collect();

        assert!(orderings.len() > 1);
    }

    #[test]
    fn shuffle_puts_every_element_in_every_position() {
        let mut seen = [[false; 3]; 3];

        for _ in 0..1000 {
            for (position, value) in shuffle(vec![0, 1, 2], &RandomImpl).into_iter().enumerate() {
                seen[position][value] = true;
            }
        }

        assert!(seen.iter().flatten().all(|&s| s));
    }
}
