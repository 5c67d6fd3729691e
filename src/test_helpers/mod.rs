pub mod rand {
    use crate::rand::Random;
    use std::cell::RefCell;
    use std::ops::RangeInclusive;

    /// Returns scripted indices and records the ranges it was asked for
    #[derive(Debug, Default)]
    pub struct FakeRandom {
        random_sequence: RefCell<Vec<usize>>,
        requested_ranges: RefCell<Vec<RangeInclusive<usize>>>,
    }

    impl FakeRandom {
        pub fn with_random_sequence(self, sequence: Vec<usize>) -> Self {
            self.random_sequence.replace(sequence);
            self.random_sequence.borrow_mut().reverse();
            self
        }

        pub fn requested_ranges(&self) -> Vec<RangeInclusive<usize>> {
            self.requested_ranges.borrow().clone()
        }
    }

    impl Random for FakeRandom {
        fn random_range(&self, range: RangeInclusive<usize>) -> usize {
            let value = self
                .random_sequence
                .borrow_mut()
                .pop()
                .expect("should not be empty");
            assert!(range.contains(&value), "{value} not in {range:?}");
            self.requested_ranges.borrow_mut().push(range);
            value
        }
    }
}

pub fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
