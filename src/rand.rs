use std::ops::RangeInclusive;

use rand::{rng, Rng};

/// Source of uniformly distributed indices
pub trait Random {
    fn random_range(&self, range: RangeInclusive<usize>) -> usize {
        rng().random_range(range)
    }
}

pub struct RandomImpl;

impl Random for RandomImpl {}

impl<R: Random + ?Sized> Random for &R {
    fn random_range(&self, range: RangeInclusive<usize>) -> usize {
        (**self).random_range(range)
    }
}
