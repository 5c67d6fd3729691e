//! Draws candidates into slots and clears them

use crate::{
    provider::{CandidateProvider, SlotProvider},
    rand::Random,
    shuffle::shuffle,
};

/// Binds a candidate pool and a set of slots to the Draw and Clear actions.
///
/// Both providers are queried afresh by every call, so the pool may change between draws and nothing leaks from one
/// draw into the next.
#[derive(Debug)]
pub struct LuckyDraw<C, S, R> {
    candidates: C,
    slots: S,
    random: R,
}

impl<C, S, R> LuckyDraw<C, S, R>
where
    C: CandidateProvider,
    S: SlotProvider,
    R: Random,
{
    pub fn new(candidates: C, slots: S, random: R) -> Self {
        LuckyDraw {
            candidates,
            slots,
            random,
        }
    }

    /// Shuffles the candidates and writes them positionally into the slots.
    ///
    /// A slot is written only when a non-empty shuffled value exists at its index; remaining slots keep whatever
    /// they held. Returns the number of slots written.
    pub fn draw(&mut self) -> usize {
        let shuffled = shuffle(self.candidates.list_candidates(), &self.random);
        let mut slots = self.slots.list_slots();
        let slot_count = slots.len();
        let mut assigned = 0;
        for (slot, value) in slots.iter_mut().zip(&shuffled) {
            if !value.is_empty() {
                slot.set_value(value);
                assigned += 1;
            }
        }
        if slot_count > shuffled.len() {
            log::debug!(
                "{} of {slot_count} slots left untouched, only {} candidates",
                slot_count - shuffled.len(),
                shuffled.len()
            );
            for (i, slot) in slots.iter().enumerate().skip(shuffled.len()) {
                log::debug!("Slot {i} keeps '{}'", slot.value());
            }
        }
        log::debug!("Drew {assigned} of {} candidates", shuffled.len());
        assigned
    }

    /// Empties every slot, returns how many there were
    pub fn clear_all(&mut self) -> usize {
        let mut slots = self.slots.list_slots();
        slots.iter_mut().for_each(|slot| slot.set_value(""));
        log::debug!("Cleared {} slots", slots.len());
        slots.len()
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (C, S, R) {
        (self.candidates, self.slots, self.random)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::{
        provider::MockCandidateProvider,
        rand::RandomImpl,
        test_helpers::{rand::FakeRandom, strings},
    };

    #[test]
    fn draw_assigns_every_candidate_exactly_once() {
        let mut slots = strings(&["", "", ""]);
        let mut lucky = LuckyDraw::new(strings(&["1", "2", "3"]), &mut slots, RandomImpl);

        let assigned = lucky.draw();

        assert_eq!(assigned, 3);
        let drawn: HashSet<&str> = slots.iter().map(String::as_str).collect();
        assert_eq!(drawn, HashSet::from(["1", "2", "3"]));
    }

    #[test]
    fn draw_writes_shuffled_order() {
        /* i = 2 swaps with 0, i = 1 with 1 */
        let random = FakeRandom::default().with_random_sequence(vec![0, 1]);
        let mut slots = strings(&["", "", ""]);
        let mut lucky = LuckyDraw::new(strings(&["1", "2", "3"]), &mut slots, random);

        lucky.draw();

        assert_eq!(slots, strings(&["3", "2", "1"]));
    }

    #[test]
    fn draw_when_candidates_run_short_then_trailing_slots_are_untouched() {
        let mut slots = strings(&["x", "y", "z"]);
        let mut lucky = LuckyDraw::new(strings(&["1", "2"]), &mut slots, RandomImpl);

        let assigned = lucky.draw();

        assert_eq!(assigned, 2);
        let drawn: HashSet<&str> = slots[..2].iter().map(String::as_str).collect();
        assert_eq!(drawn, HashSet::from(["1", "2"]));
        assert_eq!(slots[2], "z");
    }

    #[test]
    fn draw_when_more_candidates_than_slots_then_fills_all_slots() {
        let random = FakeRandom::default().with_random_sequence(vec![0, 0, 0]);
        let mut slots = strings(&["", ""]);
        let mut lucky = LuckyDraw::new(strings(&["1", "2", "3", "4"]), &mut slots, random);

        let assigned = lucky.draw();

        /* [1,2,3,4] -> [4,2,3,1] -> [3,2,4,1] -> [2,3,4,1] */
        assert_eq!(assigned, 2);
        assert_eq!(slots, strings(&["2", "3"]));
    }

    #[test]
    fn draw_skips_empty_candidates() {
        /* i = 1 swaps with 0: ["5", ""] */
        let random = FakeRandom::default().with_random_sequence(vec![0]);
        let mut slots = strings(&["old", "older"]);
        let mut lucky = LuckyDraw::new(strings(&["", "5"]), &mut slots, random);

        let assigned = lucky.draw();

        assert_eq!(assigned, 1);
        assert_eq!(slots, strings(&["5", "older"]));
    }

    #[test]
    fn draw_without_candidates_is_a_no_op() {
        let mut slots = strings(&["1", "2"]);
        let mut lucky = LuckyDraw::new(Vec::<String>::new(), &mut slots, RandomImpl);

        let assigned = lucky.draw();

        assert_eq!(assigned, 0);
        assert_eq!(slots, strings(&["1", "2"]));
    }

    #[test]
    fn draw_without_slots_is_a_no_op() {
        let mut slots: Vec<String> = vec![];
        let mut lucky = LuckyDraw::new(strings(&["1", "2"]), &mut slots, RandomImpl);

        assert_eq!(lucky.draw(), 0);
    }

    #[test]
    fn draw_looks_up_candidates_on_every_call() {
        let mut candidates = MockCandidateProvider::new();
        let mut calls = 0;
        candidates.expect_list_candidates().times(2).returning(move || {
            calls += 1;
            vec![calls.to_string()]
        });
        let mut slots = strings(&[""]);
        let mut lucky = LuckyDraw::new(candidates, &mut slots, RandomImpl);

        lucky.draw();
        lucky.draw();

        let (_, slots, _) = lucky.into_parts();
        assert_eq!(*slots, strings(&["2"]));
    }

    #[test]
    fn draw_twice_shuffles_independently() {
        /* First draw swaps 1 with 0, second draw keeps the order */
        let random = FakeRandom::default().with_random_sequence(vec![0, 1]);
        let mut slots = strings(&["", ""]);
        let mut lucky = LuckyDraw::new(strings(&["1", "2"]), &mut slots, random);

        lucky.draw();
        let (candidates, slots, random) = lucky.into_parts();
        assert_eq!(*slots, strings(&["2", "1"]));
        assert_eq!(candidates, strings(&["1", "2"]));

        let mut lucky = LuckyDraw::new(candidates, slots, random);
        lucky.draw();
        let (_, slots, random) = lucky.into_parts();
        assert_eq!(*slots, strings(&["1", "2"]));
        assert_eq!(random.requested_ranges(), vec![0..=1, 0..=1]);
    }

    #[test]
    fn clear_all_empties_every_slot() {
        let mut slots = strings(&["5", "6", "7"]);
        let mut lucky = LuckyDraw::new(strings(&["1"]), &mut slots, RandomImpl);

        let cleared = lucky.clear_all();

        assert_eq!(cleared, 3);
        assert_eq!(slots, strings(&["", "", ""]));
    }

    #[test]
    fn clear_all_does_not_look_up_candidates() {
        let mut candidates = MockCandidateProvider::new();
        candidates.expect_list_candidates().never();
        let mut slots = strings(&["5"]);
        let mut lucky = LuckyDraw::new(candidates, &mut slots, RandomImpl);

        lucky.clear_all();

        drop(lucky);
        assert_eq!(slots, strings(&[""]));
    }
}
