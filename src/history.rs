//! Lucky numbers already drawn and what can still be drawn

use std::{
    collections::HashSet,
    fmt::{Display, Formatter, Result as FmtResult},
    fs,
    path::Path,
};

use anyhow::{bail, Context, Result};
use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::{rand::Random, shuffle::shuffle};

/// Hour at which the next day's lucky number becomes the current one
pub const DEFAULT_CHANGE_HOUR: u32 = 15;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyNumber {
    pub date: NaiveDate,
    pub number: u16,
}

impl Display for LuckyNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} {}", self.date, self.number)
    }
}

/// Lucky numbers ordered by date, at most one per date
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    numbers: Vec<LuckyNumber>,
}

impl History {
    pub fn new(numbers: Vec<LuckyNumber>) -> Result<Self> {
        let mut history = History::default();
        history.add(&numbers)?;
        Ok(history)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("Unable to read history {}", path.display()))?;
        let numbers: Vec<LuckyNumber> = serde_json::from_str(&json)
            .with_context(|| format!("Invalid history {}", path.display()))?;
        History::new(numbers).with_context(|| format!("Invalid history {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.numbers)?;
        fs::write(path, json).with_context(|| format!("Unable to write history {}", path.display()))
    }

    pub fn numbers(&self) -> &[LuckyNumber] {
        &self.numbers
    }

    /// Most recent lucky number
    pub fn last(&self) -> Option<&LuckyNumber> {
        self.numbers.last()
    }

    /// Lucky number drawn for `date`
    pub fn on(&self, date: NaiveDate) -> Option<&LuckyNumber> {
        self.numbers
            .binary_search_by_key(&date, |n| n.date)
            .ok()
            .map(|i| &self.numbers[i])
    }

    /// Every time `number` was drawn, oldest first
    pub fn with_number(&self, number: u16) -> Vec<&LuckyNumber> {
        self.numbers.iter().filter(|n| n.number == number).collect()
    }

    /// Adds all `entries` or none of them. Fails if a date already has a lucky number.
    pub fn add(&mut self, entries: &[LuckyNumber]) -> Result<usize> {
        let mut dates: HashSet<NaiveDate> = self.numbers.iter().map(|n| n.date).collect();
        for entry in entries {
            if !dates.insert(entry.date) {
                bail!("There is already lucky number for {}", entry.date);
            }
        }
        self.numbers.extend_from_slice(entries);
        self.numbers.sort_by_key(|n| n.date);
        Ok(entries.len())
    }

    /// Numbers from `1..=max` not drawn yet in the current round, ascending.
    ///
    /// Every number is drawn once per round of `max` days, so only the `len % max` most recent draws count.
    pub fn left(&self, max: u16) -> Vec<u16> {
        if max == 0 {
            return vec![];
        }
        let in_round = self.numbers.len() % max as usize;
        let past: HashSet<u16> = self
            .numbers
            .iter()
            .rev()
            .take(in_round)
            .map(|n| n.number)
            .collect();
        (1..=max).filter(|n| !past.contains(n)).collect()
    }

    /// [History::left] in random order
    pub fn draw_pool(&self, max: u16, random: &impl Random) -> Vec<u16> {
        shuffle(self.left(max), random)
    }

    /// The lucky number of today, or of the next day that has one. After `change_hour` today counts as over.
    pub fn current(&self, change_hour: u32, now: NaiveDateTime) -> Option<&LuckyNumber> {
        let start = closest_day(change_hour, now);
        self.numbers.iter().find(|n| n.date >= start)
    }

    /// Lucky numbers of the week containing the closest day.
    ///
    /// When that week has nothing left from the closest day on, falls forward to the next week having any lucky
    /// number, counted as seven days from its first one.
    pub fn current_week(&self, change_hour: u32, now: NaiveDateTime) -> &[LuckyNumber] {
        let closest = closest_day(change_hour, now);
        let week_start = closest - Duration::days(closest.weekday().num_days_from_monday() as i64);
        let first_week_end = week_start + Duration::days(7);

        let first = self.numbers.partition_point(|n| n.date < week_start);
        let second = self.numbers.partition_point(|n| n.date < first_week_end);
        let first_week = &self.numbers[first..second];
        if first_week.last().is_some_and(|n| n.date >= closest) {
            return first_week;
        }

        let rest = &self.numbers[second..];
        match rest.first() {
            Some(next) => {
                let second_week_end = next.date + Duration::days(7);
                &rest[..rest.partition_point(|n| n.date < second_week_end)]
            }
            None => &[],
        }
    }
}

fn closest_day(change_hour: u32, now: NaiveDateTime) -> NaiveDate {
    if now.hour() >= change_hour {
        now.date() + Duration::days(1)
    } else {
        now.date()
    }
}
