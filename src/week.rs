//! Dates a new batch of lucky numbers is prepared for

use chrono::{Datelike, Duration, NaiveDate};

const WORKING_DAYS: u32 = 5;

/// Working days a new batch of lucky numbers is prepared for, up to the end of the week.
///
/// Continues on the working day after `last`, rolling over to Monday when `last` is a Friday or falls on the
/// weekend. When `last` is missing or older than the working week of `today`, starts on that week's Monday, so
/// the whole current week can still be filled in. At the weekend the working week of `today` is the next one.
pub fn next_week_dates(last: Option<NaiveDate>, today: NaiveDate) -> Vec<NaiveDate> {
    let week_start = working_week_start(today);
    let first = match last {
        Some(last) if last >= week_start => next_working_day(last),
        _ => week_start,
    };
    let count = WORKING_DAYS - first.weekday().num_days_from_monday();
    (0..count)
        .map(|i| first + Duration::days(i as i64))
        .collect()
}

fn working_week_start(today: NaiveDate) -> NaiveDate {
    let weekday = today.weekday().num_days_from_monday();
    if weekday >= WORKING_DAYS {
        next_monday(today)
    } else {
        today - Duration::days(weekday as i64)
    }
}

fn next_working_day(date: NaiveDate) -> NaiveDate {
    if date.weekday().num_days_from_monday() + 1 >= WORKING_DAYS {
        next_monday(date)
    } else {
        date + Duration::days(1)
    }
}

fn next_monday(date: NaiveDate) -> NaiveDate {
    date + Duration::days(7 - date.weekday().num_days_from_monday() as i64)
}
