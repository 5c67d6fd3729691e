use std::{fmt::Display, io::Write, path::Path};

use anyhow::Result;
use chrono::NaiveDateTime;

use crate::{
    cli::{Cli, Command, FormArgs, HistoryArgs, NowArgs, PoolArgs},
    date_picker::DatePicker,
    draw::LuckyDraw,
    form::LuckyForm,
    history::History,
    rand::Random,
};

pub mod cli;
pub mod date_picker;
pub mod draw;
pub mod form;
pub mod history;
pub mod provider;
pub mod rand;
pub mod shuffle;
pub mod week;

#[cfg(test)]
mod test_helpers;

/// Executes the requested command. Anything meant for the user is written to `out`, diagnostics go to the log.
pub fn run(cli: &Cli, random: &impl Random, now: NaiveDateTime, out: &mut impl Write) -> Result<()> {
    match &cli.command {
        Command::Draw(args) => update_form(args, |form| {
            let (candidates, slots) = form.split_mut();
            let assigned = LuckyDraw::new(candidates, slots, random).draw();
            log::info!("Drew {assigned} lucky numbers");
        }),
        Command::Clear(args) => update_form(args, |form| {
            let (candidates, slots) = form.split_mut();
            let cleared = LuckyDraw::new(candidates, slots, random).clear_all();
            log::info!("Cleared {cleared} lucky number fields");
        }),
        Command::Record {
            form,
            history,
            date_pattern,
        } => record(form, history, &DatePicker::new(date_pattern)?),
        Command::Left(PoolArgs { history, max }) => {
            write_numbers(out, &History::load(history)?.left(*max))
        }
        Command::Pool(PoolArgs { history, max }) => {
            write_numbers(out, &History::load(history)?.draw_pool(*max, random))
        }
        Command::All(HistoryArgs { history }) => {
            write_lines(out, History::load(history)?.numbers())
        }
        Command::Search {
            history: HistoryArgs { history },
            number,
        } => {
            let history = History::load(history)?;
            let found = history.with_number(*number);
            if found.is_empty() {
                log::warn!("Number {number} has not been drawn yet");
            }
            write_lines(out, found)
        }
        Command::Date {
            history: HistoryArgs { history },
            date,
        } => {
            match History::load(history)?.on(*date) {
                Some(lucky) => writeln!(out, "{lucky}")?,
                None => log::warn!("No lucky number for {date}"),
            }
            Ok(())
        }
        Command::Prepare {
            pool,
            today,
            output,
            date_pattern,
        } => {
            let picker = DatePicker::new(date_pattern)?;
            let history = History::load(&pool.history)?;
            let candidates = history.draw_pool(pool.max, random);
            let mut dates = week::next_week_dates(
                history.last().map(|n| n.date),
                today.unwrap_or(now.date()),
            );
            if dates.len() > candidates.len() {
                log::warn!(
                    "Only {} numbers left for {} days",
                    candidates.len(),
                    dates.len()
                );
                dates.truncate(candidates.len());
            }
            let candidates = candidates.iter().map(u16::to_string).collect();
            let form = LuckyForm::for_week(&dates, candidates, &picker);
            match output {
                Some(path) => form.save(path),
                None => {
                    writeln!(out, "{}", form.to_json()?)?;
                    Ok(())
                }
            }
        }
        Command::Current(args) => {
            let (history, now) = load_for(args, now)?;
            match history.current(args.change_hour, now) {
                Some(lucky) => writeln!(out, "{lucky}")?,
                None => log::warn!("No lucky number from {} on", now.date()),
            }
            Ok(())
        }
        Command::Week(args) => {
            let (history, now) = load_for(args, now)?;
            write_lines(out, history.current_week(args.change_hour, now))
        }
    }
}

fn write_numbers(out: &mut impl Write, numbers: &[u16]) -> Result<()> {
    let line: Vec<String> = numbers.iter().map(u16::to_string).collect();
    writeln!(out, "{}", line.join(" "))?;
    Ok(())
}

fn write_lines<T: Display>(out: &mut impl Write, lines: impl IntoIterator<Item = T>) -> Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn update_form(args: &FormArgs, action: impl FnOnce(&mut LuckyForm)) -> Result<()> {
    let picker = DatePicker::new(&args.date_pattern)?;
    let mut form = LuckyForm::load(&args.form)?;
    for attached in picker.attach(&form) {
        if let Err(error) = attached.selected() {
            log::warn!("{error:#}");
        }
    }
    action(&mut form);
    form.save(args.output.as_deref().unwrap_or(&args.form))
}

fn record(form_path: &Path, history_path: &Path, picker: &DatePicker) -> Result<()> {
    let entries = LuckyForm::load(form_path)?.entries(picker)?;
    let mut history = if history_path.exists() {
        History::load(history_path)?
    } else {
        log::info!("Starting new history {}", history_path.display());
        History::default()
    };
    let added = history.add(&entries)?;
    if added == 0 {
        log::warn!("No lucky number has been added!");
        return Ok(());
    }
    history.save(history_path)?;
    log::info!("{added} lucky numbers have been added");
    Ok(())
}

fn load_for(args: &NowArgs, now: NaiveDateTime) -> Result<(History, NaiveDateTime)> {
    Ok((History::load(&args.history)?, args.now.unwrap_or(now)))
}
