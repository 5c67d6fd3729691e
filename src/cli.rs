use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
pub use clap::Parser;
use clap::{Args, Subcommand};

use crate::{date_picker::DEFAULT_PATTERN, history::DEFAULT_CHANGE_HOUR};

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shuffle the unused numbers into the form's lucky number fields
    Draw(FormArgs),

    /// Empty the form's lucky number fields
    Clear(FormArgs),

    /// Add the form's filled in rows to the history
    Record {
        /// JSON file with the form fields
        #[arg(short, long)]
        form: PathBuf,

        /// JSON file with lucky numbers drawn so far, created if missing
        #[arg(long)]
        history: PathBuf,

        /// Display pattern of the date fields
        #[arg(long, default_value = DEFAULT_PATTERN)]
        date_pattern: String,
    },

    /// List numbers not drawn yet in the current round
    Left(PoolArgs),

    /// List numbers not drawn yet in the current round in random order
    Pool(PoolArgs),

    /// List every lucky number drawn so far
    All(HistoryArgs),

    /// List the dates a number was drawn on
    Search {
        #[command(flatten)]
        history: HistoryArgs,

        /// Number to look for
        number: u16,
    },

    /// Show the lucky number of a date
    Date {
        #[command(flatten)]
        history: HistoryArgs,

        /// e.g. 2010-03-02
        date: NaiveDate,
    },

    /// Create a form for the days following the most recent lucky number
    Prepare {
        #[command(flatten)]
        pool: PoolArgs,

        /// Day to start from when the history is empty [default: today]
        #[arg(long)]
        today: Option<NaiveDate>,

        /// Where to write the form [default: standard output]
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Display pattern of the date fields
        #[arg(long, default_value = DEFAULT_PATTERN)]
        date_pattern: String,
    },

    /// Show the current lucky number
    Current(NowArgs),

    /// Show the lucky numbers of the current week
    Week(NowArgs),
}

#[derive(Debug, Args)]
pub struct FormArgs {
    /// JSON file with the form fields and the unused numbers
    #[arg(short, long)]
    pub form: PathBuf,

    /// Where to write the updated form [default: overwrite --form]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Display pattern of the date fields
    #[arg(long, default_value = DEFAULT_PATTERN)]
    pub date_pattern: String,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    /// JSON file with lucky numbers drawn so far
    #[arg(long)]
    pub history: PathBuf,
}

#[derive(Debug, Args)]
pub struct PoolArgs {
    /// JSON file with lucky numbers drawn so far
    #[arg(long)]
    pub history: PathBuf,

    /// Highest number that can be drawn, usually the size of the largest class
    #[arg(short, long, value_parser = clap::value_parser!(u16).range(1..))]
    pub max: u16,
}

#[derive(Debug, Args)]
pub struct NowArgs {
    /// JSON file with lucky numbers drawn so far
    #[arg(long)]
    pub history: PathBuf,

    /// Hour after which the next day's number is shown
    #[arg(long, default_value_t = DEFAULT_CHANGE_HOUR, value_parser = clap::value_parser!(u32).range(0..24))]
    pub change_hour: u32,

    /// Point in time to look from, e.g. 2010-03-02T09:00:00 [default: now]
    #[arg(long)]
    pub now: Option<NaiveDateTime>,
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert()
}

#[test]
fn parse_draw() {
    let cli = Cli::parse_from(["lucky-draw", "draw", "--form", "form.json"]);

    match cli.command {
        Command::Draw(args) => {
            assert_eq!(args.form, PathBuf::from("form.json"));
            assert_eq!(args.output, None);
            assert_eq!(args.date_pattern, "dd/mm/yy");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn parse_search_and_date() {
    let search = Cli::parse_from(["lucky-draw", "search", "--history", "h.json", "7"]);
    let date = Cli::parse_from(["lucky-draw", "date", "2010-03-02", "--history", "h.json"]);

    assert!(matches!(search.command, Command::Search { number: 7, .. }));
    match date.command {
        Command::Date { history, date } => {
            assert_eq!(history.history, PathBuf::from("h.json"));
            assert_eq!(date, NaiveDate::from_ymd_opt(2010, 3, 2).unwrap());
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn parse_rejects_zero_max_and_late_change_hour() {
    assert!(Cli::try_parse_from(["lucky-draw", "left", "--history", "h.json", "--max", "0"]).is_err());
    assert!(
        Cli::try_parse_from(["lucky-draw", "current", "--history", "h.json", "--change-hour", "24"])
            .is_err()
    );
}
