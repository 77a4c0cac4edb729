#![warn(clippy::pedantic)]

use std::{
    env,
    fmt::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context;
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args as ClapArgs, Parser, Subcommand};
use console::style;
use human_panic::setup_panic;
use serde::Serialize;

use datesub::{config, date::timestamp_millis, DateInput, Duration};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = "~/.config/datesub/config.toml")]
    config_path: PathBuf,

    /// Output format
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Subtract a duration from a date
    Sub(ShiftArgs),

    /// Add a duration to a date
    Add(ShiftArgs),
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    /// The date formatted with the configured pattern
    Text,
    /// A JSON object with the date and its millisecond timestamp
    Json,
}

#[derive(Debug, ClapArgs)]
struct ShiftArgs {
    /// The date to shift, e.g. 2017-06-15T15:29:20 or 2017-06-15
    #[arg(allow_negative_numbers = true)]
    date: String,

    /// If set, reads the date as milliseconds since the Unix epoch
    #[arg(long)]
    timestamp: bool,

    #[command(flatten)]
    duration: DurationArgs,
}

#[derive(Debug, ClapArgs)]
struct DurationArgs {
    /// Years to shift by
    #[arg(long, allow_negative_numbers = true)]
    years: Option<i64>,

    /// Months to shift by
    #[arg(long, allow_negative_numbers = true)]
    months: Option<i64>,

    /// Weeks to shift by
    #[arg(long, allow_negative_numbers = true)]
    weeks: Option<i64>,

    /// Days to shift by
    #[arg(long, allow_negative_numbers = true)]
    days: Option<i64>,

    /// Hours to shift by
    #[arg(long, allow_negative_numbers = true)]
    hours: Option<i64>,

    /// Minutes to shift by
    #[arg(long, allow_negative_numbers = true)]
    minutes: Option<i64>,

    /// Seconds to shift by
    #[arg(long, allow_negative_numbers = true)]
    seconds: Option<i64>,
}

impl From<&DurationArgs> for Duration {
    fn from(args: &DurationArgs) -> Self {
        Self {
            years: args.years,
            months: args.months,
            weeks: args.weeks,
            days: args.days,
            hours: args.hours,
            minutes: args.minutes,
            seconds: args.seconds,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonOutput {
    date: String,
    timestamp: i64,
}

fn expand_homedir(path: &Path) -> anyhow::Result<PathBuf> {
    Ok(path
        .to_string_lossy()
        .replace('~', &env::var("HOME")?)
        .into())
}

fn parse_date(input: &str, is_timestamp: bool) -> anyhow::Result<DateInput> {
    if is_timestamp {
        let millis: i64 = input
            .parse()
            .with_context(|| format!("could not parse timestamp '{input}'"))?;
        return Ok(DateInput::from(millis));
    }

    if let Ok(date) = input.parse::<NaiveDateTime>() {
        return Ok(DateInput::from(date));
    }
    let date: NaiveDate = input
        .parse()
        .with_context(|| format!("could not parse date '{input}'"))?;
    Ok(DateInput::from(date))
}

fn shift(command: &Command, defaults: &Duration) -> anyhow::Result<NaiveDateTime> {
    let (shift_args, is_subtraction) = match command {
        Command::Sub(shift_args) => (shift_args, true),
        Command::Add(shift_args) => (shift_args, false),
    };

    let date = parse_date(&shift_args.date, shift_args.timestamp)?;
    let duration = Duration::from(&shift_args.duration).or(defaults);
    log::debug!("Shifting {date:?} by {duration:?}...");

    let shifted = if is_subtraction {
        datesub::sub(date, &duration)
    } else {
        datesub::add(date, &duration)
    };
    shifted.with_context(|| format!("could not shift {} by {duration:?}", shift_args.date))
}

fn main() -> anyhow::Result<()> {
    setup_panic!();
    env_logger::init();

    log::debug!("Parsing command line arguments...");
    let args = Args::parse();
    log::trace!("Parsed command line arguments: {args:#?}");

    let config_path = expand_homedir(&args.config_path)?;
    let config = config::load(&config_path)?;

    let result = shift(&args.command, &config.defaults)?;

    let mut formatted = String::new();
    write!(formatted, "{}", result.format(&config.output.format)).map_err(|_| {
        anyhow::anyhow!(
            "invalid output format '{}' in configuration",
            config.output.format
        )
    })?;
    let timestamp = timestamp_millis(result);

    match args.format {
        OutputFormat::Text if config.output.timestamp => {
            println!("{formatted} {}", style(format!("({timestamp})")).dim());
        }
        OutputFormat::Text => println!("{formatted}"),
        OutputFormat::Json => println!(
            "{}",
            serde_json::to_string(&JsonOutput {
                date: formatted,
                timestamp,
            })
            .context("could not serialize result")?
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_date_times() {
        let date = parse_date("2017-06-15T15:29:20", false).unwrap();
        let expected = NaiveDate::from_ymd_opt(2017, 6, 15)
            .unwrap()
            .and_hms_opt(15, 29, 20)
            .unwrap();
        assert_eq!(date, DateInput::DateTime(expected));
    }

    #[test]
    fn parses_plain_dates_as_midnight() {
        let date = parse_date("2020-03-31", false).unwrap();
        let expected = NaiveDate::from_ymd_opt(2020, 3, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(date, DateInput::DateTime(expected));
    }

    #[test]
    fn parses_timestamps() {
        assert_eq!(
            parse_date("-86400000", true).unwrap(),
            DateInput::Timestamp(-86_400_000)
        );
        assert!(parse_date("2020-03-31", true).is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_date("next tuesday", false).is_err());
    }

    #[test]
    fn shifts_with_the_chosen_direction() {
        let expected = NaiveDate::from_ymd_opt(2019, 12, 31)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let args = Args::parse_from(["datesub", "sub", "2020-01-01", "--days", "1"]);
        assert_eq!(shift(&args.command, &Duration::default()).unwrap(), expected);
        let args = Args::parse_from(["datesub", "add", "2020-01-01", "--days", "-1"]);
        assert_eq!(shift(&args.command, &Duration::default()).unwrap(), expected);
    }

    #[test]
    fn out_of_range_shifts_are_errors() {
        let args = Args::parse_from(["datesub", "sub", "2020-01-01", "--years", "999999999"]);
        let err = shift(&args.command, &Duration::default()).unwrap_err();
        assert!(err.to_string().starts_with("could not shift 2020-01-01"));
        assert_eq!(
            err.downcast_ref::<datesub::Error>(),
            Some(&datesub::Error::OutOfRange {
                unit: datesub::error::Unit::Months,
                amount: 11_999_999_988,
            })
        );
    }

    #[test]
    fn command_line_fields_override_defaults() {
        let args = Args::parse_from([
            "datesub", "sub", "2020-01-01", "--days", "-1", "--hours", "3",
        ]);
        let Command::Sub(shift_args) = args.command else {
            panic!("expected the sub command");
        };
        let defaults = Duration::new().days(5).minutes(30);
        assert_eq!(
            Duration::from(&shift_args.duration).or(&defaults),
            Duration::new().days(-1).hours(3).minutes(30)
        );
    }
}
