mod cli;
mod logging;

use std::fs;
use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use bikram_date::{
    events_on, format_ad_long, format_bs, format_bs_long, is_holiday, parse_ymd,
    to_nepali_numeral, Calendar, CalendarTable, ConversionResult, Converter, EpochAnchor, Event,
    Language, MonthDay, Weekday,
};
use clap::Parser;
use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, Command};

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    result: &'a ConversionResult,
    events: &'static [Event],
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let table = load_table(cli.table.as_deref())?;
    let converter = Converter::new(&table, EpochAnchor::DEFAULT)
        .context("calendar table does not cover the epoch anchor")?;

    match &cli.command {
        Command::Ad { date } => convert_and_print(&converter, Calendar::Ad, date, cli),
        Command::Bs { date } => convert_and_print(&converter, Calendar::Bs, date, cli),
        Command::Month { year, month } => {
            let days = converter.bs_month_days(*year, *month)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&days)?);
            } else {
                print_month(&days, cli.lang);
            }
            Ok(())
        }
    }
}

fn load_table(path: Option<&Path>) -> Result<CalendarTable> {
    let Some(path) = path else {
        return Ok(CalendarTable::builtin().clone());
    };
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read calendar table {}", path.display()))?;
    let table = CalendarTable::from_json(&json)
        .with_context(|| format!("invalid calendar table {}", path.display()))?;
    info!(
        version = table.version(),
        min_year = table.min_year(),
        max_year = table.max_year(),
        "loaded calendar table"
    );
    Ok(table)
}

fn convert_and_print(
    converter: &Converter<'_>,
    source: Calendar,
    date: &str,
    cli: &Cli,
) -> Result<()> {
    let (year, month, day) = parse_ymd(date)?;
    let result = converter.convert(source, year, month, day)?;
    let events = events_on(&result.bs);

    if cli.json {
        let report = Report {
            result: &result,
            events,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("AD:  {} ({})", result.ad, format_ad_long(&result.ad));
    println!(
        "BS:  {} ({})",
        format_bs(&result.bs, cli.lang),
        format_bs_long(&result.bs, cli.lang)
    );
    println!("Day: {}", weekday_name(result.weekday, cli.lang));
    for event in events {
        let name = match cli.lang {
            Language::En => event.name,
            Language::Np => event.name_np,
        };
        let holiday = if event.is_holiday { " (holiday)" } else { "" };
        println!("     {name}{holiday}: {}", event.description);
    }
    Ok(())
}

fn print_month(days: &[MonthDay], lang: Language) {
    for day in days {
        let bs_day = match lang {
            Language::En => day.bs.day().to_string(),
            Language::Np => to_nepali_numeral(u32::from(day.bs.day())),
        };
        let marker = if is_holiday(&day.bs) { "*" } else { "" };
        println!(
            "{bs_day:>3}{marker:1}  {}  {}",
            day.ad,
            weekday_name(day.weekday, lang)
        );
    }
}

const fn weekday_name(weekday: Weekday, lang: Language) -> &'static str {
    match lang {
        Language::En => weekday.name_en(),
        Language::Np => weekday.name_np(),
    }
}
