use std::path::PathBuf;

use bikram_date::Language;
use clap::{Parser, Subcommand};

/// Convert dates between the Gregorian (AD) and Bikram Sambat (BS) calendars.
#[derive(Parser)]
#[command(
    name = "bsdate",
    version,
    about = "Convert dates between AD and Bikram Sambat"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Language for names and numerals (en, np).
    #[arg(short, long, global = true, default_value = "en")]
    pub lang: Language,

    /// JSON calendar table to use instead of the built-in one.
    #[arg(long, global = true)]
    pub table: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert a Gregorian date (YYYY-MM-DD) to BS.
    Ad {
        /// Gregorian date, e.g. 2025-02-24
        date: String,
    },
    /// Convert a BS date (YYYY-MM-DD) to Gregorian.
    Bs {
        /// Bikram Sambat date, e.g. 2081-11-12
        date: String,
    },
    /// List every day of a BS month with its Gregorian date.
    Month {
        /// BS year
        year: u16,
        /// BS month, 1 (Baishakh) to 12 (Chaitra)
        month: u8,
    },
}
