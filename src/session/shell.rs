//! Grammar of the commands accepted inside a session.

use crate::export::{ExportFormat, ExportSheet};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "session",
    no_binary_name = true,
    disable_version_flag = true,
    about = "Session commands (one per line)"
)]
pub struct ShellCli {
    #[command(subcommand)]
    pub command: ShellCommand,
}

#[derive(Subcommand, Debug)]
pub enum ShellCommand {
    /// Record a punch (entry, lunch_out, lunch_in, exit, extra_N)
    Punch {
        kind: String,

        #[arg(long, help = "Date of the punch (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long, help = "Time of the punch (HH:MM[:SS], default now)")]
        time: Option<String>,
    },

    /// List raw punches
    Events {
        #[arg(long, help = "Only punches of this date (YYYY-MM-DD)")]
        date: Option<String>,
    },

    /// Show the daily card (punch times, lunch and total hours)
    Day {
        #[arg(long, help = "Date (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Show hours since the start of the week
    Week {
        #[arg(long, help = "Week start (YYYY-MM-DD, default most recent Monday)")]
        from: Option<String>,
    },

    /// Show monthly hours and contract apportionment
    Month {
        #[arg(long, help = "Month number 1-12 (default current month)")]
        month: Option<u32>,

        #[arg(long, help = "Year (default current year)")]
        year: Option<i32>,
    },

    /// Export punches or the daily summary
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, value_enum, default_value = "events")]
        sheet: ExportSheet,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Show the logged-in account
    Whoami,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

/// Parse one input line into a session command.
pub fn parse_line(line: &str) -> Result<ShellCli, clap::Error> {
    ShellCli::try_parse_from(line.split_whitespace())
}
