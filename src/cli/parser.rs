use crate::export::ExportFormat;
use crate::models::ScheduleKind;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimetable
#[derive(Parser)]
#[command(
    name = "rtimetable",
    version = env!("CARGO_PKG_VERSION"),
    about = "Format free-text branch/ATM opening hours into collapsed weekly timetables",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration file
    Init,

    /// Inspect the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "List settings missing from the configuration file")]
        check: bool,
    },

    /// Print today's row and the weekly rows for every schedule kind
    Show {
        #[arg(long, short, value_name = "FILE", help = "Location JSON (object or array)")]
        location: String,

        #[arg(long, short, value_enum, help = "Schedule kind(s) to show (default: all)")]
        kind: Vec<ScheduleKind>,

        #[arg(long, value_name = "DAY", help = "Pretend today is DAY (Mon..Sun)")]
        today: Option<String>,

        #[arg(long, help = "Label for today's row (default from config)")]
        label: Option<String>,

        #[arg(long, help = "Render the weekly rows as an aligned table")]
        table: bool,
    },

    /// Print today's row only
    Today {
        #[arg(long, short, value_name = "FILE")]
        location: String,

        #[arg(long, short, value_enum)]
        kind: ScheduleKind,

        #[arg(long, value_name = "DAY")]
        today: Option<String>,

        #[arg(long)]
        label: Option<String>,
    },

    /// Print the weekly rows only
    Timetable {
        #[arg(long, short, value_name = "FILE")]
        location: String,

        #[arg(long, short, value_enum)]
        kind: ScheduleKind,

        #[arg(long, value_name = "DAY")]
        today: Option<String>,
    },

    /// Export weekly rows of every location to CSV or JSON
    Export {
        #[arg(long, short, value_name = "FILE")]
        location: String,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, value_enum, help = "Schedule kind(s) to export (default: all)")]
        kind: Vec<ScheduleKind>,

        #[arg(long, value_name = "DAY")]
        today: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
