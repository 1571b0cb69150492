use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for punchclock
#[derive(Parser)]
#[command(
    name = "punchclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time clock: punch in and out, track worked time and overtime balance",
    long_about = None
)]
pub struct Cli {
    /// Override the store path (useful for tests or a custom location)
    #[arg(global = true, long = "store")]
    pub store: Option<String>,

    /// Pin the clock to a given instant (RFC 3339 or YYYY-MM-DDTHH:MM)
    #[arg(global = true, long = "now", hide = true)]
    pub now: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the store
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use")]
        editor: Option<String>,
    },

    /// Record the next punch (entry, break start, break end, exit, extra)
    Punch,

    /// Show today's punches, worked time and balances
    Status,

    /// Show archived days and their balances
    History {
        #[arg(long, short, value_name = "YYYY-MM", help = "Only show days of this month")]
        month: Option<String>,
    },

    /// Clear today's punches
    Clear {
        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Export today's report
    Export {
        #[arg(long, value_enum, default_value = "pdf")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: punch_report_DD-MM-YYYY.<ext>)")]
        file: Option<String>,

        #[arg(long, short = 'f', help = "Overwrite an existing file without asking")]
        force: bool,
    },
}
