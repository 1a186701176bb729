use clap::{ArgAction, CommandFactory, Parser, Subcommand, error::ErrorKind};

/// Command-line interface definition for worktime
#[derive(Parser, Debug)]
#[command(
    name = "worktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Clock in and out of work sessions and keep track of overtime in a CSV log",
    long_about = None
)]
pub struct Cli {
    /// Clock in now (same as pressing "Start")
    #[arg(long, conflicts_with = "stop")]
    pub start: bool,

    /// Clock out now (same as pressing "Stop")
    #[arg(long)]
    pub stop: bool,

    /// Override the session log path from the configuration
    #[arg(global = true, long = "log-file", value_name = "FILE")]
    pub log_file: Option<String>,

    /// Override the expected working hours per day
    #[arg(global = true, long = "hours-per-day", value_name = "HOURS")]
    pub hours_per_day: Option<f64>,

    /// Print diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(global = true, short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Write the configuration file and create an empty session log
    Init,

    /// Show worked time today, predicted end of day and extra hours (default)
    Status,

    /// Clock out when working, clock in otherwise
    Toggle,

    /// Show overtime per day for the most recent days
    Stats {
        /// Number of days to list (default: `summary_days` from the configuration)
        #[arg(long, short = 'n', value_name = "N")]
        days: Option<usize>,

        /// Include today, even though it is not finished yet
        #[arg(long = "include-today", conflicts_with = "exclude_today")]
        include_today: bool,

        /// Leave today out, even when the configuration includes it
        #[arg(long = "exclude-today")]
        exclude_today: bool,

        /// Print the statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the session log in a text editor
    Edit {
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },
}

impl Commands {
    /// `Some(true)` / `Some(false)` when `stats` was told explicitly,
    /// `None` to use the configured default.
    pub fn today_override(&self) -> Option<bool> {
        match self {
            Commands::Stats {
                include_today: true,
                ..
            } => Some(true),
            Commands::Stats {
                exclude_today: true,
                ..
            } => Some(false),
            _ => None,
        }
    }
}

impl Cli {
    /// `--start` / `--stop` select a one-shot action and cannot be combined
    /// with a subcommand. Exits with a usage error before anything is opened.
    pub fn validate(&self) {
        if (self.start || self.stop) && self.command.is_some() {
            Cli::command()
                .error(
                    ErrorKind::ArgumentConflict,
                    "--start/--stop cannot be used together with a subcommand",
                )
                .exit();
        }
    }
}
