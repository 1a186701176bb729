//! worktime library root.
//! Exposes the session log engine, its store, the CLI parser and `run()`.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use crate::core::{Clock, ManualClock, SessionLog, SystemClock};
pub use crate::store::{CsvStore, MemoryStore, SessionStore};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if cli.start {
        return cli::commands::clock::clock_in(cfg);
    }
    if cli.stop {
        return cli::commands::clock::clock_out(cfg);
    }

    match &cli.command {
        None | Some(Commands::Status) => cli::commands::status::handle(cfg),
        Some(Commands::Init) => cli::commands::init::handle(cfg),
        Some(Commands::Toggle) => cli::commands::clock::toggle(cfg),
        Some(cmd @ Commands::Stats { days, json, .. }) => {
            cli::commands::stats::handle(cfg, *days, cmd.today_override(), *json)
        }
        Some(Commands::Edit { editor }) => cli::commands::edit::handle(cfg, editor.as_deref()),
        Some(Commands::Config {
            print_config,
            edit_config,
            editor,
        }) => cli::commands::config::handle(cfg, *print_config, *edit_config, editor.as_deref()),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI, usage errors exit here before any file is touched
    let cli = Cli::parse();
    cli.validate();

    utils::logging::init_logging(cli.verbose);

    // 2️⃣ load config once, command-line overrides win
    let cfg = Config::load()?.with_overrides(cli.log_file.as_deref(), cli.hours_per_day);
    tracing::debug!(?cfg, "configuration loaded");

    // 3️⃣ dispatch
    dispatch(&cli, &cfg)
}
