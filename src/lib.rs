//! punchclock library root.
//! Exposes the punch ledger, the balance calculator, the storage boundary,
//! the CLI parser and the high-level run() function.

pub mod cli;
pub mod clock;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod storage;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command),
        Commands::Punch => cli::commands::punch::handle(cli, cfg),
        Commands::Status => cli::commands::status::handle(cli, cfg),
        Commands::History { .. } => cli::commands::history::handle(cli, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(cli, cfg),
        Commands::Export { .. } => cli::commands::export::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ logging
    utils::init_tracing();

    // 2️⃣ parse CLI
    let cli = Cli::parse();

    // 3️⃣ load config once (not needed for init, which writes it)
    let mut cfg = match cli.command {
        Commands::Init => Config::default(),
        _ => Config::load()?,
    };

    // 4️⃣ store override from the command line
    if let Some(custom_store) = &cli.store {
        cfg.store = Config::resolve_store_path(custom_store)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
