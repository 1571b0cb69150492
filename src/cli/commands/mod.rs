pub mod clear;
pub mod config;
pub mod export;
pub mod history;
pub mod init;
pub mod punch;
pub mod status;

use crate::cli::parser::Cli;
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::config::Config;
use crate::core::session::Session;
use crate::errors::{AppError, AppResult};
use crate::storage::FileStore;
use crate::utils::date::parse_instant;

/// Clock for this invocation: pinned by `--now`, otherwise the device clock.
pub(crate) fn clock_from(cli: &Cli) -> AppResult<Box<dyn Clock>> {
    match &cli.now {
        Some(s) => {
            let at = parse_instant(s).ok_or_else(|| AppError::InvalidTime(s.clone()))?;
            Ok(Box::new(FixedClock(at)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}

/// Opens the session on the configured store (rollover included).
pub(crate) fn open_session(
    cli: &Cli,
    cfg: &Config,
) -> AppResult<Session<FileStore, Box<dyn Clock>>> {
    let store = FileStore::open(&cfg.store)?;
    Session::open(store, clock_from(cli)?)
}
