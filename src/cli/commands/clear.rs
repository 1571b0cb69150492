use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{confirm, info, success, warning};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = &cli.command {
        let mut session = open_session(cli, cfg)?;

        if !*yes {
            warning("This removes every punch recorded today. History is kept.");
            if !confirm("Clear today's punches?") {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        session.clear()?;
        success("Today's punches have been cleared.");
    }

    Ok(())
}
