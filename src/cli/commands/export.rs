use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = &cli.command
    {
        let session = open_session(cli, cfg)?;
        let report = session.report();

        let path = ExportLogic::resolve_path(&report, format, file.as_deref(), &cfg.report_dir);
        ExportLogic::export(&report, format, &path, *force)?;
    }
    Ok(())
}
