use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            ConfigLogic::print(&path)?;
        }

        if *edit_config {
            ConfigLogic::edit(&path, editor)?;
        }

        if !*print_config && !*edit_config {
            warning("Nothing to do: use --print or --edit.");
        }
    }

    Ok(())
}
