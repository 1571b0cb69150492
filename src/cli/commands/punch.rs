use crate::cli::commands::open_session;
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::colorize_balance;
use crate::utils::minutes_to_hm;

/// Record the next punch of the day.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let mut session = open_session(cli, cfg)?;

    let punch = session.punch()?;
    success(format!("{} recorded at {}.", punch.kind.label(), punch.time));

    let stats = session.stats();
    println!(
        "Worked: {} | Balance: {}",
        minutes_to_hm(stats.minutes_worked),
        colorize_balance(&minutes_to_hm(stats.balance), stats.balance)
    );

    Ok(())
}
