use crate::cli::commands::open_session;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::compute_monthly_balance;
use crate::core::calculator::monthly::in_month;
use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::utils::colors::{colorize_balance, dimmed};
use crate::utils::date::parse_month;
use crate::utils::minutes_to_hm;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::History { month } = &cli.command {
        let session = open_session(cli, cfg)?;

        let Some(m) = month else {
            print_days(session.history().iter());
            return Ok(());
        };

        let reference = parse_month(m).ok_or_else(|| AppError::InvalidDate(m.clone()))?;

        print_days(
            session
                .history()
                .iter()
                .filter(|d| in_month(&d.date, reference)),
        );

        // archived days only: today is not part of the history
        let total = compute_monthly_balance(0, session.history(), reference);
        println!(
            "\nTotal {}: {}",
            m,
            colorize_balance(&minutes_to_hm(total), total)
        );
    }

    Ok(())
}

fn print_days<'a>(days: impl Iterator<Item = &'a DayRecord>) {
    let mut any = false;
    for d in days {
        any = true;
        println!(
            "{}  {}",
            d.date,
            colorize_balance(&minutes_to_hm(d.balance), d.balance)
        );
    }

    if !any {
        println!("{}", dimmed("No archived days."));
    }
}
