use crate::cli::commands::open_session;
use crate::cli::parser::Cli;
use crate::clock::Clock;
use crate::config::Config;
use crate::core::calculator::timeline::{Period, build_timeline};
use crate::errors::AppResult;
use crate::models::punch::PunchEvent;
use crate::ui::messages::header;
use crate::utils::colors::{colorize_balance, dimmed};
use crate::utils::date::long_date_label;
use crate::utils::formatting::{capitalize_first, pad_right};
use crate::utils::minutes_to_hm;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let session = open_session(cli, cfg)?;
    let now = session.clock().now();

    // clock line
    header(format!(
        "{} {}",
        now.format("%H:%M:%S"),
        capitalize_first(&long_date_label(now.date_naive()))
    ));

    print_punches(session.today_punches());
    print_periods(&build_timeline(session.today_punches()).periods);

    let stats = session.stats();
    println!();
    println!("Worked today    : {}", minutes_to_hm(stats.minutes_worked));
    println!(
        "Balance today   : {}",
        colorize_balance(&minutes_to_hm(stats.balance), stats.balance)
    );
    println!(
        "Balance of month: {}",
        colorize_balance(&minutes_to_hm(stats.monthly_balance), stats.monthly_balance)
    );

    Ok(())
}

/// Newest first, as recorded.
fn print_punches(punches: &[PunchEvent]) {
    if punches.is_empty() {
        println!("{}", dimmed("No punches today."));
        return;
    }

    for p in punches {
        println!("  {} {}", pad_right(p.kind.label(), 12), p.time);
    }
}

/// Work periods, oldest first. An open period shows no end.
fn print_periods(periods: &[Period]) {
    if periods.is_empty() {
        return;
    }

    println!();
    for period in periods {
        match &period.close {
            Some(close) => println!(
                "  {} → {}  {}",
                period.open.time,
                close.time,
                minutes_to_hm(period.duration_minutes)
            ),
            None => println!("  {} → {}", period.open.time, dimmed("open")),
        }
    }
}
