//! The single controller owning the ledger state.
//!
//! Load once on `open`, then write back right after every mutation
//! (punch, clear, archival). There are no deferred writes.

use crate::clock::Clock;
use crate::core::calculator::{compute_daily, compute_monthly_balance, timeline};
use crate::core::ledger::{self, LedgerState};
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::models::day_summary::{DailyStats, TodayStats};
use crate::models::punch::PunchEvent;
use crate::storage::{
    KEY_HISTORY, KEY_TODAY_DATE, KEY_TODAY_PUNCHES, KeyValueStore, load_json, save_json,
};

/// Data handed to the report generator.
#[derive(Debug, Clone)]
pub struct ReportData {
    pub date_key: String,
    pub punches: Vec<PunchEvent>, // oldest first
    pub stats: DailyStats,
}

pub struct Session<S: KeyValueStore, C: Clock> {
    store: S,
    clock: C,
    state: LedgerState,
}

impl<S: KeyValueStore, C: Clock> Session<S, C> {
    /// Loads the persisted ledger and performs the day rollover if the
    /// stored day is not today.
    pub fn open(mut store: S, clock: C) -> AppResult<Self> {
        let today_key = clock.today_key();

        let persisted_today: Option<Vec<PunchEvent>> = load_json(&store, KEY_TODAY_PUNCHES);
        let persisted_key = store.get(KEY_TODAY_DATE);
        let persisted_history: Option<Vec<DayRecord>> = load_json(&store, KEY_HISTORY);

        let same_day =
            persisted_today.is_some() && persisted_key.as_deref() == Some(today_key.as_str());
        let history_len = persisted_history.as_ref().map_or(0, Vec::len);

        let state = ledger::initialize(
            persisted_today,
            persisted_key.clone(),
            persisted_history,
            &today_key,
        );

        if !same_day {
            // 1. history first, so an archived day is never lost
            if state.history.len() != history_len {
                save_json(&mut store, KEY_HISTORY, &state.history)?;
            }

            // 2. drop the stale list and point at today
            store.remove(KEY_TODAY_PUNCHES)?;
            if persisted_key.as_deref() != Some(today_key.as_str()) {
                store.set(KEY_TODAY_DATE, &today_key)?;
            }

            tracing::debug!(today = %today_key, "ledger reset for a new day");
        }

        Ok(Self {
            store,
            clock,
            state,
        })
    }

    /// Records the next punch and persists today's list.
    pub fn punch(&mut self) -> AppResult<PunchEvent> {
        let punch = ledger::add_punch(&mut self.state.today_punches, self.clock.now());
        self.persist_today()?;

        tracing::info!(id = punch.id, kind = punch.kind.label(), "punch recorded");
        Ok(punch)
    }

    /// Empties today's list. Confirmation is the caller's business.
    pub fn clear(&mut self) -> AppResult<()> {
        ledger::clear_today(&mut self.state.today_punches);
        self.persist_today()?;

        tracing::info!(date = %self.state.date_key, "today's punches cleared");
        Ok(())
    }

    pub fn stats(&self) -> TodayStats {
        let daily = compute_daily(&self.state.today_punches);
        let monthly = compute_monthly_balance(
            daily.balance,
            &self.state.history,
            self.clock.now().date_naive(),
        );

        TodayStats {
            minutes_worked: daily.minutes_worked,
            balance: daily.balance,
            monthly_balance: monthly,
        }
    }

    pub fn report(&self) -> ReportData {
        ReportData {
            date_key: self.state.date_key.clone(),
            punches: timeline::chronological(&self.state.today_punches),
            stats: compute_daily(&self.state.today_punches),
        }
    }

    pub fn today_punches(&self) -> &[PunchEvent] {
        &self.state.today_punches
    }

    pub fn history(&self) -> &[DayRecord] {
        &self.state.history
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn persist_today(&mut self) -> AppResult<()> {
        save_json(&mut self.store, KEY_TODAY_PUNCHES, &self.state.today_punches)?;
        self.store.set(KEY_TODAY_DATE, &self.state.date_key)
    }
}
