//! Clock source used by the session: current instant plus the daily key.

use crate::utils::date::date_key;
use chrono::{DateTime, Local};

pub trait Clock {
    fn now(&self) -> DateTime<Local>;

    /// Key of the current calendar day ("DD/MM/YYYY").
    fn today_key(&self) -> String {
        date_key(self.now().date_naive())
    }
}

/// Local device clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Clock pinned to a given instant (`--now`, tests).
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn now(&self) -> DateTime<Local> {
        (**self).now()
    }

    fn today_key(&self) -> String {
        (**self).today_key()
    }
}
