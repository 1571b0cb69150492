pub mod calculator;
pub mod config;
pub mod ledger;
pub mod session;
