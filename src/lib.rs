#![doc(test(attr(deny(warnings))))]

//! Bank Core models savings and checking accounts with per-variant deposit
//! and withdrawal rules, plus a reporting layer and a small demo scenario.

pub mod accounts;
pub mod cli;
pub mod config;
pub mod errors;
pub mod report;
pub mod scenario;
pub mod utils;

/// Initializes global tracing with the default filter. Logs only when this
/// call installed the subscriber.
pub fn init() {
    if utils::init_tracing(utils::DEFAULT_LOG_FILTER) {
        tracing::info!("Bank Core tracing initialized.");
    }
}

#[cfg(test)]
mod tests {
    use crate::utils;

    #[test]
    fn init_shares_the_tracing_guard() {
        super::init();
        assert!(!utils::init_tracing("bank_core=debug"));
        super::init();
    }
}
