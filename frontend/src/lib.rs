//! Statistics screen of the Money Guard wallet: a month/year breakdown of
//! income and expenses, drawn as a donut chart beside a transaction table.

pub mod chart;
pub mod components;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod model;
pub mod statistics;
pub mod store;
pub mod view_model;
pub mod viewport;

use config::DashboardConfig;
use store::Store;

/// Loads settings and the store snapshot and installs tracing.
/// Anything that fails to decode is replaced by its default.
pub fn init() -> (DashboardConfig, Store) {
    let (config, config_err) = match DashboardConfig::load_stored() {
        Ok(stored) => (stored.unwrap_or_default(), None),
        Err(err) => (DashboardConfig::default(), Some(err)),
    };
    logging::init_tracing(&config.log_directive);
    if let Some(err) = config_err {
        tracing::warn!(%err, "using default statistics settings");
    }

    let store = Store::bundled().unwrap_or_else(|err| {
        tracing::warn!(%err, "starting with an empty store");
        Store::default()
    });
    tracing::info!(
        transactions = store.transactions.len(),
        breakpoint = config.narrow_breakpoint,
        "statistics screen initialized"
    );
    (config, store)
}
