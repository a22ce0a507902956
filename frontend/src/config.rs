use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::model::Period;
use crate::viewport::LayoutMode;

/// `localStorage` key holding optional overrides for [`DashboardConfig`].
pub const SETTINGS_KEY: &str = "statistics_settings";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub currency_symbol: String,
    pub tooltip_currency_symbol: String,
    /// Prefix of the sidebar balance, which is kept in hryvnia.
    pub balance_currency_symbol: String,
    /// Widths at or below this many CSS pixels use the narrow layout.
    pub narrow_breakpoint: u32,
    pub default_month: String,
    pub default_year: String,
    pub years: Vec<String>,
    pub log_directive: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "€".to_string(),
            tooltip_currency_symbol: "₹".to_string(),
            balance_currency_symbol: "₴".to_string(),
            narrow_breakpoint: 768,
            default_month: "September".to_string(),
            default_year: "2025".to_string(),
            years: (2020..=2025).map(|year| year.to_string()).collect(),
            log_directive: "wallet_stats=info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.narrow_breakpoint == 0 {
            return Err(ConfigError::Breakpoint);
        }
        EnvFilter::try_new(&self.log_directive)
            .map_err(|_| ConfigError::LogDirective(self.log_directive.clone()))?;
        Ok(())
    }

    /// Reads overrides from browser storage. `Ok(None)` when nothing is stored
    /// or there is no browser window.
    pub fn load_stored() -> Result<Option<Self>, ConfigError> {
        if let Some(window) = web_sys::window() {
            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(raw)) = storage.get_item(SETTINGS_KEY) {
                    return Self::from_json(&raw).map(Some);
                }
            }
        }
        Ok(None)
    }

    pub fn default_period(&self) -> Period {
        Period::new(self.default_month.clone(), self.default_year.clone())
    }

    pub fn layout_for(&self, viewport_width: f64) -> LayoutMode {
        LayoutMode::from_width(viewport_width, self.narrow_breakpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_statistics_screen() {
        let config = DashboardConfig::default();
        assert_eq!(config.default_period(), Period::new("September", "2025"));
        assert_eq!(config.years.first().map(String::as_str), Some("2020"));
        assert_eq!(config.years.last().map(String::as_str), Some("2025"));
        assert_eq!(config.narrow_breakpoint, 768);
    }

    #[test]
    fn balance_has_its_own_symbol() {
        let config = DashboardConfig::default();
        assert_eq!(config.balance_currency_symbol, "₴");
        assert_eq!(config.currency_symbol, "€");

        let config = DashboardConfig::from_json(r#"{"currency_symbol":"$"}"#).unwrap();
        assert_eq!(config.balance_currency_symbol, "₴");
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config =
            DashboardConfig::from_json(r#"{"currency_symbol":"$","narrow_breakpoint":600}"#)
                .unwrap();
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.narrow_breakpoint, 600);
        assert_eq!(config.default_month, "September");
    }

    #[test]
    fn rejects_zero_breakpoint_and_bad_json() {
        assert!(matches!(
            DashboardConfig::from_json(r#"{"narrow_breakpoint":0}"#),
            Err(ConfigError::Breakpoint)
        ));
        assert!(matches!(
            DashboardConfig::from_json("{not json"),
            Err(ConfigError::Decode(_))
        ));
    }

    #[test]
    fn rejects_malformed_log_directive() {
        assert!(matches!(
            DashboardConfig::from_json(r#"{"log_directive":"wallet_stats=loud"}"#),
            Err(ConfigError::LogDirective(_))
        ));
    }

    #[test]
    fn layout_switches_at_breakpoint() {
        let config = DashboardConfig::default();
        assert_eq!(config.layout_for(768.0), LayoutMode::Narrow);
        assert_eq!(config.layout_for(769.0), LayoutMode::Wide);
    }
}
