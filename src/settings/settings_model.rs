use serde::{Deserialize, Serialize};

use crate::quotes::quotes_constants::{DEFAULT_MAX_QUOTE_AGE_MS, DEFAULT_POLL_INTERVAL_MS};

/// User settings. The polling cadence and staleness window live here so they
/// are configuration, not hidden constants.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub default_currency: String,
    pub show_notes: bool,
    pub auto_sync: bool,
    pub poll_interval_ms: u64,
    pub max_quote_age_ms: i64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_currency: "USD".to_string(),
            show_notes: true,
            auto_sync: true,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            max_quote_age_ms: DEFAULT_MAX_QUOTE_AGE_MS,
        }
    }
}

impl Settings {
    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms)
    }

    pub fn max_quote_age(&self) -> chrono::Duration {
        chrono::Duration::milliseconds(self.max_quote_age_ms)
    }

    pub fn apply(&mut self, update: &SettingsUpdate) {
        if let Some(ref currency) = update.default_currency {
            self.default_currency = currency.clone();
        }
        if let Some(show_notes) = update.show_notes {
            self.show_notes = show_notes;
        }
        if let Some(auto_sync) = update.auto_sync {
            self.auto_sync = auto_sync;
        }
        if let Some(poll_interval_ms) = update.poll_interval_ms {
            self.poll_interval_ms = poll_interval_ms;
        }
        if let Some(max_quote_age_ms) = update.max_quote_age_ms {
            self.max_quote_age_ms = max_quote_age_ms;
        }
    }
}

/// Partial update shape accepted from the presentation layer.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub default_currency: Option<String>,
    pub show_notes: Option<bool>,
    pub auto_sync: Option<bool>,
    pub poll_interval_ms: Option<u64>,
    pub max_quote_age_ms: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_a_fresh_install() {
        let settings = Settings::default();
        assert_eq!(settings.default_currency, "USD");
        assert!(settings.show_notes);
        assert!(settings.auto_sync);
        assert_eq!(settings.poll_interval_ms, 1_000);
        assert_eq!(settings.max_quote_age_ms, 300_000);
    }

    #[test]
    fn apply_only_touches_present_fields() {
        let mut settings = Settings::default();
        settings.apply(&SettingsUpdate {
            auto_sync: Some(false),
            ..Default::default()
        });
        assert!(!settings.auto_sync);
        assert_eq!(settings.default_currency, "USD");
    }

    #[test]
    fn parses_legacy_settings_without_interval_fields() {
        let settings: Settings =
            serde_json::from_str(r#"{"defaultCurrency":"EUR","showNotes":false,"autoSync":true}"#)
                .unwrap();
        assert_eq!(settings.default_currency, "EUR");
        assert!(!settings.show_notes);
        assert_eq!(settings.poll_interval_ms, 1_000);
    }
}
