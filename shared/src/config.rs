use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tunables for the profile form.
///
/// Every field has a default, so a partial JSON document only needs to name
/// the values it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Simulated latency between an accepted submit and the display update
    pub submit_delay_ms: u64,
    /// How long the success toast stays on screen
    pub toast_duration_ms: u64,
    /// Phone input is truncated to this many digits
    pub phone_digits: usize,
    /// Minimum trimmed length for first and last name
    pub name_min_len: usize,
    /// Prefix shown in front of the phone number (never stored)
    pub country_code: String,
    /// chrono format string applied to the date of birth on submit
    pub date_display_format: String,
    /// Console log level for the browser logger
    pub log_level: String,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 3000,
            toast_duration_ms: 3000,
            phone_digits: 10,
            name_min_len: 2,
            country_code: "+91".to_string(),
            date_display_format: "%d/%b/%Y".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl FormConfig {
    /// Parse a (possibly partial) JSON config over the defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Parsed log level, falling back to `Info` on anything unrecognized
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FormConfig::default();
        assert_eq!(config.submit_delay(), Duration::from_secs(3));
        assert_eq!(config.toast_duration(), Duration::from_secs(3));
        assert_eq!(config.phone_digits, 10);
        assert_eq!(config.name_min_len, 2);
        assert_eq!(config.country_code, "+91");
        assert_eq!(config.date_display_format, "%d/%b/%Y");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config =
            FormConfig::from_json(r#"{"submit_delay_ms": 10, "log_level": "debug"}"#).unwrap();
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.log_level_filter(), log::LevelFilter::Debug);
        assert_eq!(config.phone_digits, 10);
        assert_eq!(config.country_code, "+91");
    }

    #[test]
    fn test_bad_log_level_falls_back_to_info() {
        let config = FormConfig {
            log_level: "chatty".to_string(),
            ..FormConfig::default()
        };
        assert_eq!(config.log_level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(FormConfig::from_json("{ not json").is_err());
    }
}
