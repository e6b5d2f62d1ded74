use anyhow::{Context, Result};
use shared::FormConfig;

/// Config baked into the bundle at build time; omitted keys keep their defaults
const EMBEDDED_CONFIG: &str = include_str!("../../config.json");

pub fn parse_config(raw: &str) -> Result<FormConfig> {
    FormConfig::from_json(raw).context("Failed to parse form config JSON")
}

/// The embedded config, or the defaults if it does not parse.
///
/// Runs before the logger exists, so failures go straight to the console.
pub fn load_config() -> FormConfig {
    match parse_config(EMBEDDED_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            gloo::console::warn!(format!("{:#}; using defaults", e));
            FormConfig::default()
        }
    }
}
