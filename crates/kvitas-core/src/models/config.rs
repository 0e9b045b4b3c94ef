//! Configuration structures for the kvitas pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{KvitasError, Result};

/// Main configuration for the kvitas tools.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KvitasConfig {
    /// Extraction configuration.
    pub extraction: ExtractionConfig,

    /// Output configuration.
    pub output: OutputConfig,
}

/// Extraction configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Fixed fallback date for receipts without a parseable date, useful
    /// for reproducible runs. When unset, the fallback is the current date
    /// at parse time.
    pub fallback_date: Option<NaiveDate>,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format ("json", "csv" or "text").
    pub format: String,

    /// Pretty-print JSON output.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "json".to_string(),
            pretty: true,
        }
    }
}

impl KvitasConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| KvitasError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| KvitasError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KvitasConfig::default();
        assert_eq!(config.output.format, "json");
        assert!(config.output.pretty);
        assert!(config.extraction.fallback_date.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: KvitasConfig =
            serde_json::from_str(r#"{"extraction": {"fallback_date": "2024-06-01"}}"#).unwrap();

        assert_eq!(
            config.extraction.fallback_date,
            NaiveDate::from_ymd_opt(2024, 6, 1)
        );
        assert_eq!(config.output.format, "json");
    }
}
