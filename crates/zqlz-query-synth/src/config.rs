//! Synthesis configuration

use serde::{Deserialize, Serialize};
use zqlz_core::{Result, ZqlzError};

use crate::history::DEFAULT_HISTORY_LIMIT;

/// Default number of output characters attached to trace events
pub const DEFAULT_LOG_PREVIEW_CHARS: usize = 100;

/// Configuration for a [`Workbench`](crate::Workbench) and its synthesizer
///
/// None of these settings change the rendered text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthesisConfig {
    /// Maximum number of history entries kept
    pub history_limit: usize,
    /// Characters of output included in trace-level previews
    pub log_preview_chars: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            log_preview_chars: DEFAULT_LOG_PREVIEW_CHARS,
        }
    }
}

impl SynthesisConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the history cap
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the trace preview length
    pub fn with_log_preview_chars(mut self, chars: usize) -> Self {
        self.log_preview_chars = chars;
        self
    }

    /// Parse and validate a JSON config; missing keys take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.history_limit == 0 {
            return Err(ZqlzError::Configuration(
                "history_limit must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SynthesisConfig::default();
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.log_preview_chars, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = SynthesisConfig::new()
            .with_history_limit(25)
            .with_log_preview_chars(40);
        assert_eq!(config.history_limit, 25);
        assert_eq!(config.log_preview_chars, 40);
    }

    #[test]
    fn test_from_json_partial() {
        let config = SynthesisConfig::from_json(r#"{ "history_limit": 3 }"#).unwrap();
        assert_eq!(config.history_limit, 3);
        assert_eq!(config.log_preview_chars, DEFAULT_LOG_PREVIEW_CHARS);
    }

    #[test]
    fn test_from_json_rejects_zero_limit() {
        assert!(matches!(
            SynthesisConfig::from_json(r#"{ "history_limit": 0 }"#),
            Err(ZqlzError::Configuration(_))
        ));
        assert!(matches!(
            SynthesisConfig::from_json("not json"),
            Err(ZqlzError::Serialization(_))
        ));
    }
}
