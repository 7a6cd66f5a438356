//! Raw `[classifier]` TOML section

use serde::{Deserialize, Serialize};
use taste_application::ClassifierParams;

/// Classifier settings as they appear in the config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileClassifierConfig {
    /// Whether the AI fallback is consulted at all
    pub enabled: bool,
    /// Model identifier sent to the classifier endpoint
    pub model: String,
    /// Seconds to wait before falling back
    pub timeout_secs: u64,
    /// Base URL of the classifier API
    pub endpoint: String,
    /// API key; the `SPOT_TASTE_API_KEY` env var takes precedence
    pub api_key: String,
}

impl Default for FileClassifierConfig {
    fn default() -> Self {
        let params = ClassifierParams::default();
        Self {
            enabled: true,
            model: params.model,
            timeout_secs: params.timeout_secs,
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            api_key: String::new(),
        }
    }
}

impl FileClassifierConfig {
    /// Application-layer execution parameters derived from this section
    pub fn params(&self) -> ClassifierParams {
        ClassifierParams {
            model: self.model.clone(),
            timeout_secs: self.timeout_secs,
        }
    }

    /// Resolve the API key, preferring the environment variable
    pub fn resolve_api_key(&self) -> Option<String> {
        std::env::var("SPOT_TASTE_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| (!self.api_key.is_empty()).then(|| self.api_key.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FileClassifierConfig::default();
        assert!(config.enabled);
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_params_conversion() {
        let config = FileClassifierConfig {
            model: "gemini-2.5-pro".to_string(),
            timeout_secs: 3,
            ..Default::default()
        };
        let params = config.params();
        assert_eq!(params.model, "gemini-2.5-pro");
        assert_eq!(params.timeout_secs, 3);
    }
}
