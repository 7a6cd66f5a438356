//! Application-level execution parameters

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Parameters governing the external classifier call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierParams {
    /// Model identifier passed to the adapter
    pub model: String,
    /// Seconds to wait for a classification before falling back
    pub timeout_secs: u64,
}

impl ClassifierParams {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClassifierParams {
    fn default() -> Self {
        Self {
            model: "gemini-2.0-flash".to_string(),
            timeout_secs: 10,
        }
    }
}
