//! Catalog validation issue types
//!
//! Produced by the configuration layer when checking loaded catalogs.
//! Errors are fatal at startup; warnings are logged and tolerated.

use serde::{Deserialize, Serialize};

/// How serious a detected configuration issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Startup must abort
    Error,
    /// Logged, catalog still usable
    Warning,
}

/// Machine-readable issue classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigIssueCode {
    /// A catalog that must never be empty is empty
    EmptyCatalog { catalog: String },
    /// Two catalog entries share an id
    DuplicateId { catalog: String, id: String },
    /// A numeric field is outside its allowed range
    InvalidValue { field: String, value: String },
    /// An entry carries no tags and can never score
    UnscorableEntry { catalog: String, id: String },
}

/// A single validation finding with a human-readable message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn error(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
        }
    }

    pub fn warning(code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            message: message.into(),
        }
    }

    /// Whether this issue should abort startup
    pub fn is_fatal(&self) -> bool {
        self.severity == Severity::Error
    }
}
