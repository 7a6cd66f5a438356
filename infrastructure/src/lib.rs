//! Infrastructure layer for spot-taste
//!
//! Adapters and external implementations: configuration loading, the
//! Gemini classifier adapter, and audit logging.

pub mod classifier;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use classifier::{GeminiClassifier, extract_classification};
pub use config::{ConfigLoader, FileClassifierConfig, FileConfig};
pub use logging::JsonlAuditLogger;
