//! Configuration loading and validation

pub mod file_config;
pub mod loader;

pub use file_config::{FileClassifierConfig, FileConfig};
pub use loader::ConfigLoader;
