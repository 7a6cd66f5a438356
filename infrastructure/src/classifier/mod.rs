//! AI classifier adapters

pub mod gemini;
mod protocol;

pub use gemini::{GeminiClassifier, extract_classification};
