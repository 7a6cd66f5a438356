//! Port definitions (interfaces implemented by infrastructure adapters)

pub mod ai_classifier;

pub use ai_classifier::{AiClassification, AiClassifierPort, ClassifierError, UnavailableClassifier};
