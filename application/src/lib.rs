//! Application layer for spot-taste
//!
//! This crate contains the use cases and port definitions. It depends only
//! on the domain layer; adapters implementing the ports live in the
//! infrastructure layer and are injected at construction.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ClassifierParams;
pub use ports::ai_classifier::{
    AiClassification, AiClassifierPort, ClassifierError, UnavailableClassifier,
};
pub use use_cases::assign_persona::{
    AssignPersonaInput, AssignPersonaOutput, AssignPersonaUseCase,
};
pub use use_cases::categorize_place::{
    CategorizePlaceOutput, CategorizePlaceUseCase, CategorySource,
};
