//! Domain layer for spot-taste
//!
//! This crate contains the pure, deterministic core of the taste engine.
//! It has no I/O, no async, and no dependencies on infrastructure or
//! presentation concerns; every function here is total and safe to call
//! concurrently against the immutable catalogs.
//!
//! # Core Concepts
//!
//! ## Persona Engine
//!
//! Onboarding answers contribute tags; tags are aggregated into a set and
//! scored against a fixed persona catalog by overlap count. The top persona
//! is always assigned; a secondary appears only when the runner-up clears a
//! fixed threshold.
//!
//! ## Place Categorizer
//!
//! Provider types, name, and description are matched against ordered
//! keyword tables to produce an eat/see category and subtype. When the
//! provider types carry no signal, the ambiguity gate tells the caller to
//! consult an external AI classifier instead.

pub mod core;
pub mod onboarding;
pub mod persona;
pub mod place;

// Re-export commonly used types
pub use crate::core::{
    error::DomainError,
    tag::Tag,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use onboarding::{
    aggregate_tags, default_questions, AnswerSet, OnboardingOption, OnboardingQuestion,
    QuestionCategory,
};
pub use persona::{
    default_personas, score_personas, select_personas, Persona, PersonaAssignment, PersonaId,
    PersonaScore, SECONDARY_SCORE_THRESHOLD,
};
pub use place::{
    categorize, needs_ai_classification, Categorization, CuisineRule, MainCategory, Place,
    PlaceTaxonomy, SeeRule,
};
