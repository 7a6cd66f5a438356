//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// The scoring and categorization functions themselves are total and never
/// fail; these variants cover catalog preconditions checked once at startup.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Persona catalog is empty")]
    EmptyPersonaCatalog,

    #[error("Question catalog is empty")]
    EmptyQuestionCatalog,

    #[error("Invalid catalog entry: {0}")]
    InvalidCatalogEntry(String),
}
