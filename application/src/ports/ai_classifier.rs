//! AI classifier port
//!
//! Defines the interface to the external classifier consulted when the
//! ambiguity gate finds no keyword signal. Implementations (adapters) live
//! in the infrastructure layer.

use async_trait::async_trait;
use taste_domain::Place;
use thiserror::Error;

/// Errors that can occur during AI classification
#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Unparseable response: {0}")]
    UnparseableResponse(String),

    #[error("Timeout")]
    Timeout,

    #[error("Classifier not available")]
    Unavailable,
}

/// Raw classification returned by an external classifier
///
/// Both fields are untrusted model text. The categorize-place use case
/// coerces `main_category` onto the eat/see enum and sanitizes `subtype`
/// before anything downstream sees them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiClassification {
    pub main_category: String,
    pub subtype: String,
}

/// Port for external place classification
#[async_trait]
pub trait AiClassifierPort: Send + Sync {
    /// Classify a place from its name, description, and provider types
    async fn classify(&self, place: &Place) -> Result<AiClassification, ClassifierError>;
}

/// Null adapter: always reports the classifier as unavailable.
///
/// Used when AI classification is disabled; the use case's fail-safe
/// fallback then applies to every ambiguous place.
pub struct UnavailableClassifier;

#[async_trait]
impl AiClassifierPort for UnavailableClassifier {
    async fn classify(&self, _place: &Place) -> Result<AiClassification, ClassifierError> {
        Err(ClassifierError::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unavailable_classifier_always_fails() {
        let classifier = UnavailableClassifier;
        let place = Place::new("Somewhere", "");
        assert!(matches!(
            classifier.classify(&place).await,
            Err(ClassifierError::Unavailable)
        ));
    }
}
