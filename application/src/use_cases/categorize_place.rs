//! Categorize Place use case
//!
//! Keyword categorization with the ambiguity gate in front of the AI
//! classifier. The classifier is the only async boundary in the engine;
//! its failures never propagate — every path lands on a valid category.

use crate::config::ClassifierParams;
use crate::ports::ai_classifier::{AiClassifierPort, ClassifierError};
use serde::Serialize;
use std::sync::Arc;
use taste_domain::{
    Categorization, MainCategory, Place, PlaceTaxonomy, categorize, needs_ai_classification,
};
use tracing::{debug, warn};

/// Where a categorization came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CategorySource {
    /// Deterministic keyword path
    Keyword,
    /// External AI classifier
    Ai,
    /// Fail-safe default after a classifier failure or timeout
    Fallback,
}

/// Output of the CategorizePlace use case
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorizePlaceOutput {
    pub categorization: Categorization,
    pub source: CategorySource,
}

/// Use case for categorizing a place into `(main_category, subtype)`
pub struct CategorizePlaceUseCase<C: AiClassifierPort> {
    classifier: Arc<C>,
    taxonomy: Arc<PlaceTaxonomy>,
    params: ClassifierParams,
}

impl<C: AiClassifierPort> CategorizePlaceUseCase<C> {
    pub fn new(classifier: Arc<C>, taxonomy: Arc<PlaceTaxonomy>) -> Self {
        Self {
            classifier,
            taxonomy,
            params: ClassifierParams::default(),
        }
    }

    pub fn with_params(mut self, params: ClassifierParams) -> Self {
        self.params = params;
        self
    }

    /// Execute the use case. Infallible by design: classifier errors are
    /// degraded to the conservative `eat`/"Restaurant" default.
    pub async fn execute(&self, place: &Place) -> CategorizePlaceOutput {
        if !needs_ai_classification(&place.provider_types, &self.taxonomy) {
            let categorization = categorize(place, &self.taxonomy);
            debug!(
                "Keyword-categorized '{}' as {}/{}",
                place.name, categorization.main_category, categorization.subtype
            );
            return CategorizePlaceOutput {
                categorization,
                source: CategorySource::Keyword,
            };
        }

        debug!("Provider types carry no signal for '{}', asking classifier", place.name);
        match self.classify_with_timeout(place).await {
            Ok(categorization) => CategorizePlaceOutput {
                categorization,
                source: CategorySource::Ai,
            },
            Err(e) => {
                warn!("Classifier failed for '{}', using fallback: {}", place.name, e);
                CategorizePlaceOutput {
                    categorization: Categorization::fallback(),
                    source: CategorySource::Fallback,
                }
            }
        }
    }

    async fn classify_with_timeout(&self, place: &Place) -> Result<Categorization, ClassifierError> {
        let raw = tokio::time::timeout(self.params.timeout(), self.classifier.classify(place))
            .await
            .map_err(|_| ClassifierError::Timeout)??;

        // Coerce untrusted model text: anything but "see" is eat, and a
        // blank subtype falls back to the category default.
        let main_category = MainCategory::from_label(&raw.main_category);
        let subtype = match raw.subtype.trim() {
            "" => main_category.default_subtype().to_string(),
            s => s.to_string(),
        };

        Ok(Categorization::new(main_category, subtype))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ai_classifier::{AiClassification, UnavailableClassifier};
    use async_trait::async_trait;

    /// Stub classifier returning a fixed response
    struct FixedClassifier {
        main_category: String,
        subtype: String,
    }

    #[async_trait]
    impl AiClassifierPort for FixedClassifier {
        async fn classify(&self, _place: &Place) -> Result<AiClassification, ClassifierError> {
            Ok(AiClassification {
                main_category: self.main_category.clone(),
                subtype: self.subtype.clone(),
            })
        }
    }

    /// Stub classifier that never resolves, to exercise the timeout
    struct HangingClassifier;

    #[async_trait]
    impl AiClassifierPort for HangingClassifier {
        async fn classify(&self, _place: &Place) -> Result<AiClassification, ClassifierError> {
            std::future::pending().await
        }
    }

    fn ambiguous_place() -> Place {
        Place::new("Mystery Spot", "somewhere in Queens").with_provider_type("point_of_interest")
    }

    #[tokio::test]
    async fn test_keyword_path_skips_classifier() {
        let use_case = CategorizePlaceUseCase::new(
            Arc::new(UnavailableClassifier),
            Arc::new(PlaceTaxonomy::default()),
        );

        let place = Place::new("Lucali", "best pizza in Brooklyn").with_provider_type("restaurant");
        let output = use_case.execute(&place).await;

        assert_eq!(output.source, CategorySource::Keyword);
        assert_eq!(output.categorization.subtype, "Pizza");
    }

    #[tokio::test]
    async fn test_ai_result_used_for_ambiguous_place() {
        let use_case = CategorizePlaceUseCase::new(
            Arc::new(FixedClassifier {
                main_category: "see".to_string(),
                subtype: "Gallery".to_string(),
            }),
            Arc::new(PlaceTaxonomy::default()),
        );

        let output = use_case.execute(&ambiguous_place()).await;

        assert_eq!(output.source, CategorySource::Ai);
        assert_eq!(output.categorization.main_category, MainCategory::See);
        assert_eq!(output.categorization.subtype, "Gallery");
    }

    #[tokio::test]
    async fn test_unexpected_main_category_coerced_to_eat() {
        let use_case = CategorizePlaceUseCase::new(
            Arc::new(FixedClassifier {
                main_category: "shopping".to_string(),
                subtype: "Boutique".to_string(),
            }),
            Arc::new(PlaceTaxonomy::default()),
        );

        let output = use_case.execute(&ambiguous_place()).await;
        assert_eq!(output.categorization.main_category, MainCategory::Eat);
    }

    #[tokio::test]
    async fn test_blank_subtype_replaced_with_default() {
        let use_case = CategorizePlaceUseCase::new(
            Arc::new(FixedClassifier {
                main_category: "see".to_string(),
                subtype: "   ".to_string(),
            }),
            Arc::new(PlaceTaxonomy::default()),
        );

        let output = use_case.execute(&ambiguous_place()).await;
        assert_eq!(output.categorization.subtype, "Activity");
    }

    #[tokio::test]
    async fn test_classifier_failure_falls_back() {
        let use_case = CategorizePlaceUseCase::new(
            Arc::new(UnavailableClassifier),
            Arc::new(PlaceTaxonomy::default()),
        );

        let output = use_case.execute(&ambiguous_place()).await;

        assert_eq!(output.source, CategorySource::Fallback);
        assert_eq!(output.categorization, Categorization::fallback());
    }

    #[tokio::test]
    async fn test_empty_provider_types_gate_and_fallback() {
        let use_case = CategorizePlaceUseCase::new(
            Arc::new(UnavailableClassifier),
            Arc::new(PlaceTaxonomy::default()),
        );

        let output = use_case.execute(&Place::new("Nameless", "")).await;

        assert_eq!(output.source, CategorySource::Fallback);
        assert_eq!(output.categorization, Categorization::fallback());
    }

    #[tokio::test(start_paused = true)]
    async fn test_classifier_timeout_falls_back() {
        let use_case = CategorizePlaceUseCase::new(
            Arc::new(HangingClassifier),
            Arc::new(PlaceTaxonomy::default()),
        )
        .with_params(ClassifierParams {
            model: "test".to_string(),
            timeout_secs: 1,
        });

        let output = use_case.execute(&ambiguous_place()).await;

        assert_eq!(output.source, CategorySource::Fallback);
        assert_eq!(output.categorization, Categorization::fallback());
    }
}
