//! Assign Persona use case
//!
//! Runs the full persona pipeline: answers → tag aggregation → scoring →
//! selection. Pure and synchronous; the catalogs are injected once at
//! construction and shared across requests.

use serde::Serialize;
use std::collections::BTreeSet;
use std::sync::Arc;
use taste_domain::{
    AnswerSet, DomainError, OnboardingQuestion, Persona, PersonaAssignment, PersonaScore, Tag,
    aggregate_tags, score_personas, select_personas,
};
use tracing::{debug, info};

/// Input for the AssignPersona use case
#[derive(Debug, Clone)]
pub struct AssignPersonaInput {
    pub answers: AnswerSet,
}

impl AssignPersonaInput {
    pub fn new(answers: AnswerSet) -> Self {
        Self { answers }
    }
}

/// Output of the AssignPersona use case
///
/// Carries the assignment plus the intermediate tag set and scores; the
/// onboarding collaborator persists the tags alongside the assignment.
#[derive(Debug, Clone, Serialize)]
pub struct AssignPersonaOutput {
    pub tags: BTreeSet<Tag>,
    pub scores: Vec<PersonaScore>,
    pub assignment: PersonaAssignment,
}

/// Use case for computing a user's persona assignment
pub struct AssignPersonaUseCase {
    questions: Arc<Vec<OnboardingQuestion>>,
    personas: Arc<Vec<Persona>>,
}

impl AssignPersonaUseCase {
    /// Create the use case over validated catalogs.
    ///
    /// Empty catalogs are a configuration error and are rejected here,
    /// at startup; `execute` itself cannot fail.
    pub fn new(
        questions: Arc<Vec<OnboardingQuestion>>,
        personas: Arc<Vec<Persona>>,
    ) -> Result<Self, DomainError> {
        if questions.is_empty() {
            return Err(DomainError::EmptyQuestionCatalog);
        }
        if personas.is_empty() {
            return Err(DomainError::EmptyPersonaCatalog);
        }
        Ok(Self { questions, personas })
    }

    /// Execute the use case. Total: every answer set produces an assignment.
    pub fn execute(&self, input: AssignPersonaInput) -> AssignPersonaOutput {
        let tags = aggregate_tags(&input.answers, &self.questions);
        debug!("Aggregated {} tags from {} answered questions", tags.len(), input.answers.answered_count());

        let scores = score_personas(&tags, &self.personas);
        let assignment = select_personas(&scores, &self.personas);

        info!(
            "Assigned persona '{}'{}",
            assignment.primary.id,
            assignment
                .secondary
                .as_ref()
                .map(|s| format!(" with secondary '{}'", s.id))
                .unwrap_or_default()
        );

        AssignPersonaOutput {
            tags,
            scores,
            assignment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taste_domain::{default_personas, default_questions};

    fn use_case() -> AssignPersonaUseCase {
        AssignPersonaUseCase::new(
            Arc::new(default_questions()),
            Arc::new(default_personas()),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_catalog_rejected_at_construction() {
        let result = AssignPersonaUseCase::new(
            Arc::new(Vec::new()),
            Arc::new(default_personas()),
        );
        assert!(matches!(result, Err(DomainError::EmptyQuestionCatalog)));

        let result = AssignPersonaUseCase::new(
            Arc::new(default_questions()),
            Arc::new(Vec::new()),
        );
        assert!(matches!(result, Err(DomainError::EmptyPersonaCatalog)));
    }

    #[test]
    fn test_execute_full_pipeline() {
        let answers: AnswerSet = [
            ("weekend-plans", "museum-morning"),
            ("weekend-plans", "broadway-matinee"),
            ("night-out", "gallery-opening"),
        ]
        .into_iter()
        .collect();

        let output = use_case().execute(AssignPersonaInput::new(answers));

        assert!(output.tags.contains(&Tag::new("museum")));
        assert_eq!(output.assignment.primary.id.as_str(), "culture-arts-lover");
        assert_eq!(output.scores.len(), 7);
    }

    #[test]
    fn test_execute_with_empty_answers_still_assigns() {
        let output = use_case().execute(AssignPersonaInput::new(AnswerSet::new()));
        assert!(output.tags.is_empty());
        assert!(output.scores.iter().all(|s| s.score == 0));
        // First catalog persona wins the all-zero tie
        assert_eq!(output.assignment.primary.id.as_str(), "foodie-adventurer");
    }

    #[test]
    fn test_execute_is_deterministic() {
        let answers: AnswerSet = [("food-vibe", "street-eats"), ("food-vibe", "heat-seeker")]
            .into_iter()
            .collect();

        let a = use_case().execute(AssignPersonaInput::new(answers.clone()));
        let b = use_case().execute(AssignPersonaInput::new(answers));
        assert_eq!(a.assignment, b.assignment);
        assert_eq!(a.scores, b.scores);
    }
}
