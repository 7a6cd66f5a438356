//! Answer set value object

use crate::onboarding::question::OnboardingQuestion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The option ids a user selected, keyed by question id (Value Object)
///
/// Selection is idempotent: picking the same option twice is a no-op, and
/// selection order never matters. Per-question pick counts are clamped to
/// the question's `max_picks` when the catalog is known.
///
/// # Example
///
/// ```
/// use taste_domain::AnswerSet;
///
/// let mut answers = AnswerSet::new();
/// answers.select("food-vibe", "street-eats");
/// answers.select("food-vibe", "street-eats"); // no-op
/// assert_eq!(answers.selected("food-vibe").len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    selections: BTreeMap<String, Vec<String>>,
}

impl AnswerSet {
    /// Create an empty answer set
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection. Duplicate selections of the same option collapse.
    pub fn select(&mut self, question_id: impl Into<String>, option_id: impl Into<String>) {
        let option_id = option_id.into();
        let picks = self.selections.entry(question_id.into()).or_default();
        if !picks.contains(&option_id) {
            picks.push(option_id);
        }
    }

    /// Get the selected option ids for a question (empty if unanswered)
    pub fn selected(&self, question_id: &str) -> &[String] {
        self.selections
            .get(question_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Selected option ids for a question, clamped to its `max_picks`.
    ///
    /// A stale or misbehaving client may submit more picks than the
    /// question allows; the excess is ignored rather than rejected.
    pub fn selected_within_limit<'a>(&'a self, question: &OnboardingQuestion) -> &'a [String] {
        let picks = self.selected(&question.id);
        &picks[..picks.len().min(question.max_picks)]
    }

    /// Whether no question has been answered
    pub fn is_empty(&self) -> bool {
        self.selections.values().all(Vec::is_empty)
    }

    /// Number of questions with at least one selection
    pub fn answered_count(&self) -> usize {
        self.selections.values().filter(|p| !p.is_empty()).count()
    }
}

impl<Q, O> FromIterator<(Q, O)> for AnswerSet
where
    Q: Into<String>,
    O: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (Q, O)>>(iter: I) -> Self {
        let mut answers = AnswerSet::new();
        for (question_id, option_id) in iter {
            answers.select(question_id, option_id);
        }
        answers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::question::{OnboardingOption, OnboardingQuestion, QuestionCategory};

    #[test]
    fn test_duplicate_selection_is_noop() {
        let mut answers = AnswerSet::new();
        answers.select("q1", "a");
        answers.select("q1", "a");
        answers.select("q1", "b");
        assert_eq!(answers.selected("q1"), &["a", "b"]);
    }

    #[test]
    fn test_unanswered_question_is_empty() {
        let answers = AnswerSet::new();
        assert!(answers.selected("q1").is_empty());
        assert!(answers.is_empty());
    }

    #[test]
    fn test_max_picks_clamp() {
        let question = OnboardingQuestion::new("q1", QuestionCategory::Food, "Pick two", 2)
            .with_option(OnboardingOption::new("a", "A", ""))
            .with_option(OnboardingOption::new("b", "B", ""))
            .with_option(OnboardingOption::new("c", "C", ""));

        let mut answers = AnswerSet::new();
        answers.select("q1", "a");
        answers.select("q1", "b");
        answers.select("q1", "c");

        assert_eq!(answers.selected_within_limit(&question), &["a", "b"]);
    }

    #[test]
    fn test_from_iterator() {
        let answers: AnswerSet = [("q1", "a"), ("q1", "b"), ("q2", "x")].into_iter().collect();
        assert_eq!(answers.answered_count(), 2);
        assert_eq!(answers.selected("q2"), &["x"]);
    }
}
