//! Tag aggregation from onboarding answers

use crate::core::tag::Tag;
use crate::onboarding::answers::AnswerSet;
use crate::onboarding::question::OnboardingQuestion;
use std::collections::BTreeSet;

/// Union the tags of every selected option into a single set.
///
/// Walks the question catalog, resolves each selected option id against the
/// question's option list, and collects the tags of every resolved option.
/// Unknown question ids and unknown option ids are silently ignored — a
/// stale client may submit an option that was since removed from the
/// catalog. Total function: an empty answer set yields an empty tag set.
///
/// The result is a set; callers must not rely on enumeration order.
pub fn aggregate_tags(answers: &AnswerSet, catalog: &[OnboardingQuestion]) -> BTreeSet<Tag> {
    let mut tags = BTreeSet::new();

    for question in catalog {
        for option_id in answers.selected_within_limit(question) {
            if let Some(option) = question.option(option_id) {
                tags.extend(option.tags.iter().cloned());
            }
        }
    }

    tags
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::onboarding::question::{OnboardingOption, QuestionCategory};

    fn sample_catalog() -> Vec<OnboardingQuestion> {
        vec![
            OnboardingQuestion::new("q1", QuestionCategory::Food, "Food?", 2)
                .with_option(
                    OnboardingOption::new("pizza", "Pizza", "🍕")
                        .with_tag("foodie")
                        .with_tag("casual"),
                )
                .with_option(
                    OnboardingOption::new("omakase", "Omakase", "🍣")
                        .with_tag("foodie")
                        .with_tag("tasting-menu"),
                ),
            OnboardingQuestion::new("q2", QuestionCategory::Events, "Night out?", 1).with_option(
                OnboardingOption::new("club", "Dance floor", "🪩")
                    .with_tag("club")
                    .with_tag("dancing"),
            ),
        ]
    }

    #[test]
    fn test_union_collapses_duplicates() {
        let catalog = sample_catalog();
        let answers: AnswerSet = [("q1", "pizza"), ("q1", "omakase")].into_iter().collect();

        let tags = aggregate_tags(&answers, &catalog);

        // "foodie" appears in both options but once in the set
        assert_eq!(tags.len(), 3);
        assert!(tags.contains(&Tag::new("foodie")));
        assert!(tags.contains(&Tag::new("casual")));
        assert!(tags.contains(&Tag::new("tasting-menu")));
    }

    #[test]
    fn test_selection_order_irrelevant() {
        let catalog = sample_catalog();
        let forward: AnswerSet = [("q1", "pizza"), ("q1", "omakase")].into_iter().collect();
        let reverse: AnswerSet = [("q1", "omakase"), ("q1", "pizza")].into_iter().collect();

        assert_eq!(
            aggregate_tags(&forward, &catalog),
            aggregate_tags(&reverse, &catalog)
        );
    }

    #[test]
    fn test_unknown_option_id_ignored() {
        let catalog = sample_catalog();
        let answers: AnswerSet = [("q1", "pizza"), ("q1", "removed-option")]
            .into_iter()
            .collect();

        let tags = aggregate_tags(&answers, &catalog);
        assert_eq!(tags.len(), 2);
    }

    #[test]
    fn test_unknown_question_id_ignored() {
        let catalog = sample_catalog();
        let answers: AnswerSet = [("deleted-question", "pizza")].into_iter().collect();

        assert!(aggregate_tags(&answers, &catalog).is_empty());
    }

    #[test]
    fn test_empty_answers_yield_empty_set() {
        let catalog = sample_catalog();
        assert!(aggregate_tags(&AnswerSet::new(), &catalog).is_empty());
    }

    #[test]
    fn test_duplicate_selection_idempotent() {
        let catalog = sample_catalog();
        let once: AnswerSet = [("q2", "club")].into_iter().collect();
        let mut twice = once.clone();
        twice.select("q2", "club");

        assert_eq!(
            aggregate_tags(&once, &catalog),
            aggregate_tags(&twice, &catalog)
        );
    }
}
