//! Onboarding question and option entities

use crate::core::tag::Tag;
use serde::{Deserialize, Serialize};

/// Which part of the onboarding flow a question belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Food,
    Events,
    Places,
}

impl std::fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionCategory::Food => write!(f, "food"),
            QuestionCategory::Events => write!(f, "events"),
            QuestionCategory::Places => write!(f, "places"),
        }
    }
}

/// A single selectable answer to an onboarding question
///
/// Selecting an option contributes its entire tag list to the user's
/// aggregate tag set. Option ids are unique within their question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingOption {
    pub id: String,
    pub label: String,
    pub emoji: String,
    pub tags: Vec<Tag>,
}

impl OnboardingOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            emoji: emoji.into(),
            tags: Vec::new(),
        }
    }

    /// Add a tag contributed by this option
    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tags.push(tag.into());
        self
    }
}

/// A multiple-choice onboarding question
///
/// Part of the fixed onboarding catalog; not user-editable at runtime.
/// `max_picks` bounds how many options a user may select.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingQuestion {
    pub id: String,
    pub category: QuestionCategory,
    pub prompt: String,
    pub max_picks: usize,
    pub options: Vec<OnboardingOption>,
}

impl OnboardingQuestion {
    pub fn new(
        id: impl Into<String>,
        category: QuestionCategory,
        prompt: impl Into<String>,
        max_picks: usize,
    ) -> Self {
        debug_assert!(max_picks >= 1, "max_picks must be at least 1");
        Self {
            id: id.into(),
            category,
            prompt: prompt.into(),
            max_picks,
            options: Vec::new(),
        }
    }

    pub fn with_option(mut self, option: OnboardingOption) -> Self {
        self.options.push(option);
        self
    }

    /// Look up an option by id within this question
    pub fn option(&self, option_id: &str) -> Option<&OnboardingOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_option_builder() {
        let option = OnboardingOption::new("brunch-spot", "Bottomless brunch", "🥂")
            .with_tag("brunch")
            .with_tag("trendy");
        assert_eq!(option.tags.len(), 2);
        assert_eq!(option.tags[0], Tag::new("brunch"));
    }

    #[test]
    fn test_question_option_lookup() {
        let question = OnboardingQuestion::new("food-vibe", QuestionCategory::Food, "Pick one", 1)
            .with_option(OnboardingOption::new("a", "A", "🍕"))
            .with_option(OnboardingOption::new("b", "B", "🍣"));

        assert!(question.option("a").is_some());
        assert!(question.option("missing").is_none());
    }

    #[test]
    fn test_category_display() {
        assert_eq!(QuestionCategory::Food.to_string(), "food");
        assert_eq!(QuestionCategory::Events.to_string(), "events");
        assert_eq!(QuestionCategory::Places.to_string(), "places");
    }
}
