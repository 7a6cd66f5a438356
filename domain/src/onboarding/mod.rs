//! Onboarding model: questions, answers, and tag aggregation

pub mod aggregate;
pub mod answers;
pub mod catalog;
pub mod question;

pub use aggregate::aggregate_tags;
pub use answers::AnswerSet;
pub use catalog::default_questions;
pub use question::{OnboardingOption, OnboardingQuestion, QuestionCategory};
