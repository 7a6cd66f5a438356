//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file and
//! use domain types directly where the shapes line up. The catalogs default
//! to the built-in ones; a deployment overriding them keeps declaration
//! order, which the selector's tie-break and the categorizer's rule scans
//! depend on.

mod classifier;

pub use classifier::FileClassifierConfig;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use taste_domain::{
    ConfigIssue, ConfigIssueCode, OnboardingQuestion, Persona, PlaceTaxonomy, default_personas,
    default_questions,
};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Onboarding question catalog
    pub questions: Vec<OnboardingQuestion>,
    /// Persona catalog, in tie-break order
    pub personas: Vec<Persona>,
    /// Place categorization taxonomy
    pub taxonomy: PlaceTaxonomy,
    /// AI classifier settings
    pub classifier: FileClassifierConfig,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            questions: default_questions(),
            personas: default_personas(),
            taxonomy: PlaceTaxonomy::default(),
            classifier: FileClassifierConfig::default(),
        }
    }
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Errors (empty catalogs, duplicate ids, zero pick limits) are fatal
    /// at startup; warnings are logged and tolerated.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.questions.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyCatalog {
                    catalog: "questions".to_string(),
                },
                "question catalog must not be empty",
            ));
        }
        if self.personas.is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyCatalog {
                    catalog: "personas".to_string(),
                },
                "persona catalog must not be empty",
            ));
        }

        let mut seen = HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.id.as_str()) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::DuplicateId {
                        catalog: "questions".to_string(),
                        id: question.id.clone(),
                    },
                    format!("duplicate question id '{}'", question.id),
                ));
            }
            if question.max_picks == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidValue {
                        field: format!("questions.{}.max_picks", question.id),
                        value: "0".to_string(),
                    },
                    format!("question '{}' allows zero picks", question.id),
                ));
            }
            let mut option_ids = HashSet::new();
            for option in &question.options {
                if !option_ids.insert(option.id.as_str()) {
                    issues.push(ConfigIssue::error(
                        ConfigIssueCode::DuplicateId {
                            catalog: format!("questions.{}.options", question.id),
                            id: option.id.clone(),
                        },
                        format!("duplicate option id '{}' in question '{}'", option.id, question.id),
                    ));
                }
            }
        }

        let mut seen = HashSet::new();
        for persona in &self.personas {
            if !seen.insert(persona.id.as_str()) {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::DuplicateId {
                        catalog: "personas".to_string(),
                        id: persona.id.to_string(),
                    },
                    format!("duplicate persona id '{}'", persona.id),
                ));
            }
            if persona.tags.is_empty() {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::UnscorableEntry {
                        catalog: "personas".to_string(),
                        id: persona.id.to_string(),
                    },
                    format!("persona '{}' has no tags and can never score", persona.id),
                ));
            }
        }

        for rule in &self.taxonomy.see_rules {
            if !self.taxonomy.is_see_type(&rule.provider_type) {
                issues.push(ConfigIssue::warning(
                    ConfigIssueCode::InvalidValue {
                        field: "taxonomy.see_rules".to_string(),
                        value: rule.provider_type.clone(),
                    },
                    format!(
                        "see rule for '{}' is dead: the type is not in see_types",
                        rule.provider_type
                    ),
                ));
            }
        }

        if self.classifier.timeout_secs == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidValue {
                    field: "classifier.timeout_secs".to_string(),
                    value: "0".to_string(),
                },
                "classifier.timeout_secs is 0: every AI call will fall back immediately",
            ));
        }

        issues
    }

    /// Whether any fatal issue was detected
    pub fn has_fatal_issues(&self) -> bool {
        self.validate().iter().any(ConfigIssue::is_fatal)
    }
}
