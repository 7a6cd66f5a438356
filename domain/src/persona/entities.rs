//! Persona entities and the assignment result

use crate::core::tag::Tag;
use serde::{Deserialize, Serialize};

/// Persona identifier (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonaId(String);

impl PersonaId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonaId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonaId {
    fn from(s: &str) -> Self {
        PersonaId::new(s)
    }
}

/// A named cluster of taste tags with user-facing flavor text
///
/// Persona tag sets may overlap: a tag shared between two personas counts
/// toward both scores, which is what makes a meaningful secondary persona
/// possible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    pub id: PersonaId,
    pub name: String,
    pub emoji: String,
    pub description: String,
    pub reveal_comment: String,
    pub tags: Vec<Tag>,
}

impl Persona {
    pub fn new(id: impl Into<PersonaId>, name: impl Into<String>, emoji: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            emoji: emoji.into(),
            description: String::new(),
            reveal_comment: String::new(),
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_reveal_comment(mut self, comment: impl Into<String>) -> Self {
        self.reveal_comment = comment.into();
        self
    }

    pub fn with_tag(mut self, tag: impl Into<Tag>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Whether this persona's tag set contains the given tag
    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.contains(tag)
    }
}

/// The computed persona ranking for a user
///
/// A pure function of the aggregate tag set and the persona catalog; never
/// stored independently of its inputs. `primary` is always present (score 0
/// is a valid primary), `secondary` only when the runner-up earned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaAssignment {
    pub primary: Persona,
    pub secondary: Option<Persona>,
}

impl PersonaAssignment {
    pub fn new(primary: Persona, secondary: Option<Persona>) -> Self {
        Self { primary, secondary }
    }

    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_persona_builder() {
        let persona = Persona::new("nightlife-explorer", "Nightlife Explorer", "🪩")
            .with_description("Out until the lights come on.")
            .with_reveal_comment("We knew it from your playlist.")
            .with_tag("club")
            .with_tag("dj");

        assert_eq!(persona.id.as_str(), "nightlife-explorer");
        assert!(persona.has_tag(&Tag::new("club")));
        assert!(!persona.has_tag(&Tag::new("museum")));
    }

    #[test]
    fn test_assignment_without_secondary() {
        let primary = Persona::new("a", "A", "✨");
        let assignment = PersonaAssignment::new(primary, None);
        assert!(!assignment.has_secondary());
    }
}
