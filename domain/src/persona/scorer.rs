//! Persona scoring
//!
//! Counts tag overlap between a user's aggregate tag set and each persona.

use crate::core::tag::Tag;
use crate::persona::entities::{Persona, PersonaId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A persona's overlap score against a tag set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonaScore {
    pub persona_id: PersonaId,
    pub score: usize,
}

/// Score every persona in the catalog against the given tag set.
///
/// A persona's score is `|tags ∩ persona.tags|` — each input tag counts at
/// most once per persona, and a tag shared by several personas contributes
/// to every one of them (no exclusivity). Results come back in catalog
/// order, which is what the selector's tie-break relies on.
pub fn score_personas(tags: &BTreeSet<Tag>, catalog: &[Persona]) -> Vec<PersonaScore> {
    catalog
        .iter()
        .map(|persona| PersonaScore {
            persona_id: persona.id.clone(),
            score: tags.iter().filter(|tag| persona.has_tag(tag)).count(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Persona> {
        vec![
            Persona::new("a", "A", "")
                .with_tag("club")
                .with_tag("dj")
                .with_tag("dancing"),
            Persona::new("b", "B", "")
                .with_tag("museum")
                .with_tag("talks"),
            Persona::new("c", "C", "").with_tag("talks").with_tag("books"),
        ]
    }

    fn tags(items: &[&str]) -> BTreeSet<Tag> {
        items.iter().map(|t| Tag::new(*t)).collect()
    }

    #[test]
    fn test_scores_in_catalog_order() {
        let scores = score_personas(&tags(&["club", "dj"]), &catalog());
        assert_eq!(scores.len(), 3);
        assert_eq!(scores[0].persona_id.as_str(), "a");
        assert_eq!(scores[1].persona_id.as_str(), "b");
        assert_eq!(scores[2].persona_id.as_str(), "c");
    }

    #[test]
    fn test_intersection_count() {
        let scores = score_personas(&tags(&["club", "dj", "museum"]), &catalog());
        assert_eq!(scores[0].score, 2);
        assert_eq!(scores[1].score, 1);
        assert_eq!(scores[2].score, 0);
    }

    #[test]
    fn test_shared_tag_counts_for_every_holder() {
        let scores = score_personas(&tags(&["talks"]), &catalog());
        assert_eq!(scores[1].score, 1);
        assert_eq!(scores[2].score, 1);
    }

    #[test]
    fn test_unknown_tags_score_nothing() {
        let scores = score_personas(&tags(&["skydiving"]), &catalog());
        assert!(scores.iter().all(|s| s.score == 0));
    }

    #[test]
    fn test_empty_tags_score_zero_everywhere() {
        let scores = score_personas(&BTreeSet::new(), &catalog());
        assert!(scores.iter().all(|s| s.score == 0));
    }

    #[test]
    fn test_adding_a_tag_never_decreases_scores() {
        let base = tags(&["club", "talks"]);
        let before = score_personas(&base, &catalog());

        let mut extended = base.clone();
        extended.insert(Tag::new("books"));
        let after = score_personas(&extended, &catalog());

        for (b, a) in before.iter().zip(after.iter()) {
            assert!(a.score >= b.score);
        }
    }
}
