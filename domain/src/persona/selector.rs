//! Persona selection
//!
//! Ranks the catalog by score and picks the primary and (conditional)
//! secondary persona.

use crate::persona::entities::{Persona, PersonaAssignment};
use crate::persona::scorer::PersonaScore;

/// Minimum score the runner-up must reach to be awarded as secondary.
///
/// Fixed business rule: a single incidental tag overlap is not enough to
/// claim a second persona.
pub const SECONDARY_SCORE_THRESHOLD: usize = 2;

/// Select the primary and secondary persona from scored results.
///
/// The catalog is stable-sorted by score descending, so equal scores keep
/// their catalog order and the first-declared persona wins ties. `primary`
/// is the top element regardless of its absolute score — every user gets a
/// persona, even at score 0. `secondary` is the runner-up only when its
/// score reaches [`SECONDARY_SCORE_THRESHOLD`].
///
/// Personas in `scores` that are missing from the catalog are ignored;
/// catalog personas missing from `scores` are treated as score 0.
///
/// # Panics
/// Debug-asserts that the catalog is non-empty. The catalog is static
/// configuration validated at startup, so an empty one is a programmer
/// error, not a runtime case.
pub fn select_personas(scores: &[PersonaScore], catalog: &[Persona]) -> PersonaAssignment {
    debug_assert!(!catalog.is_empty(), "persona catalog must not be empty");

    let score_of = |persona: &Persona| -> usize {
        scores
            .iter()
            .find(|s| s.persona_id == persona.id)
            .map(|s| s.score)
            .unwrap_or(0)
    };

    let mut ranked: Vec<&Persona> = catalog.iter().collect();
    // Stable sort: equal scores preserve catalog order
    ranked.sort_by(|a, b| score_of(b).cmp(&score_of(a)));

    let primary = ranked[0].clone();
    let secondary = ranked
        .get(1)
        .filter(|p| score_of(p) >= SECONDARY_SCORE_THRESHOLD)
        .map(|p| (**p).clone());

    PersonaAssignment::new(primary, secondary)
}
