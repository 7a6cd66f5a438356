//! Ambiguity gate
//!
//! Decides whether keyword categorization has any signal to work with, or
//! whether the caller should consult the external AI classifier.

use crate::place::taxonomy::PlaceTaxonomy;

/// Whether a place's provider types carry no usable eat/see signal.
///
/// True iff every entry is either in the ambiguous set (`establishment`,
/// `point_of_interest`, `store`, `local_business`) or absent from both the
/// eat and see sets. An empty list is vacuously ambiguous.
///
/// When this returns true the enrichment collaborator should invoke its AI
/// classifier; on classifier failure the result falls back to
/// `Eat`/`"Restaurant"` rather than surfacing an error.
pub fn needs_ai_classification(provider_types: &[String], taxonomy: &PlaceTaxonomy) -> bool {
    provider_types.iter().all(|t| {
        taxonomy.is_ambiguous_type(t) || (!taxonomy.is_eat_type(t) && !taxonomy.is_see_type(t))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn types(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_list_is_ambiguous() {
        assert!(needs_ai_classification(&[], &PlaceTaxonomy::default()));
    }

    #[test]
    fn test_all_ambiguous_types() {
        let taxonomy = PlaceTaxonomy::default();
        assert!(needs_ai_classification(
            &types(&["establishment", "point_of_interest", "store", "local_business"]),
            &taxonomy
        ));
    }

    #[test]
    fn test_unknown_types_are_ambiguous() {
        let taxonomy = PlaceTaxonomy::default();
        assert!(needs_ai_classification(&types(&["lodging", "spa"]), &taxonomy));
    }

    #[test]
    fn test_eat_type_resolves_ambiguity() {
        let taxonomy = PlaceTaxonomy::default();
        assert!(!needs_ai_classification(
            &types(&["point_of_interest", "restaurant"]),
            &taxonomy
        ));
    }

    #[test]
    fn test_see_type_resolves_ambiguity() {
        let taxonomy = PlaceTaxonomy::default();
        assert!(!needs_ai_classification(&types(&["museum"]), &taxonomy));
    }
}
