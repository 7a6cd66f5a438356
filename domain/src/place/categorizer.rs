//! Keyword place categorization

use crate::place::entities::{Categorization, MainCategory, Place};
use crate::place::taxonomy::PlaceTaxonomy;

/// Classify a place into `(main_category, subtype)` from keywords alone.
///
/// Evaluation order is fixed and short-circuits:
/// 1. Any eat provider type → `Eat`, with cuisine detected by scanning the
///    ordered keyword table against a lowercase haystack of provider types,
///    name, and description. First matching rule wins; no match →
///    `"Restaurant"`.
/// 2. Otherwise any see provider type → `See`, with the subtype resolved by
///    the ordered see-rule chain; no rule hit → `"Activity"`.
/// 3. Otherwise the conservative default `Eat`/`"Restaurant"`.
///
/// Total function: every input, including an empty provider-type list,
/// produces a valid pair.
pub fn categorize(place: &Place, taxonomy: &PlaceTaxonomy) -> Categorization {
    // Eat check first: it deliberately shadows any see type also present
    if place.provider_types.iter().any(|t| taxonomy.is_eat_type(t)) {
        let haystack = build_haystack(place);
        let subtype = taxonomy
            .cuisine_rules
            .iter()
            .find(|rule| haystack.contains(&rule.keyword))
            .map(|rule| rule.cuisine.clone())
            .unwrap_or_else(|| MainCategory::Eat.default_subtype().to_string());
        return Categorization::new(MainCategory::Eat, subtype);
    }

    if place.provider_types.iter().any(|t| taxonomy.is_see_type(t)) {
        let subtype = taxonomy
            .see_rules
            .iter()
            .find(|rule| place.provider_types.iter().any(|t| *t == rule.provider_type))
            .map(|rule| rule.subtype.clone())
            .unwrap_or_else(|| MainCategory::See.default_subtype().to_string());
        return Categorization::new(MainCategory::See, subtype);
    }

    Categorization::fallback()
}

/// Lowercase search text: provider types, name, and description joined
fn build_haystack(place: &Place) -> String {
    format!(
        "{} {} {}",
        place.provider_types.join(" "),
        place.name,
        place.description
    )
    .to_lowercase()
}
