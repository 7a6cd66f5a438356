//! Place taxonomy: provider-type sets and the cuisine keyword table
//!
//! All precedence in categorization is data, not control flow buried in
//! code: the cuisine table and the see-subtype chain are ordered lists
//! evaluated front to back, so earlier entries win and the tie-break is
//! visible and testable. A deployment may swap this data via configuration
//! provided it preserves ordering.

use serde::{Deserialize, Serialize};

/// One entry of the cuisine keyword table: first keyword match wins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CuisineRule {
    /// Lowercase keyword searched for in the haystack
    pub keyword: String,
    /// Subtype emitted when the keyword matches
    pub cuisine: String,
}

impl CuisineRule {
    pub fn new(keyword: impl Into<String>, cuisine: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            cuisine: cuisine.into(),
        }
    }
}

/// One entry of the see-subtype priority chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeeRule {
    /// Provider type that triggers this subtype
    pub provider_type: String,
    /// Subtype emitted when the provider type is present
    pub subtype: String,
}

impl SeeRule {
    pub fn new(provider_type: impl Into<String>, subtype: impl Into<String>) -> Self {
        Self {
            provider_type: provider_type.into(),
            subtype: subtype.into(),
        }
    }
}

/// The full categorization taxonomy, loaded once at process start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceTaxonomy {
    /// Provider types that mark a place as somewhere to eat
    pub eat_types: Vec<String>,
    /// Provider types that mark a place as somewhere to see
    pub see_types: Vec<String>,
    /// Provider types too generic to carry any signal on their own
    pub ambiguous_types: Vec<String>,
    /// Ordered cuisine detection table (earlier entries win)
    pub cuisine_rules: Vec<CuisineRule>,
    /// Ordered see-subtype priority chain (earlier entries win)
    pub see_rules: Vec<SeeRule>,
}

impl PlaceTaxonomy {
    pub fn is_eat_type(&self, provider_type: &str) -> bool {
        self.eat_types.iter().any(|t| t == provider_type)
    }

    pub fn is_see_type(&self, provider_type: &str) -> bool {
        self.see_types.iter().any(|t| t == provider_type)
    }

    pub fn is_ambiguous_type(&self, provider_type: &str) -> bool {
        self.ambiguous_types.iter().any(|t| t == provider_type)
    }
}

impl Default for PlaceTaxonomy {
    fn default() -> Self {
        Self {
            eat_types: [
                "restaurant",
                "food",
                "cafe",
                "bakery",
                "bar",
                "meal_takeaway",
                "meal_delivery",
            ]
            .map(String::from)
            .to_vec(),
            see_types: [
                "museum",
                "art_gallery",
                "park",
                "night_club",
                "tourist_attraction",
                "amusement_park",
                "zoo",
                "aquarium",
                "movie_theater",
                "performing_arts_theater",
                "stadium",
            ]
            .map(String::from)
            .to_vec(),
            ambiguous_types: ["establishment", "point_of_interest", "store", "local_business"]
                .map(String::from)
                .to_vec(),
            cuisine_rules: vec![
                CuisineRule::new("pizza", "Pizza"),
                CuisineRule::new("sushi", "Sushi"),
                CuisineRule::new("ramen", "Ramen"),
                CuisineRule::new("taco", "Mexican"),
                CuisineRule::new("mexican", "Mexican"),
                CuisineRule::new("burger", "Burgers"),
                CuisineRule::new("bagel", "Bagels"),
                CuisineRule::new("deli", "Deli"),
                CuisineRule::new("dim sum", "Chinese"),
                CuisineRule::new("chinese", "Chinese"),
                CuisineRule::new("thai", "Thai"),
                CuisineRule::new("korean", "Korean"),
                CuisineRule::new("indian", "Indian"),
                CuisineRule::new("pasta", "Italian"),
                CuisineRule::new("italian", "Italian"),
                CuisineRule::new("french", "French"),
                CuisineRule::new("mediterranean", "Mediterranean"),
                CuisineRule::new("seafood", "Seafood"),
                CuisineRule::new("steak", "Steakhouse"),
                CuisineRule::new("bbq", "BBQ"),
                CuisineRule::new("vegan", "Vegan"),
                CuisineRule::new("dessert", "Dessert"),
                CuisineRule::new("bakery", "Bakery"),
                CuisineRule::new("coffee", "Cafe"),
                CuisineRule::new("cafe", "Cafe"),
                CuisineRule::new("brunch", "Brunch"),
                CuisineRule::new("wine", "Wine Bar"),
                CuisineRule::new("cocktail", "Cocktail Bar"),
            ],
            see_rules: vec![
                SeeRule::new("museum", "Museum"),
                SeeRule::new("art_gallery", "Gallery"),
                SeeRule::new("park", "Park"),
                SeeRule::new("night_club", "Nightlife"),
            ],
        }
    }
}
