//! Place categorization input and output types

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Top-level eat/see split applied to every place (Value Object)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MainCategory {
    #[default]
    Eat,
    See,
}

impl MainCategory {
    /// Get the wire label for this category
    pub fn as_str(&self) -> &str {
        match self {
            MainCategory::Eat => "eat",
            MainCategory::See => "see",
        }
    }

    /// Coerce an untrusted label into a category.
    ///
    /// Only the exact string `"see"` maps to `See`; everything else,
    /// including case and whitespace variants, becomes `Eat`. This is the
    /// defensive parse applied to external classifier output, which is
    /// free text and cannot be trusted to stay on the enum.
    pub fn from_label(label: &str) -> Self {
        if label == "see" {
            MainCategory::See
        } else {
            MainCategory::Eat
        }
    }

    /// The generic subtype used when nothing more specific matched
    pub fn default_subtype(&self) -> &'static str {
        match self {
            MainCategory::Eat => "Restaurant",
            MainCategory::See => "Activity",
        }
    }
}

impl std::fmt::Display for MainCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for MainCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MainCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(MainCategory::from_label(&s))
    }
}

/// A raw place record as supplied by the enrichment collaborator
///
/// `provider_types` is the vendor taxonomy from the places-search provider
/// (e.g. "restaurant", "museum", "point_of_interest"). Validated at the
/// boundary into this struct; unvalidated external shapes never reach the
/// categorizer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub provider_types: Vec<String>,
}

impl Place {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            provider_types: Vec::new(),
        }
    }

    pub fn with_provider_type(mut self, provider_type: impl Into<String>) -> Self {
        self.provider_types.push(provider_type.into());
        self
    }

    pub fn with_provider_types<I, S>(mut self, provider_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.provider_types
            .extend(provider_types.into_iter().map(Into::into));
        self
    }
}

/// The computed `(main_category, subtype)` pair for a place
///
/// `subtype` is always an enumerated value or the generic fallback for its
/// category; free-text overrides are a human-editor concern downstream and
/// never originate here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Categorization {
    pub main_category: MainCategory,
    pub subtype: String,
}

impl Categorization {
    pub fn new(main_category: MainCategory, subtype: impl Into<String>) -> Self {
        Self {
            main_category,
            subtype: subtype.into(),
        }
    }

    /// The conservative default: absence of signal is treated as a restaurant
    pub fn fallback() -> Self {
        Self::new(MainCategory::Eat, MainCategory::Eat.default_subtype())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_coercion() {
        assert_eq!(MainCategory::from_label("see"), MainCategory::See);
        assert_eq!(MainCategory::from_label("eat"), MainCategory::Eat);
        // Only the exact label counts; variants coerce to the eat default
        assert_eq!(MainCategory::from_label(" see "), MainCategory::Eat);
        assert_eq!(MainCategory::from_label("SEE"), MainCategory::Eat);
        assert_eq!(MainCategory::from_label("drink"), MainCategory::Eat);
        assert_eq!(MainCategory::from_label(""), MainCategory::Eat);
    }

    #[test]
    fn test_default_subtypes() {
        assert_eq!(MainCategory::Eat.default_subtype(), "Restaurant");
        assert_eq!(MainCategory::See.default_subtype(), "Activity");
    }

    #[test]
    fn test_serde_round_trip() {
        let json = serde_json::to_string(&MainCategory::See).unwrap();
        assert_eq!(json, "\"see\"");
        let parsed: MainCategory = serde_json::from_str("\"garbage\"").unwrap();
        assert_eq!(parsed, MainCategory::Eat);
    }

    #[test]
    fn test_place_builder() {
        let place = Place::new("Lucali", "best pizza in Brooklyn")
            .with_provider_type("restaurant")
            .with_provider_type("point_of_interest");
        assert_eq!(place.provider_types.len(), 2);
    }

    #[test]
    fn test_fallback_categorization() {
        let fallback = Categorization::fallback();
        assert_eq!(fallback.main_category, MainCategory::Eat);
        assert_eq!(fallback.subtype, "Restaurant");
    }
}
