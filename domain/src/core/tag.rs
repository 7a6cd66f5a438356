//! Tag value object

use serde::{Deserialize, Serialize};

/// A taste tag contributed by a selected onboarding option (Value Object)
///
/// Tags are opaque, case-sensitive tokens (e.g. `"brunch"`, `"club"`).
/// Membership in a persona's tag set is their only semantics; aggregation
/// treats them as a set, so duplicates collapse.
///
/// # Example
///
/// ```
/// use taste_domain::Tag;
///
/// let a = Tag::new("brunch");
/// let b: Tag = "brunch".into();
/// assert_eq!(a, b);
/// assert_ne!(Tag::new("Brunch"), b); // case-sensitive
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Create a new tag
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Get the tag token
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner token
    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Tag {
    fn from(s: &str) -> Self {
        Tag::new(s)
    }
}

impl From<String> for Tag {
    fn from(s: String) -> Self {
        Tag::new(s)
    }
}
