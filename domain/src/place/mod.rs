//! Place categorizer: eat/see taxonomy and the ambiguity gate

pub mod ambiguity;
pub mod categorizer;
pub mod entities;
pub mod taxonomy;

pub use ambiguity::needs_ai_classification;
pub use categorizer::categorize;
pub use entities::{Categorization, MainCategory, Place};
pub use taxonomy::{CuisineRule, PlaceTaxonomy, SeeRule};
