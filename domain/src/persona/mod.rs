//! Persona engine: scoring and selection over the persona catalog

pub mod catalog;
pub mod entities;
pub mod scorer;
pub mod selector;

pub use catalog::default_personas;
pub use entities::{Persona, PersonaAssignment, PersonaId};
pub use scorer::{PersonaScore, score_personas};
pub use selector::{SECONDARY_SCORE_THRESHOLD, select_personas};
