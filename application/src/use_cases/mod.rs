//! Use cases invoked by external collaborators

pub mod assign_persona;
pub mod categorize_place;

pub use assign_persona::{AssignPersonaInput, AssignPersonaOutput, AssignPersonaUseCase};
pub use categorize_place::{CategorizePlaceOutput, CategorizePlaceUseCase, CategorySource};
