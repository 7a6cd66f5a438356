//! Core value objects and errors shared across the domain

pub mod error;
pub mod tag;
pub mod validation;
