//! Error handling for the Scrabble backend.

pub mod domain;

pub use domain::DomainError;
