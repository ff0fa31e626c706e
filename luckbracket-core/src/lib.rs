//! LUCKBRACKET Core - Contestants and scoring
//!
//! This crate provides the domain types for the tournament luck experiment:
//! - Contestant attributes (talent, effort, luck)
//! - Merit and final score derivations
//! - Bracket field generation
//! - The shared error taxonomy

pub mod contestant;
pub mod error;
pub mod field;

// Re-exports for convenient access
pub use contestant::{Contestant, ATTRIBUTE_MAX, EFFORT_WEIGHT, LUCK_WEIGHT, TALENT_WEIGHT};
pub use error::SimError;
pub use field::{generate_field, MAX_ROUNDS};
