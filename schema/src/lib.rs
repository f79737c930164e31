// Starter Duel Schema - Shared type definitions
// This crate contains the static data shapes (elemental types, moves and
// creature templates) consumed by the battle engine. Raw records mirror the
// on-disk roster format; templates are the validated form.

pub use creature_data::*;
pub use element_types::*;
pub use move_data::*;

pub mod creature_data;
pub mod element_types;
pub mod move_data;
