// Pocket Battle Schema - Shared type definitions
// This crate contains the enums and plain data records that the game data
// files (RON) deserialize into. The battle crate builds its runtime types
// (type chart, moves, combatants) from these.

// Re-export the main types
pub use battle_data::*;
pub use move_types::*;
pub use pokemon_types::*;
pub use species_data::*;

pub mod battle_data;
pub mod move_types;
pub mod pokemon_types;
pub mod species_data;
