use crate::PokemonType;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A move as written in `moves.ron`; the name is the map key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveDefinition {
    pub move_type: PokemonType,
    pub base_power: u16,
}

/// The full move table: move name -> definition.
pub type MoveDefinitions = BTreeMap<String, MoveDefinition>;
