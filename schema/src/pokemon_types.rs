use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Elemental type of a move or a Pokemon.
///
/// Only `Normal`, `Fire`, `Water` and `Grass` appear in the standard type
/// chart. The remaining variants are valid identities that a chart may or may
/// not cover; lookups involving an uncovered type fall back to neutral.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Grass,
    Electric,
    Typeless,
}

/// One cell of a type chart as written in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeMatchup {
    pub attacking: PokemonType,
    pub defending: PokemonType,
    pub multiplier: f64,
}
