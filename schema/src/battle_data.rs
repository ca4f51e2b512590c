use serde::{Deserialize, Serialize};

/// What to say when a hit is neither super effective nor resisted.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NeutralMessage {
    /// No message at all.
    #[default]
    Silent,
    /// "Not anything special, you can do better!"
    Descriptive,
}

/// Tunables read from `battle.ron`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BattleConfig {
    pub neutral_message: NeutralMessage,
    pub max_level: u8,
    /// Multipliers a configured type chart may contain.
    pub allowed_multipliers: Vec<f64>,
    /// Divisor in the experience yield `base_exp * level / divisor`.
    pub experience_divisor: u32,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            neutral_message: NeutralMessage::Silent,
            max_level: 100,
            allowed_multipliers: vec![0.5, 1.0, 2.0],
            experience_divisor: 7,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct EncounterEntry {
    pub species: String,
    pub min_level: u8,
    pub max_level: u8,
    pub weight: u32,
}

/// Wild encounter rules read from `encounters.ron`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EncounterData {
    /// Chance per step on a grass tile, in `[0, 1]`.
    pub chance: f64,
    pub entries: Vec<EncounterEntry>,
}
