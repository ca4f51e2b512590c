use crate::PokemonType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u8,
    pub attack: u8,
    pub defense: u8,
}

/// Growth rate of a species: how much total experience a level costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceGroup {
    Fast,
    MediumFast,
    Slow,
}

impl ExperienceGroup {
    /// Total experience needed to reach `level` from level 1.
    pub fn exp_for_level(&self, level: u8) -> u32 {
        if level <= 1 {
            return 0;
        }
        let n = level as u32;
        let cube = n * n * n;
        match self {
            ExperienceGroup::Fast => cube * 4 / 5,
            ExperienceGroup::MediumFast => cube,
            ExperienceGroup::Slow => cube * 5 / 4,
        }
    }

    /// Experience needed to go from `level` to `level + 1`.
    pub fn exp_between_levels(&self, level: u8) -> u32 {
        let next = level.saturating_add(1);
        self.exp_for_level(next)
            .saturating_sub(self.exp_for_level(level))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub name: String,
    pub pokemon_type: PokemonType,
    pub base_stats: BaseStats,
    pub base_exp: u16,
    pub growth: ExperienceGroup,
    /// Move names in the order they are learned.
    pub learnset: Vec<String>,
}
