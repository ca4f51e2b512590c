use crate::pokemon::{Combatant, PokemonInst};
use std::fmt;

pub const DEFAULT_EXPERIENCE_DIVISOR: u32 = 7;

/// How much experience defeating a Pokemon is worth.
pub trait ExperienceReward: fmt::Debug + Send {
    fn experience_for(&self, defeated: &PokemonInst) -> u32;
}

/// Experience yield: `base_exp * level / divisor`, never less than 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RewardCalculator {
    divisor: u32,
}

impl RewardCalculator {
    pub fn new(divisor: u32) -> Self {
        Self {
            divisor: divisor.max(1),
        }
    }

    pub fn divisor(&self) -> u32 {
        self.divisor
    }
}

impl Default for RewardCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_EXPERIENCE_DIVISOR)
    }
}

impl ExperienceReward for RewardCalculator {
    fn experience_for(&self, defeated: &PokemonInst) -> u32 {
        let raw = defeated.base_exp as u32 * defeated.level() as u32 / self.divisor;
        raw.max(1)
    }
}
