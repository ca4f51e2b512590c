use crate::pokemon::Combatant;
use schema::ExperienceGroup;
use serde::Serialize;
use tracing::info;

pub const DEFAULT_MAX_LEVEL: u8 = 100;

/// Experience needed to advance from a level to the next.
pub trait ExperienceCurve {
    fn exp_to_next_level(&self, level: u8) -> u32;
}

impl ExperienceCurve for ExperienceGroup {
    fn exp_to_next_level(&self, level: u8) -> u32 {
        self.exp_between_levels(level)
    }
}

/// Result of one experience award.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExperienceAward {
    pub previous_level: u8,
    pub new_level: u8,
    /// Progress toward the next level after the award.
    pub new_experience: u32,
    pub experience_to_next_level: u32,
    pub leveled_up: bool,
}

impl ExperienceAward {
    pub fn levels_gained(&self) -> u8 {
        self.new_level.saturating_sub(self.previous_level)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceModel {
    max_level: u8,
}

impl ExperienceModel {
    pub fn new(max_level: u8) -> Self {
        Self {
            max_level: max_level.max(1),
        }
    }

    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    /// Add `amount` to the combatant's progress and apply every level-up it
    /// pays for. At the max level experience still accumulates but the level
    /// no longer changes.
    pub fn award_experience<C>(
        &self,
        combatant: &mut C,
        amount: u32,
        curve: &dyn ExperienceCurve,
    ) -> ExperienceAward
    where
        C: Combatant + ?Sized,
    {
        let previous_level = combatant.level();
        let mut level = previous_level;
        let mut experience = combatant.current_exp().saturating_add(amount);
        let mut threshold = Self::threshold(curve, level);

        while level < self.max_level && experience >= threshold {
            experience -= threshold;
            level += 1;
            threshold = Self::threshold(curve, level);
        }

        if level != previous_level {
            combatant.set_level(level);
            info!(
                pokemon = combatant.name(),
                from = previous_level,
                to = level,
                "level up"
            );
        }
        combatant.set_experience(experience, threshold);

        ExperienceAward {
            previous_level,
            new_level: level,
            new_experience: experience,
            experience_to_next_level: threshold,
            leveled_up: level > previous_level,
        }
    }

    // A zero-cost level would let the loop above spin through every level.
    fn threshold(curve: &dyn ExperienceCurve, level: u8) -> u32 {
        curve.exp_to_next_level(level).max(1)
    }
}

impl Default for ExperienceModel {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LEVEL)
    }
}
