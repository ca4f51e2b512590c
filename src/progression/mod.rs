pub mod experience;
pub mod rewards;

pub use experience::{ExperienceAward, ExperienceCurve, ExperienceModel};
pub use rewards::{ExperienceReward, RewardCalculator};
