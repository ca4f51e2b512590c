//! Pocket Battle Engine
//!
//! The battle core of a tile-grid monster RPG: type effectiveness, the damage
//! formula, turn sequencing from move selection to faint, and experience and
//! level progression. Game data is loaded from RON files in `data/`.

// --- MODULE DECLARATIONS ---
pub mod battle;
pub mod battle_interface;
pub mod battle_service;
pub mod effectiveness;
pub mod encounter;
pub mod errors;
pub mod game_data;
pub mod move_data;
pub mod moves;
pub mod pokemon;
pub mod progression;
pub mod species;
pub mod type_chart;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{
    BaseStats, BattleConfig, EncounterData, EncounterEntry, ExperienceGroup, MoveDefinition,
    MoveDefinitions, NeutralMessage, PokemonSpecies, PokemonType, TypeMatchup,
};

// --- From this crate's modules (`src/`) ---

// Battle session, events and opponent behaviour.
pub use battle::ai::{Behavior, RandomAI, ScoringAI};
pub use battle::calculators::{DamageCalculator, DamageResult};
pub use battle::state::{BattleEvent, BattlePhase, EventBus, Side, TurnOutcome, TurnReport};
pub use battle::turn_orchestrator::BattleSession;
pub use battle_service::BattleService;

// Type effectiveness.
pub use effectiveness::{Effectiveness, EffectivenessResolver, EffectivenessResult, SoundCue};
pub use type_chart::TypeChart;

// Runtime data.
pub use encounter::EncounterTable;
pub use game_data::GameData;
pub use move_data::MoveFactory;
pub use moves::Move;
pub use pokemon::{Combatant, PokemonInst};
pub use progression::{ExperienceAward, ExperienceModel, ExperienceReward, RewardCalculator};
pub use species::SpeciesRegistry;

// Crate-specific error and result types.
pub use errors::{
    BattleEngineError, BattleResult, BattleStateError, ConfigError, ConfigResult, MoveDataError,
    MoveDataResult, SpeciesDataError, SpeciesDataResult, TypeChartError, TypeChartResult,
};
