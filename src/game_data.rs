//! Loading of the RON data files that define a game: type chart, moves,
//! species, wild encounters and battle tunables.

use crate::battle::ai::Behavior;
use crate::battle::calculators::DamageCalculator;
use crate::battle::turn_orchestrator::BattleSession;
use crate::effectiveness::EffectivenessResolver;
use crate::encounter::EncounterTable;
use crate::errors::{ConfigError, ConfigResult, SpeciesDataResult};
use crate::move_data::MoveFactory;
use crate::pokemon::PokemonInst;
use crate::progression::{ExperienceModel, RewardCalculator};
use crate::species::SpeciesRegistry;
use crate::type_chart::TypeChart;
use rand::Rng;
use schema::{BattleConfig, MoveDefinitions, PokemonSpecies, TypeMatchup};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

pub const TYPE_CHART_FILE: &str = "type_chart.ron";
pub const MOVES_FILE: &str = "moves.ron";
pub const SPECIES_FILE: &str = "species.ron";
pub const ENCOUNTERS_FILE: &str = "encounters.ron";
pub const BATTLE_FILE: &str = "battle.ron";

/// Raw contents of the five data files.
#[derive(Debug, Clone, Copy)]
pub struct DataSources<'a> {
    pub type_chart: &'a str,
    pub moves: &'a str,
    pub species: &'a str,
    pub encounters: &'a str,
    pub battle: &'a str,
}

impl DataSources<'static> {
    /// The data files shipped in `data/`, compiled into the binary.
    pub fn builtin() -> Self {
        Self {
            type_chart: include_str!("../data/type_chart.ron"),
            moves: include_str!("../data/moves.ron"),
            species: include_str!("../data/species.ron"),
            encounters: include_str!("../data/encounters.ron"),
            battle: include_str!("../data/battle.ron"),
        }
    }
}

/// Everything loaded once at startup and shared, read-only, by every battle.
#[derive(Debug, Clone)]
pub struct GameData {
    pub type_chart: Arc<TypeChart>,
    pub moves: MoveFactory,
    pub species: SpeciesRegistry,
    pub encounters: EncounterTable,
    pub config: BattleConfig,
}

impl GameData {
    pub fn builtin() -> ConfigResult<Self> {
        Self::from_sources(DataSources::builtin())
    }

    /// Read the data files from `dir`.
    pub fn load(dir: &Path) -> ConfigResult<Self> {
        let read = |file: &str| {
            let path = dir.join(file);
            fs::read_to_string(&path).map_err(|source| ConfigError::Io { path, source })
        };

        let type_chart = read(TYPE_CHART_FILE)?;
        let moves = read(MOVES_FILE)?;
        let species = read(SPECIES_FILE)?;
        let encounters = read(ENCOUNTERS_FILE)?;
        let battle = read(BATTLE_FILE)?;

        Self::from_sources(DataSources {
            type_chart: &type_chart,
            moves: &moves,
            species: &species,
            encounters: &encounters,
            battle: &battle,
        })
    }

    pub fn from_sources(sources: DataSources<'_>) -> ConfigResult<Self> {
        let config: BattleConfig = parse(BATTLE_FILE, sources.battle)?;
        validate_config(&config)?;

        let matchups: Vec<TypeMatchup> = parse(TYPE_CHART_FILE, sources.type_chart)?;
        let type_chart = TypeChart::from_matchups(&matchups, &config.allowed_multipliers)?;

        let definitions: MoveDefinitions = parse(MOVES_FILE, sources.moves)?;
        let moves = MoveFactory::load(&definitions)?;

        let species_list: Vec<PokemonSpecies> = parse(SPECIES_FILE, sources.species)?;
        let species = SpeciesRegistry::load(species_list, &moves)?;

        let encounters = EncounterTable::new(parse(ENCOUNTERS_FILE, sources.encounters)?, &species)?;

        info!(
            types = type_chart.types().count(),
            moves = moves.len(),
            species = species.len(),
            "game data loaded"
        );

        Ok(Self {
            type_chart: Arc::new(type_chart),
            moves,
            species,
            encounters,
            config,
        })
    }

    pub fn resolver(&self) -> EffectivenessResolver {
        EffectivenessResolver::new(Arc::clone(&self.type_chart), self.config.neutral_message)
    }

    pub fn calculator(&self) -> DamageCalculator {
        DamageCalculator::new(self.resolver())
    }

    pub fn experience_model(&self) -> ExperienceModel {
        ExperienceModel::new(self.config.max_level)
    }

    pub fn rewards(&self) -> RewardCalculator {
        RewardCalculator::new(self.config.experience_divisor)
    }

    pub fn create_pokemon(&self, species: &str, level: u8) -> SpeciesDataResult<PokemonInst> {
        self.species.create_pokemon(species, level, &self.moves)
    }

    pub fn generate_wild_opponent<R: Rng>(&self, rng: &mut R) -> SpeciesDataResult<PokemonInst> {
        self.encounters
            .generate_opponent(&self.species, &self.moves, rng)
    }

    /// A battle wired with this data's chart, experience rules and rewards.
    pub fn start_battle(
        &self,
        player: PokemonInst,
        opponent: PokemonInst,
        behavior: Box<dyn Behavior>,
    ) -> BattleSession {
        BattleSession::new(player, opponent, self.calculator(), behavior)
            .with_experience_model(self.experience_model())
            .with_rewards(Box::new(self.rewards()))
    }
}

fn parse<T: DeserializeOwned>(file: &str, source: &str) -> ConfigResult<T> {
    ron::from_str(source).map_err(|source| ConfigError::Parse {
        file: file.to_string(),
        source,
    })
}

fn validate_config(config: &BattleConfig) -> ConfigResult<()> {
    let invalid = |details: &str| {
        Err(ConfigError::InvalidValue {
            file: BATTLE_FILE.to_string(),
            details: details.to_string(),
        })
    };
    if config.max_level == 0 {
        return invalid("max_level must be at least 1");
    }
    if config.experience_divisor == 0 {
        return invalid("experience_divisor must be at least 1");
    }
    if config.allowed_multipliers.is_empty() {
        return invalid("allowed_multipliers must not be empty");
    }
    Ok(())
}
