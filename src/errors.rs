use crate::battle::state::BattlePhase;
use schema::PokemonType;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the battle engine
#[derive(Debug, Error)]
pub enum BattleEngineError {
    /// Error related to move data lookup or processing
    #[error("Move data error: {0}")]
    MoveData(#[from] MoveDataError),
    /// Error related to species data lookup or processing
    #[error("Species data error: {0}")]
    SpeciesData(#[from] SpeciesDataError),
    /// Error related to invalid battle state
    #[error("Battle state error: {0}")]
    BattleState(#[from] BattleStateError),
    /// Error raised while loading game data
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors related to move data operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveDataError {
    /// A move was referenced that was never loaded
    #[error("Move \"{0}\" not found in move definitions")]
    MoveNotFound(String),
    /// Moves must hit for at least 1 power
    #[error("Move \"{0}\" has a base power of 0")]
    ZeroBasePower(String),
    #[error("Move name must not be empty")]
    EmptyName,
    #[error("Move \"{0}\" is defined more than once")]
    DuplicateMove(String),
}

/// Errors related to species data operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeciesDataError {
    #[error("Species \"{0}\" not found")]
    SpeciesNotFound(String),
    #[error("Species \"{0}\" is defined more than once")]
    DuplicateSpecies(String),
    #[error("Species \"{species}\" has an invalid level {level}")]
    InvalidLevel { species: String, level: u8 },
    #[error("No wild Pokemon are listed for this area")]
    EmptyEncounterTable,
    #[error("Species \"{species}\": {source}")]
    Learnset {
        species: String,
        #[source]
        source: MoveDataError,
    },
}

/// Errors in a configured type chart
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TypeChartError {
    #[error("Type chart has no entry for {attacking} attacking {defending}")]
    MissingEntry {
        attacking: PokemonType,
        defending: PokemonType,
    },
    #[error("Type chart lists {attacking} attacking {defending} more than once")]
    DuplicateEntry {
        attacking: PokemonType,
        defending: PokemonType,
    },
    #[error("Multiplier {multiplier} for {attacking} attacking {defending} is not allowed")]
    DisallowedMultiplier {
        attacking: PokemonType,
        defending: PokemonType,
        multiplier: f64,
    },
    #[error("Allowed multipliers must be finite and positive, got {0}")]
    InvalidAllowedMultiplier(f64),
}

/// Errors related to battle state validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BattleStateError {
    #[error("Expected phase {expected:?} but battle is in {actual:?}")]
    InvalidPhase {
        expected: BattlePhase,
        actual: BattlePhase,
    },
    /// Running is only possible while a move is being chosen
    #[error("Cannot run away during {0:?}")]
    CannotFlee(BattlePhase),
    #[error("The battle is already over ({0:?})")]
    BattleOver(BattlePhase),
}

/// Errors raised while loading the game data files
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse {file}: {source}")]
    Parse {
        file: String,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("Invalid value in {file}: {details}")]
    InvalidValue { file: String, details: String },
    #[error(transparent)]
    TypeChart(#[from] TypeChartError),
    #[error(transparent)]
    MoveData(#[from] MoveDataError),
    #[error(transparent)]
    SpeciesData(#[from] SpeciesDataError),
}

/// Type alias for Results using BattleEngineError
pub type BattleResult<T> = Result<T, BattleEngineError>;

/// Type alias for Results using MoveDataError
pub type MoveDataResult<T> = Result<T, MoveDataError>;

/// Type alias for Results using SpeciesDataError
pub type SpeciesDataResult<T> = Result<T, SpeciesDataError>;

pub type TypeChartResult<T> = Result<T, TypeChartError>;

pub type ConfigResult<T> = Result<T, ConfigError>;
