use crate::battle::ai::{Behavior, ScoringAI};
use crate::battle::calculators::DamageCalculator;
use crate::battle::turn_orchestrator::BattleSession;
use crate::errors::BattleResult;
use crate::moves::Move;
use crate::pokemon::{Combatant, PokemonInst, Stats};
use schema::{BaseStats, ExperienceGroup, PokemonSpecies, PokemonType};
use std::sync::Arc;

/// A builder for creating test Pokemon instances with common defaults.
///
/// # Example
/// ```ignore
/// let pokemon = TestPokemonBuilder::new(PokemonType::Water, 10)
///     .with_stats(40, 20, 15)
///     .with_moves(vec![test_move("Water Gun", PokemonType::Water, 40)])
///     .with_hp(12)
///     .build();
/// ```
pub struct TestPokemonBuilder {
    pokemon_type: PokemonType,
    level: u8,
    name: Option<String>,
    stats: Option<Stats>,
    moves: Vec<Arc<Move>>,
    current_hp: Option<u16>,
    base_exp: u16,
    growth: ExperienceGroup,
}

impl TestPokemonBuilder {
    /// Creates a new builder for a given type and level.
    pub fn new(pokemon_type: PokemonType, level: u8) -> Self {
        Self {
            pokemon_type,
            level,
            name: None,
            stats: None,
            moves: Vec::new(),
            current_hp: None,
            base_exp: 50,
            growth: ExperienceGroup::MediumFast,
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// Overrides the derived stats. HP starts at the new max.
    pub fn with_stats(mut self, max_hp: u16, attack: u16, defense: u16) -> Self {
        self.stats = Some(Stats {
            max_hp,
            attack,
            defense,
        });
        self
    }

    pub fn with_moves(mut self, moves: Vec<Arc<Move>>) -> Self {
        self.moves = moves;
        self
    }

    /// Sets the current HP for the test Pokemon. If not set, HP will be max.
    pub fn with_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    pub fn with_base_exp(mut self, base_exp: u16) -> Self {
        self.base_exp = base_exp;
        self
    }

    pub fn with_growth(mut self, growth: ExperienceGroup) -> Self {
        self.growth = growth;
        self
    }

    /// Builds the `PokemonInst`.
    pub fn build(self) -> PokemonInst {
        let name = self
            .name
            .unwrap_or_else(|| format!("Test{}", self.pokemon_type));
        let species = PokemonSpecies {
            name,
            pokemon_type: self.pokemon_type,
            base_stats: BaseStats {
                hp: 50,
                attack: 50,
                defense: 50,
            },
            base_exp: self.base_exp,
            growth: self.growth,
            learnset: Vec::new(),
        };

        let mut pokemon = PokemonInst::new(&species, self.level, self.moves);
        if let Some(stats) = self.stats {
            pokemon = pokemon.with_stats(stats);
        }
        if let Some(hp) = self.current_hp {
            pokemon.set_current_hp(hp);
        }
        pokemon
    }
}

/// A standalone move for tests.
pub fn test_move(name: &str, move_type: PokemonType, base_power: u16) -> Arc<Move> {
    match Move::new(name, move_type, base_power) {
        Ok(move_) => Arc::new(move_),
        Err(err) => panic!("Failed to build test move {}: {}", name, err),
    }
}

/// Creates a battle on the standard chart with a damage-maximising opponent.
pub fn create_test_session(player: PokemonInst, opponent: PokemonInst) -> BattleSession {
    create_test_session_with(player, opponent, Box::new(ScoringAI::new()))
}

pub fn create_test_session_with(
    player: PokemonInst,
    opponent: PokemonInst,
    behavior: Box<dyn Behavior>,
) -> BattleSession {
    BattleSession::new(player, opponent, DamageCalculator::default(), behavior)
}

/// Helper function to assert that a Result is Ok and return the value.
/// Provides clear error messages in tests when functions unexpectedly fail.
pub fn assert_ok<T, E: Into<crate::errors::BattleEngineError>>(result: Result<T, E>) -> T {
    let result: BattleResult<T> = result.map_err(Into::into);
    match result {
        Ok(value) => value,
        Err(err) => panic!("Expected Ok but got error: {}", err),
    }
}
