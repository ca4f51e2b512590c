use crate::battle::calculators::{DamageCalculator, DamageResult};
use crate::errors::{MoveDataError, MoveDataResult};
use crate::pokemon::Combatant;
use schema::PokemonType;
use serde::Serialize;
use std::fmt;

/// An attack definition. Immutable once built; shared between combatants.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Move {
    name: String,
    move_type: PokemonType,
    base_power: u16,
}

impl Move {
    pub fn new(name: impl Into<String>, move_type: PokemonType, base_power: u16) -> MoveDataResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(MoveDataError::EmptyName);
        }
        if base_power == 0 {
            return Err(MoveDataError::ZeroBasePower(name));
        }
        Ok(Self {
            name,
            move_type,
            base_power,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn move_type(&self) -> PokemonType {
        self.move_type
    }

    pub fn base_power(&self) -> u16 {
        self.base_power
    }

    /// Damage this move would do, without touching either side.
    pub fn calculate_damage<A, D>(
        &self,
        calculator: &DamageCalculator,
        attacker: &A,
        defender: &D,
    ) -> DamageResult
    where
        A: Combatant + ?Sized,
        D: Combatant + ?Sized,
    {
        calculator.compute_damage(
            attacker.level(),
            attacker.attack(),
            self.base_power,
            defender.defense(),
            self.move_type,
            defender.pokemon_type(),
        )
    }

    /// Use this move: the defender loses `final_damage` HP, floored at 0.
    pub fn resolve<A, D>(
        &self,
        calculator: &DamageCalculator,
        attacker: &A,
        defender: &mut D,
    ) -> DamageResult
    where
        A: Combatant + ?Sized,
        D: Combatant + ?Sized,
    {
        let result = self.calculate_damage(calculator, attacker, defender);
        defender.take_damage(result.final_damage);
        result
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}] Power: {}", self.name, self.move_type, self.base_power)
    }
}
