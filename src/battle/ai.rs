//! A module for defining AI behaviors for battle opponents.

use crate::battle::calculators::DamageCalculator;
use crate::pokemon::{Combatant, PokemonInst};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::fmt;

/// A trait for any system that can pick the opponent's move.
/// This provides a common interface for different AI difficulties or strategies.
pub trait Behavior: fmt::Debug + Send {
    /// Returns the move slot to use, or None when the attacker has no moves.
    fn choose_move(
        &mut self,
        attacker: &PokemonInst,
        defender: &PokemonInst,
        calculator: &DamageCalculator,
    ) -> Option<usize>;
}

/// Picks uniformly among the filled move slots.
#[derive(Debug, Clone)]
pub struct RandomAI {
    rng: StdRng,
}

impl RandomAI {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Reproducible choices for tests and replays.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAI {
    fn default() -> Self {
        Self::new()
    }
}

impl Behavior for RandomAI {
    fn choose_move(
        &mut self,
        attacker: &PokemonInst,
        _defender: &PokemonInst,
        _calculator: &DamageCalculator,
    ) -> Option<usize> {
        attacker.filled_slots().choose(&mut self.rng).copied()
    }
}

/// Picks the move expected to do the most damage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoringAI;

impl ScoringAI {
    pub fn new() -> Self {
        Self
    }

    /// Share of the defender's remaining HP the move would take, capped at 1.0,
    /// so every knockout scores the same.
    fn score_move(
        &self,
        slot: usize,
        attacker: &PokemonInst,
        defender: &PokemonInst,
        calculator: &DamageCalculator,
    ) -> f64 {
        let Some(move_) = attacker.move_at(slot) else {
            return -1.0;
        };
        let damage = move_.calculate_damage(calculator, attacker, defender).final_damage;
        let remaining = defender.current_hp().max(1) as f64;
        (damage as f64 / remaining).min(1.0)
    }
}

impl Behavior for ScoringAI {
    fn choose_move(
        &mut self,
        attacker: &PokemonInst,
        defender: &PokemonInst,
        calculator: &DamageCalculator,
    ) -> Option<usize> {
        // max_by_key keeps the last maximum, so walk slots backwards to
        // resolve ties toward the lowest slot.
        attacker
            .filled_slots()
            .into_iter()
            .rev()
            .max_by_key(|&slot| OrderedFloat(self.score_move(slot, attacker, defender, calculator)))
    }
}
