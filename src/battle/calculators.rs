use crate::effectiveness::{EffectivenessResolver, EffectivenessResult};
use schema::PokemonType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DamageResult {
    /// Damage after the type multiplier; at least 1.
    pub final_damage: u32,
    /// Damage before the type multiplier; at least 1.
    pub base_damage: u32,
    pub effectiveness: EffectivenessResult,
}

/// Damage before type effectiveness.
///
/// `floor(((2 * level / 5 + 2) * power * (attack / defense)) / 50 + 2)`, at least 1.
pub fn base_damage(level: u8, attack: u16, power: u16, defense: u16) -> u32 {
    let level = level as f64;
    let ratio = attack as f64 / defense as f64;
    let raw = ((2.0 * level / 5.0 + 2.0) * power as f64 * ratio) / 50.0 + 2.0;
    // `as` saturates and maps NaN to 0, which the floor of 1 then covers.
    (raw.floor() as u32).max(1)
}

/// Apply a type multiplier to already-floored base damage, at least 1.
pub fn apply_multiplier(base_damage: u32, multiplier: f64) -> u32 {
    ((base_damage as f64 * multiplier).floor() as u32).max(1)
}

/// Calculates damage for one hit.
#[derive(Debug, Clone, Default)]
pub struct DamageCalculator {
    resolver: EffectivenessResolver,
}

impl DamageCalculator {
    pub fn new(resolver: EffectivenessResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &EffectivenessResolver {
        &self.resolver
    }

    pub fn compute_damage(
        &self,
        attacker_level: u8,
        attacker_attack: u16,
        move_power: u16,
        defender_defense: u16,
        attack_type: PokemonType,
        defender_type: PokemonType,
    ) -> DamageResult {
        let effectiveness = self.resolver.effectiveness_info(attack_type, defender_type);
        let base_damage = base_damage(attacker_level, attacker_attack, move_power, defender_defense);
        let final_damage = apply_multiplier(base_damage, effectiveness.multiplier);

        DamageResult {
            final_damage,
            base_damage,
            effectiveness,
        }
    }
}
