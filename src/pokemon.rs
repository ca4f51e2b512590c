use crate::moves::Move;
use schema::{BaseStats, ExperienceGroup, PokemonSpecies, PokemonType};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

pub const MOVE_SLOTS: usize = 4;

/// Read/write capabilities the battle core needs from anything that fights.
pub trait Combatant {
    fn name(&self) -> &str;
    fn level(&self) -> u8;
    fn attack(&self) -> u16;
    fn defense(&self) -> u16;
    fn current_hp(&self) -> u16;
    fn max_hp(&self) -> u16;
    fn pokemon_type(&self) -> PokemonType;
    /// Experience gathered toward the next level.
    fn current_exp(&self) -> u32;
    fn exp_to_next_level(&self) -> u32;

    fn set_current_hp(&mut self, hp: u16);
    fn set_level(&mut self, level: u8);
    fn set_experience(&mut self, current: u32, to_next_level: u32);

    fn is_fainted(&self) -> bool {
        self.current_hp() == 0
    }

    /// Subtract `damage` from current HP, flooring at 0. Returns true if this
    /// left the combatant fainted.
    fn take_damage(&mut self, damage: u32) -> bool {
        let remaining = (self.current_hp() as u32).saturating_sub(damage);
        self.set_current_hp(remaining as u16);
        self.is_fainted()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub max_hp: u16,
    pub attack: u16,
    pub defense: u16,
}

/// Colour band of the health bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthBand {
    /// More than half health.
    Healthy,
    /// More than a quarter.
    Wounded,
    Critical,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PokemonInst {
    pub name: String, // Species name if no nickname
    pub species: String,
    pub pokemon_type: PokemonType,
    pub growth: ExperienceGroup,
    pub base_exp: u16,
    pub moves: [Option<Arc<Move>>; MOVE_SLOTS],
    base_stats: BaseStats,
    level: u8,
    curr_stats: Stats,
    current_hp: u16,
    curr_exp: u32,
    exp_to_next: u32,
}

impl PokemonInst {
    /// Create a Pokemon at full health with no experience toward the next level.
    /// Only the first four moves are kept.
    pub fn new(species: &PokemonSpecies, level: u8, moves: Vec<Arc<Move>>) -> Self {
        let level = level.max(1);
        let curr_stats = Self::calculate_stats(&species.base_stats, level);

        let mut move_array: [Option<Arc<Move>>; MOVE_SLOTS] = Default::default();
        for (slot, move_) in move_array.iter_mut().zip(moves) {
            *slot = Some(move_);
        }

        PokemonInst {
            name: species.name.clone(),
            species: species.name.clone(),
            pokemon_type: species.pokemon_type,
            growth: species.growth,
            base_exp: species.base_exp,
            moves: move_array,
            base_stats: species.base_stats.clone(),
            level,
            curr_stats,
            current_hp: curr_stats.max_hp,
            curr_exp: 0,
            exp_to_next: species.growth.exp_between_levels(level),
        }
    }

    /// Stats derived from base stats and level.
    /// HP = floor(2 * Base * Level / 100) + Level + 10
    /// Other = floor(2 * Base * Level / 100) + 5
    pub fn calculate_stats(base_stats: &BaseStats, level: u8) -> Stats {
        let scaled = |base: u8| (2 * base as u32 * level as u32) / 100;
        let cap = |value: u32| value.min(u16::MAX as u32) as u16;

        Stats {
            max_hp: cap(scaled(base_stats.hp) + level as u32 + 10),
            attack: cap(scaled(base_stats.attack) + 5),
            defense: cap(scaled(base_stats.defense) + 5),
        }
    }

    pub fn stats(&self) -> Stats {
        self.curr_stats
    }

    /// Replace derived stats directly. Used for fixed-stat encounters and tests.
    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.curr_stats = stats;
        self.current_hp = stats.max_hp;
        self
    }

    pub fn move_at(&self, slot: usize) -> Option<&Arc<Move>> {
        self.moves.get(slot).and_then(Option::as_ref)
    }

    /// Indices of the slots that hold a move.
    pub fn filled_slots(&self) -> Vec<usize> {
        self.moves
            .iter()
            .enumerate()
            .filter_map(|(i, m)| m.as_ref().map(|_| i))
            .collect()
    }

    pub fn health_band(&self) -> HealthBand {
        let ratio = self.current_hp as f64 / self.curr_stats.max_hp.max(1) as f64;
        if ratio > 0.5 {
            HealthBand::Healthy
        } else if ratio > 0.25 {
            HealthBand::Wounded
        } else {
            HealthBand::Critical
        }
    }

    pub fn health_meter(&self) -> String {
        format!("{}/{}", self.current_hp, self.curr_stats.max_hp)
    }

    pub fn experience_meter(&self) -> String {
        format!("{}/{}", self.curr_exp, self.exp_to_next)
    }
}

impl Combatant for PokemonInst {
    fn name(&self) -> &str {
        &self.name
    }

    fn level(&self) -> u8 {
        self.level
    }

    fn attack(&self) -> u16 {
        self.curr_stats.attack
    }

    fn defense(&self) -> u16 {
        self.curr_stats.defense
    }

    fn current_hp(&self) -> u16 {
        self.current_hp
    }

    fn max_hp(&self) -> u16 {
        self.curr_stats.max_hp
    }

    fn pokemon_type(&self) -> PokemonType {
        self.pokemon_type
    }

    fn current_exp(&self) -> u32 {
        self.curr_exp
    }

    fn exp_to_next_level(&self) -> u32 {
        self.exp_to_next
    }

    fn set_current_hp(&mut self, hp: u16) {
        self.current_hp = hp.min(self.curr_stats.max_hp);
    }

    /// Recalculates stats; HP grows by the max HP gained unless fainted.
    fn set_level(&mut self, level: u8) {
        let level = level.max(1);
        let old_max = self.curr_stats.max_hp;
        self.level = level;
        self.curr_stats = Self::calculate_stats(&self.base_stats, level);

        if self.current_hp > 0 {
            let gained = self.curr_stats.max_hp.saturating_sub(old_max);
            self.current_hp = self
                .current_hp
                .saturating_add(gained)
                .min(self.curr_stats.max_hp);
        }
    }

    fn set_experience(&mut self, current: u32, to_next_level: u32) {
        self.curr_exp = current;
        self.exp_to_next = to_next_level;
    }
}

impl fmt::Display for PokemonInst {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} Lv{} [{}] HP: {}",
            self.name.to_uppercase(),
            self.level,
            self.pokemon_type,
            self.health_meter()
        )?;
        if f.alternate() {
            write!(
                f,
                "\nEXP: {}\nATK: {} DEF: {}",
                self.experience_meter(),
                self.curr_stats.attack,
                self.curr_stats.defense
            )?;
        }
        Ok(())
    }
}
