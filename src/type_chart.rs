//! Attacking-type vs defending-type damage multipliers.

use crate::errors::{TypeChartError, TypeChartResult};
use ordered_float::OrderedFloat;
use schema::{PokemonType, TypeMatchup};
use std::collections::{BTreeSet, HashMap};

pub const SUPER_EFFECTIVE: f64 = 2.0;
pub const NEUTRAL: f64 = 1.0;
pub const NOT_VERY_EFFECTIVE: f64 = 0.5;

/// Multipliers the effectiveness messages are written for.
pub const STANDARD_MULTIPLIERS: [f64; 3] = [NOT_VERY_EFFECTIVE, NEUTRAL, SUPER_EFFECTIVE];

pub fn is_standard_multiplier(multiplier: f64) -> bool {
    STANDARD_MULTIPLIERS.contains(&multiplier)
}

/// The chart shipped with the game. Every pair over the four types is listed.
const STANDARD_MATCHUPS: [(PokemonType, PokemonType, f64); 16] = {
    use PokemonType::*;
    [
        (Fire, Fire, NEUTRAL),
        (Fire, Water, NOT_VERY_EFFECTIVE),
        (Fire, Grass, SUPER_EFFECTIVE),
        (Fire, Normal, NEUTRAL),
        (Water, Fire, SUPER_EFFECTIVE),
        (Water, Water, NEUTRAL),
        (Water, Grass, NOT_VERY_EFFECTIVE),
        (Water, Normal, NEUTRAL),
        (Grass, Fire, NOT_VERY_EFFECTIVE),
        (Grass, Water, SUPER_EFFECTIVE),
        (Grass, Grass, NEUTRAL),
        (Grass, Normal, NEUTRAL),
        (Normal, Fire, NEUTRAL),
        (Normal, Water, NEUTRAL),
        (Normal, Grass, NEUTRAL),
        (Normal, Normal, NEUTRAL),
    ]
};

/// Immutable type chart. Once built, every pair over its domain resolves.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeChart {
    entries: HashMap<(PokemonType, PokemonType), f64>,
    domain: BTreeSet<PokemonType>,
}

impl TypeChart {
    /// The Fire/Water/Grass/Normal chart.
    pub fn standard() -> Self {
        let entries: HashMap<_, _> = STANDARD_MATCHUPS
            .iter()
            .map(|&(attacking, defending, multiplier)| ((attacking, defending), multiplier))
            .collect();
        let domain = STANDARD_MATCHUPS
            .iter()
            .flat_map(|&(attacking, defending, _)| [attacking, defending])
            .collect();
        Self { entries, domain }
    }

    /// Build a chart from configured matchups.
    ///
    /// The domain is every type mentioned in `matchups`; each pair over it
    /// must appear exactly once with a multiplier from `allowed`.
    pub fn from_matchups(matchups: &[TypeMatchup], allowed: &[f64]) -> TypeChartResult<Self> {
        let mut allowed_set = BTreeSet::new();
        for &value in allowed {
            if !value.is_finite() || value <= 0.0 {
                return Err(TypeChartError::InvalidAllowedMultiplier(value));
            }
            allowed_set.insert(OrderedFloat(value));
        }

        let mut entries = HashMap::with_capacity(matchups.len());
        let mut domain = BTreeSet::new();

        for matchup in matchups {
            let TypeMatchup {
                attacking,
                defending,
                multiplier,
            } = *matchup;

            if !allowed_set.contains(&OrderedFloat(multiplier)) {
                return Err(TypeChartError::DisallowedMultiplier {
                    attacking,
                    defending,
                    multiplier,
                });
            }
            if entries.insert((attacking, defending), multiplier).is_some() {
                return Err(TypeChartError::DuplicateEntry {
                    attacking,
                    defending,
                });
            }
            domain.insert(attacking);
            domain.insert(defending);
        }

        for &attacking in &domain {
            for &defending in &domain {
                if !entries.contains_key(&(attacking, defending)) {
                    return Err(TypeChartError::MissingEntry {
                        attacking,
                        defending,
                    });
                }
            }
        }

        let chart = Self { entries, domain };
        for multiplier in chart.nonstandard_multipliers() {
            tracing::warn!(
                multiplier,
                "type chart uses a multiplier outside 0.5/1.0/2.0; hits with it are reported as neutral"
            );
        }
        Ok(chart)
    }

    /// Multiplier for `attacking` hitting `defending`.
    ///
    /// A type outside the chart is not an error: the hit is treated as
    /// neutral and a warning is logged.
    pub fn multiplier(&self, attacking: PokemonType, defending: PokemonType) -> f64 {
        match self.lookup(attacking, defending) {
            Some(multiplier) => multiplier,
            None => {
                if !self.covers(attacking) {
                    tracing::warn!(%attacking, "unknown move type, using neutral multiplier");
                } else {
                    tracing::warn!(
                        %attacking,
                        %defending,
                        "unknown defending type, using neutral multiplier"
                    );
                }
                NEUTRAL
            }
        }
    }

    /// Raw lookup without the neutral fallback.
    pub fn lookup(&self, attacking: PokemonType, defending: PokemonType) -> Option<f64> {
        self.entries.get(&(attacking, defending)).copied()
    }

    pub fn covers(&self, pokemon_type: PokemonType) -> bool {
        self.domain.contains(&pokemon_type)
    }

    /// Distinct multipliers in the chart that are not 0.5, 1.0 or 2.0, ascending.
    pub fn nonstandard_multipliers(&self) -> Vec<f64> {
        self.entries
            .values()
            .copied()
            .filter(|&multiplier| !is_standard_multiplier(multiplier))
            .map(OrderedFloat)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(|multiplier| multiplier.0)
            .collect()
    }

    /// Types in the chart's domain, in declaration order.
    pub fn types(&self) -> impl Iterator<Item = PokemonType> + '_ {
        self.domain.iter().copied()
    }
}

impl Default for TypeChart {
    fn default() -> Self {
        Self::standard()
    }
}
