use crate::errors::{ConfigError, ConfigResult, SpeciesDataError, SpeciesDataResult};
use crate::game_data::ENCOUNTERS_FILE;
use crate::move_data::MoveFactory;
use crate::pokemon::PokemonInst;
use crate::species::SpeciesRegistry;
use rand::seq::IndexedRandom;
use rand::Rng;
use schema::{EncounterData, EncounterEntry};
use tracing::debug;

/// Wild Pokemon that can appear while walking through grass.
#[derive(Debug, Clone, PartialEq)]
pub struct EncounterTable {
    chance: f64,
    entries: Vec<EncounterEntry>,
}

impl EncounterTable {
    /// Validate the raw table against the loaded species.
    pub fn new(data: EncounterData, species: &SpeciesRegistry) -> ConfigResult<Self> {
        let invalid = |details: String| ConfigError::InvalidValue {
            file: ENCOUNTERS_FILE.to_string(),
            details,
        };

        if !(0.0..=1.0).contains(&data.chance) {
            return Err(invalid(format!(
                "encounter chance {} is outside [0, 1]",
                data.chance
            )));
        }
        let mut total_weight: u32 = 0;
        for entry in &data.entries {
            species.get(&entry.species)?;
            if entry.min_level == 0 || entry.min_level > entry.max_level {
                return Err(invalid(format!(
                    "{} has level range {}..={}",
                    entry.species, entry.min_level, entry.max_level
                )));
            }
            if entry.weight == 0 {
                return Err(invalid(format!("{} has a weight of 0", entry.species)));
            }
            total_weight = total_weight.checked_add(entry.weight).ok_or_else(|| {
                invalid(format!("encounter weights add up to more than {}", u32::MAX))
            })?;
        }

        Ok(Self {
            chance: data.chance,
            entries: data.entries,
        })
    }

    pub fn chance(&self) -> f64 {
        self.chance
    }

    /// Roll for a wild encounter after a step. Only grass tiles can trigger one.
    pub fn check_for_encounter<R: Rng>(&self, on_grass: bool, rng: &mut R) -> bool {
        on_grass && !self.entries.is_empty() && rng.random_bool(self.chance)
    }

    /// Weighted pick of which species appears.
    pub fn choose_entry<R: Rng>(&self, rng: &mut R) -> Option<&EncounterEntry> {
        self.entries
            .choose_weighted(rng, |entry| entry.weight)
            .ok()
    }

    /// Build the wild opponent for an encounter at a random level in its range.
    pub fn generate_opponent<R: Rng>(
        &self,
        species: &SpeciesRegistry,
        moves: &MoveFactory,
        rng: &mut R,
    ) -> SpeciesDataResult<PokemonInst> {
        let entry = self
            .choose_entry(rng)
            .ok_or(SpeciesDataError::EmptyEncounterTable)?;
        let level = rng.random_range(entry.min_level..=entry.max_level);
        debug!(species = %entry.species, level, "wild encounter");
        species.create_pokemon(&entry.species, level, moves)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokemon::Combatant;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use schema::{
        BaseStats, ExperienceGroup, MoveDefinition, MoveDefinitions, PokemonSpecies, PokemonType,
    };

    fn data() -> (SpeciesRegistry, MoveFactory) {
        let mut definitions = MoveDefinitions::new();
        definitions.insert(
            "Tackle".to_string(),
            MoveDefinition {
                move_type: PokemonType::Normal,
                base_power: 40,
            },
        );
        let moves = MoveFactory::load(&definitions).unwrap();
        let species = ["Rattata", "Pidgey"]
            .into_iter()
            .map(|name| PokemonSpecies {
                name: name.to_string(),
                pokemon_type: PokemonType::Normal,
                base_stats: BaseStats {
                    hp: 35,
                    attack: 50,
                    defense: 35,
                },
                base_exp: 50,
                growth: ExperienceGroup::Fast,
                learnset: vec!["Tackle".to_string()],
            })
            .collect();
        (SpeciesRegistry::load(species, &moves).unwrap(), moves)
    }

    fn entry(species: &str, min_level: u8, max_level: u8, weight: u32) -> EncounterEntry {
        EncounterEntry {
            species: species.to_string(),
            min_level,
            max_level,
            weight,
        }
    }

    #[test]
    fn test_only_grass_triggers_encounters() {
        let (species, _) = data();
        let table = EncounterTable::new(
            EncounterData {
                chance: 1.0,
                entries: vec![entry("Rattata", 2, 4, 1)],
            },
            &species,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(11);

        assert!(table.check_for_encounter(true, &mut rng));
        assert!(!table.check_for_encounter(false, &mut rng));
    }

    #[test]
    fn test_zero_chance_never_triggers() {
        let (species, _) = data();
        let table = EncounterTable::new(
            EncounterData {
                chance: 0.0,
                entries: vec![entry("Rattata", 2, 4, 1)],
            },
            &species,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        assert!((0..100).all(|_| !table.check_for_encounter(true, &mut rng)));
    }

    #[test]
    fn test_generated_opponent_respects_table() {
        let (species, moves) = data();
        let table = EncounterTable::new(
            EncounterData {
                chance: 0.1,
                entries: vec![entry("Rattata", 2, 4, 3), entry("Pidgey", 3, 3, 1)],
            },
            &species,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(99);

        for _ in 0..50 {
            let opponent = table.generate_opponent(&species, &moves, &mut rng).unwrap();
            match opponent.species.as_str() {
                "Rattata" => assert!((2..=4).contains(&opponent.level())),
                "Pidgey" => assert_eq!(opponent.level(), 3),
                other => panic!("unexpected species {}", other),
            }
            assert_eq!(opponent.move_at(0).map(|m| m.name()), Some("Tackle"));
        }
    }

    #[test]
    fn test_empty_table_never_produces_an_opponent() {
        let (species, moves) = data();
        let table = EncounterTable::new(
            EncounterData {
                chance: 1.0,
                entries: vec![],
            },
            &species,
        )
        .unwrap();
        let mut rng = StdRng::seed_from_u64(1);

        assert!(!table.check_for_encounter(true, &mut rng));
        assert_eq!(
            table.generate_opponent(&species, &moves, &mut rng).unwrap_err(),
            SpeciesDataError::EmptyEncounterTable
        );
    }

    #[test]
    fn test_weight_total_must_fit() {
        let (species, _) = data();
        let result = EncounterTable::new(
            EncounterData {
                chance: 0.1,
                entries: vec![entry("Rattata", 2, 4, u32::MAX - 1), entry("Pidgey", 3, 3, 2)],
            },
            &species,
        );
        match result {
            Err(ConfigError::InvalidValue { file, details }) => {
                assert_eq!(file, ENCOUNTERS_FILE);
                assert!(details.contains("weights add up"), "{}", details);
            }
            other => panic!("expected an invalid value error, got {:?}", other),
        }

        // Exactly at the limit is fine
        let table = EncounterTable::new(
            EncounterData {
                chance: 0.1,
                entries: vec![entry("Rattata", 2, 4, u32::MAX - 1), entry("Pidgey", 3, 3, 1)],
            },
            &species,
        );
        assert!(table.is_ok());
    }

    #[test]
    fn test_invalid_tables_are_rejected() {
        let (species, _) = data();
        let cases = [
            (1.5, vec![entry("Rattata", 2, 4, 1)]),
            (0.1, vec![entry("Rattata", 5, 4, 1)]),
            (0.1, vec![entry("Rattata", 0, 4, 1)]),
            (0.1, vec![entry("Rattata", 2, 4, 0)]),
            (
                0.1,
                vec![entry("Rattata", 2, 4, u32::MAX), entry("Pidgey", 3, 3, 1)],
            ),
        ];
        for (chance, entries) in cases {
            let result = EncounterTable::new(EncounterData { chance, entries }, &species);
            assert!(
                matches!(result, Err(ConfigError::InvalidValue { .. })),
                "{:?}",
                result
            );
        }

        let result = EncounterTable::new(
            EncounterData {
                chance: 0.1,
                entries: vec![entry("Mew", 2, 4, 1)],
            },
            &species,
        );
        assert!(matches!(
            result,
            Err(ConfigError::SpeciesData(SpeciesDataError::SpeciesNotFound(_)))
        ));
    }
}
