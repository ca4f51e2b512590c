use crate::errors::{SpeciesDataError, SpeciesDataResult};
use crate::move_data::MoveFactory;
use crate::pokemon::{PokemonInst, MOVE_SLOTS};
use schema::PokemonSpecies;
use std::collections::HashMap;

/// Lookup key for a species name.
fn species_key(name: &str) -> String {
    name.to_uppercase()
}

#[derive(Debug, Clone, Default)]
pub struct SpeciesRegistry {
    species: HashMap<String, PokemonSpecies>,
}

impl SpeciesRegistry {
    /// Index species by name and check every learnset move exists.
    pub fn load(species: Vec<PokemonSpecies>, moves: &MoveFactory) -> SpeciesDataResult<Self> {
        let mut map = HashMap::with_capacity(species.len());
        for entry in species {
            for move_name in &entry.learnset {
                moves
                    .create_instance(move_name)
                    .map_err(|source| SpeciesDataError::Learnset {
                        species: entry.name.clone(),
                        source,
                    })?;
            }
            let name = entry.name.clone();
            if map.insert(species_key(&name), entry).is_some() {
                return Err(SpeciesDataError::DuplicateSpecies(name));
            }
        }
        Ok(Self { species: map })
    }

    pub fn get(&self, name: &str) -> SpeciesDataResult<&PokemonSpecies> {
        self.species
            .get(&species_key(name))
            .ok_or_else(|| SpeciesDataError::SpeciesNotFound(name.to_string()))
    }

    /// Build a fresh Pokemon knowing the last four moves of its learnset.
    pub fn create_pokemon(
        &self,
        name: &str,
        level: u8,
        moves: &MoveFactory,
    ) -> SpeciesDataResult<PokemonInst> {
        let species = self.get(name)?;
        if level == 0 {
            return Err(SpeciesDataError::InvalidLevel {
                species: species.name.clone(),
                level,
            });
        }

        let skip = species.learnset.len().saturating_sub(MOVE_SLOTS);
        let known = species
            .learnset
            .iter()
            .skip(skip)
            .map(|move_name| {
                moves
                    .create_instance(move_name)
                    .map_err(|source| SpeciesDataError::Learnset {
                        species: species.name.clone(),
                        source,
                    })
            })
            .collect::<SpeciesDataResult<Vec<_>>>()?;

        Ok(PokemonInst::new(species, level, known))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.species.values().map(|s| s.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
}
