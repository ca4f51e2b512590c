use crate::errors::{MoveDataError, MoveDataResult};
use crate::moves::Move;
use schema::MoveDefinitions;
use std::collections::HashMap;
use std::sync::Arc;

/// Lookup key for a move name: case, spaces, dashes and underscores ignored.
pub fn normalize_move_name(name: &str) -> String {
    name.to_uppercase().replace([' ', '-', '_'], "")
}

/// Builds every move once at load time and hands out shared instances by name.
#[derive(Debug, Clone, Default)]
pub struct MoveFactory {
    moves: HashMap<String, Arc<Move>>,
    /// Display names in the order they were loaded (sorted by definition key).
    names: Vec<String>,
}

impl MoveFactory {
    pub fn load(definitions: &MoveDefinitions) -> MoveDataResult<Self> {
        let mut factory = Self::default();
        for (name, definition) in definitions {
            let move_ = Move::new(name.as_str(), definition.move_type, definition.base_power)?;
            if factory
                .moves
                .insert(normalize_move_name(name), Arc::new(move_))
                .is_some()
            {
                return Err(MoveDataError::DuplicateMove(name.clone()));
            }
            factory.names.push(name.clone());
        }
        Ok(factory)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<Move>> {
        self.moves.get(&normalize_move_name(name))
    }

    /// A shared handle to the named move.
    ///
    /// An unknown name means the game data references a move that was never
    /// loaded, so this is an error rather than an empty result.
    pub fn create_instance(&self, name: &str) -> MoveDataResult<Arc<Move>> {
        self.get(name)
            .cloned()
            .ok_or_else(|| MoveDataError::MoveNotFound(name.to_string()))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use schema::{MoveDefinition, PokemonType};

    fn definitions() -> MoveDefinitions {
        let mut definitions = MoveDefinitions::new();
        definitions.insert(
            "Water Gun".to_string(),
            MoveDefinition {
                move_type: PokemonType::Water,
                base_power: 40,
            },
        );
        definitions.insert(
            "Ember".to_string(),
            MoveDefinition {
                move_type: PokemonType::Fire,
                base_power: 40,
            },
        );
        definitions
    }

    #[test]
    fn test_instances_are_shared() {
        let factory = MoveFactory::load(&definitions()).unwrap();
        let first = factory.create_instance("Water Gun").unwrap();
        let second = factory.create_instance("water-gun").unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.name(), "Water Gun");
        assert_eq!(first.move_type(), PokemonType::Water);
        assert_eq!(first.base_power(), 40);
        assert_eq!(factory.names(), ["Ember", "Water Gun"]);
    }

    #[test]
    fn test_unknown_move_is_an_error() {
        let factory = MoveFactory::load(&definitions()).unwrap();
        assert_eq!(factory.get("Hyper Beam"), None);
        assert_eq!(
            factory.create_instance("Hyper Beam"),
            Err(MoveDataError::MoveNotFound("Hyper Beam".to_string()))
        );
    }

    #[test]
    fn test_names_differing_only_in_spelling_collide() {
        let mut definitions = definitions();
        definitions.insert(
            "WATER_GUN".to_string(),
            MoveDefinition {
                move_type: PokemonType::Water,
                base_power: 40,
            },
        );
        assert_eq!(
            MoveFactory::load(&definitions).unwrap_err(),
            MoveDataError::DuplicateMove("Water Gun".to_string())
        );
    }

    #[test]
    fn test_zero_power_definition_fails_to_load() {
        let mut definitions = definitions();
        definitions.insert(
            "Splash".to_string(),
            MoveDefinition {
                move_type: PokemonType::Water,
                base_power: 0,
            },
        );
        assert_eq!(
            MoveFactory::load(&definitions).unwrap_err(),
            MoveDataError::ZeroBasePower("Splash".to_string())
        );
    }
}
