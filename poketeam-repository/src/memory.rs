use async_trait::async_trait;
use rand::Rng;

use crate::{
    detail::{NamedResource, PokemonDetail, TypeSlot},
    error::RepositoryError,
    PokemonRepository,
};

/// Repository over a fixed in memory roster. Serves the offline mode and
/// keeps tests independent of the network.
#[derive(Clone, Debug, Default)]
pub struct StaticRepository {
    entries: Vec<PokemonDetail>,
}

impl StaticRepository {
    pub fn new(entries: Vec<PokemonDetail>) -> Self {
        Self { entries }
    }

    pub fn with_default_roster() -> Self {
        Self::new(vec![
            entry(1, "bulbasaur", 7, 69, &["grass", "poison"]),
            entry(4, "charmander", 6, 85, &["fire"]),
            entry(7, "squirtle", 5, 90, &["water"]),
            entry(25, "pikachu", 4, 60, &["electric"]),
            entry(39, "jigglypuff", 5, 55, &["normal", "fairy"]),
            entry(52, "meowth", 4, 42, &["normal"]),
            entry(54, "psyduck", 8, 196, &["water"]),
            entry(92, "gastly", 13, 1, &["ghost", "poison"]),
            entry(95, "onix", 88, 2100, &["rock", "ground"]),
            entry(129, "magikarp", 9, 100, &["water"]),
            entry(133, "eevee", 3, 65, &["normal"]),
            entry(143, "snorlax", 21, 4600, &["normal"]),
        ])
    }
}

fn entry(id: u32, name: &str, height: u32, weight: u32, types: &[&str]) -> PokemonDetail {
    PokemonDetail {
        id,
        name: name.to_string(),
        height,
        weight,
        types: types
            .iter()
            .enumerate()
            .map(|(index, kind)| TypeSlot {
                slot: index as u8 + 1,
                kind: NamedResource {
                    name: kind.to_string(),
                },
            })
            .collect(),
    }
}

#[async_trait]
impl PokemonRepository for StaticRepository {
    async fn pokemon(&self, name: &str) -> Result<PokemonDetail, RepositoryError> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .cloned()
            .ok_or_else(|| RepositoryError::NotFound(name.to_string()))
    }

    async fn random_pokemon(&self) -> Result<PokemonDetail, RepositoryError> {
        if self.entries.is_empty() {
            return Err(RepositoryError::Transport("roster is empty".to_string()));
        }

        let index = rand::thread_rng().gen_range(0..self.entries.len());
        Ok(self.entries[index].clone())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[tokio::test]
    async fn pokemon_resolves_roster_member_by_name() {
        let repository = StaticRepository::with_default_roster();

        let detail = repository.pokemon("pikachu").await.unwrap();

        assert_eq!(detail.id, 25);
        assert_eq!(detail.type_names(), vec!["electric"]);
    }

    #[tokio::test]
    async fn pokemon_fails_with_not_found_for_unknown_name() {
        let repository = StaticRepository::with_default_roster();

        let result = repository.pokemon("missingno").await;

        assert_eq!(
            result,
            Err(RepositoryError::NotFound("missingno".to_string()))
        );
    }

    #[tokio::test]
    async fn random_pokemon_draws_from_the_roster() {
        let repository = StaticRepository::with_default_roster();

        let detail = repository.random_pokemon().await.unwrap();

        assert!(repository.entries.contains(&detail));
    }

    #[tokio::test]
    async fn random_pokemon_on_empty_roster_is_a_transport_failure() {
        let repository = StaticRepository::default();

        let result = repository.random_pokemon().await;

        assert!(matches!(result, Err(RepositoryError::Transport(_))));
    }
}
