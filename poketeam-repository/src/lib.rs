use async_trait::async_trait;

use crate::{detail::PokemonDetail, error::RepositoryError};

pub mod client;
pub mod detail;
pub mod error;
pub mod memory;

/// Lookup boundary for pokemon data. Implementations decide where the data
/// comes from; callers only see names going in and detail records coming out.
#[async_trait]
pub trait PokemonRepository: Send + Sync {
    /// Resolves one pokemon by its unique name.
    async fn pokemon(&self, name: &str) -> Result<PokemonDetail, RepositoryError>;

    /// Resolves one randomly chosen pokemon. Never fails with `NotFound`.
    async fn random_pokemon(&self) -> Result<PokemonDetail, RepositoryError>;
}
