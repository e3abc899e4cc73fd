use async_trait::async_trait;
use rand::Rng;
use reqwest::StatusCode;

use crate::{detail::PokemonDetail, error::RepositoryError, PokemonRepository};

pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

// Highest id served by the v2 api without the paldea expansion ranges.
const MAX_POKEMON_ID: u32 = 1010;

/// Repository backed by the public pokeapi. The api caches aggressively on
/// its side; this client keeps no state beyond the connection pool.
pub struct PokeApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl PokeApiClient {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            http: reqwest::Client::new(),
        }
    }

    async fn request_pokemon(&self, resource: &str) -> Result<reqwest::Response, RepositoryError> {
        let url = format!("{}/pokemon/{}", self.base_url, resource);
        tracing::trace!("requesting {}", url);

        self.http
            .get(&url)
            .send()
            .await
            .map_err(|error| RepositoryError::Transport(error.to_string()))
    }

    async fn decode_pokemon(response: reqwest::Response) -> Result<PokemonDetail, RepositoryError> {
        let response = response
            .error_for_status()
            .map_err(|error| RepositoryError::Transport(error.to_string()))?;

        response
            .json::<PokemonDetail>()
            .await
            .map_err(|error| RepositoryError::Transport(error.to_string()))
    }
}

#[async_trait]
impl PokemonRepository for PokeApiClient {
    async fn pokemon(&self, name: &str) -> Result<PokemonDetail, RepositoryError> {
        let response = self.request_pokemon(name).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(RepositoryError::NotFound(name.to_string()));
        }

        Self::decode_pokemon(response).await
    }

    async fn random_pokemon(&self) -> Result<PokemonDetail, RepositoryError> {
        let id = rand::thread_rng().gen_range(1..=MAX_POKEMON_ID);

        let response = self.request_pokemon(&id.to_string()).await?;
        if response.status() == StatusCode::NOT_FOUND {
            // A missing id means the upper id bound is stale upstream. The
            // caller never asked for a concrete name, so this is not NotFound.
            return Err(RepositoryError::Transport(format!(
                "random pokemon {} is missing upstream",
                id
            )));
        }

        Self::decode_pokemon(response).await
    }
}
