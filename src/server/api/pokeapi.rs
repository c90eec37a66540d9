use crate::server::{
    api::parse_response,
    error::api::ApiError,
    model::pokeapi::{PokemonSource, PokemonSpecies},
};

/// HTTP client for the third-party source API.
#[derive(Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    api_url: String,
}

impl PokeApiClient {
    /// * `api_url` - Base HTTP URL including the version prefix, e.g. `https://pokeapi.co/api/v2`.
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    pub async fn get_species(&self, id: i32) -> Result<PokemonSpecies, ApiError> {
        let response = self
            .client
            .get(format!("{}/pokemon-species/{}", self.api_url, id))
            .send()
            .await?;

        parse_response(response).await
    }

    pub async fn get_pokemon(&self, id: i32) -> Result<PokemonSource, ApiError> {
        let response = self
            .client
            .get(format!("{}/pokemon/{}", self.api_url, id))
            .send()
            .await?;

        parse_response(response).await
    }
}
