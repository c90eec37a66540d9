use reqwest::header::ACCEPT;

use crate::{
    model::pokemon::{collect_pages, collection_path, PokemonCollection, PokemonDto, PokemonInput},
    server::{
        api::{ensure_success, parse_response},
        error::api::ApiError,
    },
};

static JSON_LD: &str = "application/ld+json";

/// HTTP client for the Resource API.
#[derive(Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    api_url: String,
}

impl CatalogClient {
    /// * `api_url` - Base HTTP URL without trailing slash, e.g. `http://127.0.0.1:8080`.
    pub fn new(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Fetch one collection page.
    ///
    /// `path` is either built with [`collection_path`] or taken verbatim from a previous page's
    /// `hydra:next` cursor.
    pub async fn list_page(&self, path: &str) -> Result<PokemonCollection, ApiError> {
        let response = self
            .client
            .get(format!("{}{}", self.api_url, path))
            .header(ACCEPT, JSON_LD)
            .send()
            .await?;

        parse_response(response).await
    }

    /// Walk the whole collection, optionally filtered on the imported flag.
    pub async fn fetch_all(&self, imported: Option<bool>) -> Result<Vec<PokemonDto>, ApiError> {
        let client = self;

        collect_pages(collection_path(1, imported), move |path| async move {
            client.list_page(&path).await
        })
        .await
    }

    /// Create a record, discarding the echoed body.
    pub async fn create(&self, input: &PokemonInput) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}/pokemon", self.api_url))
            .header(ACCEPT, JSON_LD)
            .json(input)
            .send()
            .await?;

        ensure_success(response).await?;
        Ok(())
    }
}
