//! Source API and Resource API mock endpoint creation utilities.
//!
//! Every endpoint is registered with the context's mockito server and verifies it was called
//! the expected number of times once
//! [`TestContext::assert_mocks`](crate::TestContext::assert_mocks) runs.

use mockito::{Matcher, Mock};
use serde_json::{json, Value};

use crate::{
    constant::{JSON_LD, POKEAPI_PREFIX},
    fixtures::pokemon::PokemonFixtures,
};

impl<'a> PokemonFixtures<'a> {
    /// Create a mock endpoint for `GET /pokemon-species/{id}` on the source API.
    ///
    /// # Arguments
    /// - `id` - Source id for the endpoint path
    /// - `species` - Document to return, see [`mock_species`](super::factory::mock_species)
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_species_endpoint(
        &mut self,
        id: i32,
        species: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("{}/pokemon-species/{}", POKEAPI_PREFIX, id);

        self.context
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(species.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for `GET /pokemon/{id}` on the source API.
    pub fn create_pokemon_endpoint(
        &mut self,
        id: i32,
        pokemon: Value,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("{}/pokemon/{}", POKEAPI_PREFIX, id);

        self.context
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(pokemon.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock source API endpoint that answers with an error status.
    ///
    /// # Arguments
    /// - `path` - Path below the source API prefix, e.g. `/pokemon-species/3`
    /// - `status_code` - HTTP status code to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_source_error_endpoint(
        &mut self,
        path: &str,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("{}{}", POKEAPI_PREFIX, path);

        self.context
            .server
            .mock("GET", url.as_str())
            .with_status(status_code)
            .with_header("content-type", "application/json")
            .with_body(json!({ "detail": "Not found." }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for one page of the Resource API collection.
    ///
    /// Matches `GET /pokemon?page={page}`, ignoring any other query parameter.
    ///
    /// # Arguments
    /// - `page` - Page number matched in the query string
    /// - `body` - Document to return, see
    ///   [`mock_collection_page`](super::factory::mock_collection_page)
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_catalog_page_endpoint(
        &mut self,
        page: u64,
        body: Value,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("GET", "/pokemon")
            .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
            .with_status(200)
            .with_header("content-type", JSON_LD)
            .with_body(body.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock Resource API collection page that answers with an error status.
    pub fn create_catalog_page_error_endpoint(
        &mut self,
        page: u64,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("GET", "/pokemon")
            .match_query(Matcher::UrlEncoded("page".into(), page.to_string()))
            .with_status(status_code)
            .with_header("content-type", JSON_LD)
            .with_body(json!({ "error": "Internal server error" }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint for `POST /pokemon` on the Resource API.
    ///
    /// Only matches bodies whose `numpokedex` equals `catalog_index` and which are flagged as
    /// imported.
    ///
    /// # Arguments
    /// - `catalog_index` - Catalog index expected in the request body
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_catalog_create_endpoint(
        &mut self,
        catalog_index: i32,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("POST", "/pokemon")
            .match_body(Matcher::PartialJson(json!({
                "numpokedex": catalog_index,
                "importe": true,
            })))
            .with_status(201)
            .with_header("content-type", JSON_LD)
            .with_body(
                super::factory::mock_pokemon_record(catalog_index, catalog_index, true).to_string(),
            )
            .expect(expected_requests)
            .create()
    }

    /// Create a mock `POST /pokemon` endpoint that answers with an error status.
    pub fn create_catalog_create_error_endpoint(
        &mut self,
        catalog_index: i32,
        status_code: usize,
        expected_requests: usize,
    ) -> Mock {
        self.context
            .server
            .mock("POST", "/pokemon")
            .match_body(Matcher::PartialJson(json!({ "numpokedex": catalog_index })))
            .with_status(status_code)
            .with_header("content-type", JSON_LD)
            .with_body(json!({ "error": "Validation failed" }).to_string())
            .expect(expected_requests)
            .create()
    }
}
