//! Paths and values shared by the mock HTTP endpoints.
//!
//! The mock server hosts both the source API and the Resource API. The source API lives
//! under [`POKEAPI_PREFIX`] so its `/pokemon/{id}` path never collides with the Resource
//! API's `/pokemon` collection.

/// Path prefix of the mocked source API.
pub static POKEAPI_PREFIX: &str = "/api/v2";

/// Path prefix of the mocked sprite host. Sprites are never fetched during an import.
pub static SPRITE_PREFIX: &str = "/sprites";

/// Media type the Resource API answers with.
pub static JSON_LD: &str = "application/ld+json";
