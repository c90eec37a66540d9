use retrodex_test_utils::prelude::*;

use crate::{model::pokemon::PokemonInput, server::data::pokemon::PokemonRepository};

mod create;
mod delete;
mod list_page;
mod update;

/// Request body built from the shared factory
fn mock_input(catalog_index: i32, name: &str, imported: bool) -> Result<PokemonInput, TestError> {
    Ok(serde_json::from_value(factory::mock_pokemon_input(
        catalog_index,
        name,
        imported,
    ))?)
}
