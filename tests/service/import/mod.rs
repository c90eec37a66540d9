//! Tests for ImportService::run.
//!
//! The mock server plays both the source API and the Resource API. Create endpoints only
//! match bodies with the expected catalog index, so a wrong or missing create shows up as an
//! unmatched request or an unmet expectation in `assert_mocks`.

mod failure;
mod run;

use mockito::Matcher;
use retrodex::{
    model::import::ImportEntry,
    server::{
        error::import::ImportError,
        model::app::AppState,
        service::import::{stats::StatTable, ImportService},
    },
};
use retrodex_test_utils::prelude::*;
use serde_json::json;

use super::*;

fn import_service(state: &AppState) -> ImportService<'_> {
    ImportService::new(
        &state.catalog_client,
        &state.pokeapi_client,
        &state.stat_table,
        &state.sprite_base_url,
    )
}
