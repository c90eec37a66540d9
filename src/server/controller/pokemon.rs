use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        pokemon::{PokemonCollection, PokemonDto, PokemonInput, PokemonPatch},
    },
    server::{error::Error, model::app::AppState, service::pokemon::PokemonService},
};

pub static POKEMON_TAG: &str = "pokemon";

#[derive(Deserialize, IntoParams)]
pub struct ListParams {
    /// 1-based page number, defaults to 1
    pub page: Option<i64>,
    /// Only list records whose imported flag matches
    pub importe: Option<bool>,
}

/// List catalog records, 30 per page ordered by id
#[utoipa::path(
    get,
    path = "/pokemon",
    tag = POKEMON_TAG,
    params(ListParams),
    responses(
        (status = 200, description = "One page of the collection", body = PokemonCollection),
        (status = 400, description = "Page less than 1", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_pokemon(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    let collection = pokemon_service.list(params.page, params.importe).await?;

    Ok((StatusCode::OK, Json(collection)))
}

/// Get a single catalog record
#[utoipa::path(
    get,
    path = "/pokemon/{id}",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Record id")),
    responses(
        (status = 200, description = "The record", body = PokemonDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pokemon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    let pokemon = pokemon_service.get(id).await?;

    Ok((StatusCode::OK, Json(pokemon)))
}

/// Create a catalog record
///
/// The imported flag is stored as sent.
#[utoipa::path(
    post,
    path = "/pokemon",
    tag = POKEMON_TAG,
    request_body = PokemonInput,
    responses(
        (status = 201, description = "Record created", body = PokemonDto),
        (status = 422, description = "Record failed validation", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_pokemon(
    State(state): State<AppState>,
    Json(input): Json<PokemonInput>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    let pokemon = pokemon_service.create(input).await?;

    Ok((StatusCode::CREATED, Json(pokemon)))
}

/// Replace a catalog record
///
/// The stored record is always flagged as not imported.
#[utoipa::path(
    put,
    path = "/pokemon/{id}",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Record id")),
    request_body = PokemonInput,
    responses(
        (status = 200, description = "Record replaced", body = PokemonDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 422, description = "Record failed validation", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_pokemon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(input): Json<PokemonInput>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    let pokemon = pokemon_service.replace(id, input).await?;

    Ok((StatusCode::OK, Json(pokemon)))
}

/// Partially update a catalog record
///
/// Absent fields are left untouched, `"type2": null` clears the secondary type. The stored
/// record is always flagged as not imported.
#[utoipa::path(
    patch,
    path = "/pokemon/{id}",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Record id")),
    request_body = PokemonPatch,
    responses(
        (status = 200, description = "Record updated", body = PokemonDto),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 422, description = "Record failed validation", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn patch_pokemon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(patch): Json<PokemonPatch>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    let pokemon = pokemon_service.patch(id, patch).await?;

    Ok((StatusCode::OK, Json(pokemon)))
}

/// Delete a catalog record
#[utoipa::path(
    delete,
    path = "/pokemon/{id}",
    tag = POKEMON_TAG,
    params(("id" = i32, Path, description = "Record id")),
    responses(
        (status = 204, description = "Record deleted"),
        (status = 404, description = "Record not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_pokemon(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let pokemon_service = PokemonService::new(&state.db);

    pokemon_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
