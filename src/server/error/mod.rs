//! Error types for the RetroDex server application.
//!
//! Each domain (configuration, catalog records, the bulk import, outbound HTTP calls) has its
//! own `thiserror` enum, aggregated into [`Error`]. All errors implement `IntoResponse` so
//! controllers can propagate them with `?` and still answer with a meaningful status code.

pub mod api;
pub mod config;
pub mod import;
pub mod pokemon;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        api::ApiError, config::ConfigError, import::ImportError, pokemon::PokemonError,
    },
};

/// Main error type for the RetroDex server application.
///
/// Aggregates the domain specific errors and the external library errors into one type.
/// `#[from]` conversions let services and controllers use the `?` operator throughout.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Catalog record errors (not found, invalid page, validation)
/// - Import errors (run already in progress, snapshot failure)
/// - Outbound HTTP errors (source API, Resource API)
/// - External library errors (database, JSON)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Catalog record error (lookup, paging, validation).
    #[error(transparent)]
    PokemonError(#[from] PokemonError),
    /// Bulk import error that aborts a whole run.
    #[error(transparent)]
    ImportError(#[from] ImportError),
    /// Outbound HTTP error (transport failure or unexpected status).
    #[error(transparent)]
    ApiError(#[from] ApiError),
    /// Internal error indicating a bug in RetroDex's code.
    #[error("Internal error with RetroDex's code, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// JSON (de)serialization error.
    #[error(transparent)]
    JsonError(#[from] serde_json::Error),
}

/// Converts application errors into HTTP responses.
///
/// Domain errors carry their own response mapping; everything else is logged and reported as
/// a generic 500.
///
/// # Returns
/// - 400 Bad Request - Invalid collection page
/// - 404 Not Found - Unknown catalog record
/// - 409 Conflict - An import is already running
/// - 422 Unprocessable Entity - Record failed validation
/// - 502 Bad Gateway - The import could not read the catalog snapshot
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::PokemonError(err) => err.into_response(),
            Self::ImportError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
