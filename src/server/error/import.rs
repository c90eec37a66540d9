use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{model::api::ErrorDto, server::error::api::ApiError};

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("An import is already running")]
    AlreadyRunning,
    #[error("Failed to load existing pokemon before importing: {0}")]
    Snapshot(#[source] ApiError),
}

impl IntoResponse for ImportError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyRunning => {
                tracing::warn!("{}", self);

                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto {
                        error: "Veuillez patienter, une importation est déjà en cours."
                            .to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Snapshot(_) => {
                tracing::error!("{}", self);

                (
                    StatusCode::BAD_GATEWAY,
                    Json(ErrorDto {
                        error: format!("Erreur lors du chargement des Pokémons : {}", self),
                    }),
                )
                    .into_response()
            }
        }
    }
}
