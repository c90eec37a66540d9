use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::model::api::{ErrorDto, ValidationErrorDto, ViolationDto};

#[derive(Error, Debug)]
pub enum PokemonError {
    #[error("Pokemon ID {0} not found")]
    NotFound(i32),
    #[error("Page should not be less than 1, got {0}")]
    InvalidPage(i64),
    #[error("Pokemon failed validation: {0:?}")]
    Validation(Vec<ViolationDto>),
}

impl IntoResponse for PokemonError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(id) => {
                tracing::debug!(pokemon_id = %id, "{}", self);

                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto {
                        error: "Pokemon not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidPage(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto {
                    error: self.to_string(),
                }),
            )
                .into_response(),
            Self::Validation(violations) => {
                tracing::debug!("Rejected pokemon with {} violation(s)", violations.len());

                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ValidationErrorDto {
                        error: "Validation failed".to_string(),
                        violations,
                    }),
                )
                    .into_response()
            }
        }
    }
}
