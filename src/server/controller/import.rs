use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, import::ImportReport},
    server::{
        error::{import::ImportError, Error},
        model::app::AppState,
        service::import::ImportService,
    },
};

pub static IMPORT_TAG: &str = "import";

/// Import the generation one catalog from the source API
///
/// Runs to completion before answering. Ids already imported are skipped, so the route can be
/// called again to retry the ids that failed.
///
/// The run executes on its own task holding the import lock. A client that disconnects stops
/// waiting for the report but does not abort the run, and the lock is only released once the
/// run has finished.
///
/// # Responses
/// - 200 (OK): Run finished, possibly with per-id failures listed in the report
/// - 409 (Conflict): Another run is in progress
/// - 502 (Bad Gateway): The existing catalog could not be read, nothing was imported
#[utoipa::path(
    post,
    path = "/api/import",
    tag = IMPORT_TAG,
    responses(
        (status = 200, description = "Import finished", body = ImportReport),
        (status = 409, description = "An import is already running", body = ErrorDto),
        (status = 502, description = "Failed to read the existing catalog", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn run_import(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let Some(guard) = state.import_lock.try_acquire() else {
        return Err(ImportError::AlreadyRunning.into());
    };

    let run = tokio::spawn(async move {
        let _guard = guard;
        let import_service = ImportService::new(
            &state.catalog_client,
            &state.pokeapi_client,
            &state.stat_table,
            &state.sprite_base_url,
        );

        import_service.run(state.import_limit).await
    });

    let report = run
        .await
        .map_err(|e| Error::InternalError(format!("Import task failed: {}", e)))??;

    Ok((StatusCode::OK, Json(report)))
}
