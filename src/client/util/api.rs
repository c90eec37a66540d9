//! Browser side calls to the Resource API and the import route.
//!
//! Every function returns a display ready `String` on failure.

#[cfg(feature = "web")]
use reqwasm::http::{Request, Response};

#[cfg(feature = "web")]
use crate::model::{
    api::{ErrorDto, ValidationErrorDto},
    import::ImportReport,
    pokemon::{collect_pages, collection_path, PokemonCollection, PokemonDto, PokemonInput},
};

#[cfg(feature = "web")]
static JSON_LD: &str = "application/ld+json";

/// Walk every page of the catalog, optionally filtered on the imported flag
#[cfg(feature = "web")]
pub async fn fetch_all_pokemon(imported: Option<bool>) -> Result<Vec<PokemonDto>, String> {
    collect_pages(collection_path(1, imported), |path| async move {
        get_collection(&path).await
    })
    .await
}

#[cfg(feature = "web")]
async fn get_collection(path: &str) -> Result<PokemonCollection, String> {
    let response = Request::get(path)
        .header("Accept", JSON_LD)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<PokemonCollection>()
            .await
            .map_err(|e| format!("Failed to parse pokemon page: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Retrieve a single record
#[cfg(feature = "web")]
pub async fn get_pokemon(id: i32) -> Result<PokemonDto, String> {
    let response = Request::get(&format!("/pokemon/{}", id))
        .header("Accept", JSON_LD)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<PokemonDto>()
            .await
            .map_err(|e| format!("Failed to parse pokemon: {}", e)),
        _ => Err(error_message(response).await),
    }
}

#[cfg(feature = "web")]
pub async fn create_pokemon(input: &PokemonInput) -> Result<PokemonDto, String> {
    let body = serde_json::to_string(input).map_err(|e| e.to_string())?;

    let response = Request::post("/pokemon")
        .header("Accept", JSON_LD)
        .header("Content-Type", JSON_LD)
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        201 => response
            .json::<PokemonDto>()
            .await
            .map_err(|e| format!("Failed to parse created pokemon: {}", e)),
        _ => Err(error_message(response).await),
    }
}

#[cfg(feature = "web")]
pub async fn replace_pokemon(id: i32, input: &PokemonInput) -> Result<PokemonDto, String> {
    let body = serde_json::to_string(input).map_err(|e| e.to_string())?;

    let response = Request::put(&format!("/pokemon/{}", id))
        .header("Accept", JSON_LD)
        .header("Content-Type", JSON_LD)
        .body(body)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<PokemonDto>()
            .await
            .map_err(|e| format!("Failed to parse updated pokemon: {}", e)),
        _ => Err(error_message(response).await),
    }
}

#[cfg(feature = "web")]
pub async fn delete_pokemon(id: i32) -> Result<(), String> {
    let response = Request::delete(&format!("/pokemon/{}", id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        204 => Ok(()),
        _ => Err(error_message(response).await),
    }
}

/// Run the bulk import and wait for its report
#[cfg(feature = "web")]
pub async fn run_import() -> Result<ImportReport, String> {
    let response = Request::post("/api/import")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    match response.status() {
        200 => response
            .json::<ImportReport>()
            .await
            .map_err(|e| format!("Failed to parse import report: {}", e)),
        _ => Err(error_message(response).await),
    }
}

/// Best effort message for a failed response: validation messages, then `ErrorDto`, then
/// the raw body.
#[cfg(feature = "web")]
async fn error_message(response: Response) -> String {
    let status = response.status();
    let text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    if let Ok(validation) = serde_json::from_str::<ValidationErrorDto>(&text) {
        let messages: Vec<String> = validation
            .violations
            .iter()
            .map(|v| format!("{} : {}", v.property_path, v.message))
            .collect();
        return format!("{} ({})", validation.error, messages.join(", "));
    }

    if let Ok(error_dto) = serde_json::from_str::<ErrorDto>(&text) {
        return error_dto.error;
    }

    format!("Request failed with status {}: {}", status, text)
}
