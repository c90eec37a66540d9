//! HTTP clients for the APIs the importer talks to.
//!
//! Both clients wrap a shared [`reqwest::Client`] and a base URL. Non-2xx answers are turned
//! into [`ApiError::Status`] carrying the status code and raw body.

pub mod catalog;
pub mod pokeapi;

use crate::server::error::api::ApiError;

/// Ensure the response has a success status code. Returns the response unchanged on success,
/// or an [`ApiError::Status`] containing the status and body text on failure.
async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        return Err(ApiError::Status {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response)
}

/// Parse a successful JSON response body into the expected type.
async fn parse_response<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let response = ensure_success(response).await?;
    Ok(response.json::<T>().await?)
}
