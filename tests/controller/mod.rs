//! Integration tests for the HTTP controllers.

mod import;

use axum::{
    body::{to_bytes, Body},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use retrodex_test_utils::prelude::*;
use serde::de::DeserializeOwned;

use super::*;

/// Turn a handler result into a response, whether it succeeded or not
fn into_response<T: IntoResponse, E: IntoResponse>(result: Result<T, E>) -> Response {
    match result {
        Ok(resp) => resp.into_response(),
        Err(err) => err.into_response(),
    }
}

async fn json_body<T: DeserializeOwned>(resp: Response<Body>) -> T {
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    serde_json::from_slice(&bytes).expect("Failed to parse response body")
}
