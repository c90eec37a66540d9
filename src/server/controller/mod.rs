//! HTTP controller endpoints for the RetroDex web API.
//!
//! Controllers handle HTTP requests, extract path, query and body inputs, call into the
//! service layer, and return appropriate HTTP responses. Every handler is annotated for utoipa
//! so it shows up in the generated OpenAPI document.

pub mod import;
pub mod pokemon;
