use thiserror::Error;

/// Errors from outbound HTTP calls to the source API or the Resource API.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The remote API answered with a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
    /// The source API has no French name for this id.
    #[error("No French name available for pokemon {0}")]
    MissingLocalizedName(i32),
    /// The source API returned a pokemon without any type.
    #[error("No type available for pokemon {0}")]
    MissingType(i32),
}
