use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// A single field-level validation failure
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ViolationDto {
    /// Wire name of the offending field, e.g. `type2`
    #[serde(rename = "propertyPath")]
    pub property_path: String,
    /// Human readable explanation
    pub message: String,
}

impl ViolationDto {
    pub fn new(property_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            property_path: property_path.into(),
            message: message.into(),
        }
    }
}

/// The response when a submitted record fails validation
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct ValidationErrorDto {
    /// The error message
    pub error: String,
    /// Every failing field
    pub violations: Vec<ViolationDto>,
}
