//! Integration tests for the service layer.

mod import;

use super::*;
