//! Server application core modules.
//!
//! This module contains all server-side functionality for the RetroDex application: the
//! Resource API over the catalog table, the bulk importer that fills the catalog from the
//! third-party source API, HTTP routing and OpenAPI documentation, and startup wiring.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod api;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
