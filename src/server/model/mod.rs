//! Server application models and type definitions.
//!
//! This module contains data models for the server application: the shared application state
//! handed to every handler, database model type aliases, and the response shapes of the
//! third-party source API consumed by the importer.

pub mod app;
pub mod db;
pub mod pokeapi;
