//! Database model type aliases for test utilities.
//!
//! These aliases match those in the main retrodex crate.

/// Type alias for the catalog record database model.
pub type PokemonModel = entity::pokemon::Model;
