//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations. The catalog currently
//! has a single table, accessed through [`pokemon::PokemonRepository`].

pub mod pokemon;
