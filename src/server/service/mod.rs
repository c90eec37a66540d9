//! Service layer for business logic and orchestration.
//!
//! Services coordinate between repositories and external APIs: [`pokemon::PokemonService`]
//! applies the Resource API's paging and validation rules on top of the repository, while
//! [`import::ImportService`] reconciles the third-party source API against the catalog.

pub mod import;
pub mod pokemon;
