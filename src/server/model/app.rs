use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    api::{catalog::CatalogClient, pokeapi::PokeApiClient},
    service::import::{lock::ImportLock, stats::StatTable},
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    /// Resource API client the importer reads the snapshot from and creates records through
    pub catalog_client: CatalogClient,
    pub pokeapi_client: PokeApiClient,
    pub stat_table: Arc<StatTable>,
    pub sprite_base_url: String,
    pub import_limit: i32,
    pub import_lock: ImportLock,
}
