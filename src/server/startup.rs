use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    api::{catalog::CatalogClient, pokeapi::PokeApiClient},
    config::Config,
    error::{api::ApiError, Error},
    model::app::AppState,
    service::import::{lock::ImportLock, stats::StatTable},
};

static USER_AGENT: &str = concat!(
    env!("CARGO_PKG_NAME"),
    "/",
    env!("CARGO_PKG_VERSION"),
    " (+",
    env!("CARGO_PKG_REPOSITORY"),
    ")"
);

/// Build the HTTP client shared by the source API and Resource API clients
pub fn build_http_client() -> Result<reqwest::Client, Error> {
    let client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .map_err(ApiError::from)?;

    Ok(client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Assemble the state shared by every request handler
pub fn build_app_state(
    config: &Config,
    db: DatabaseConnection,
    http_client: reqwest::Client,
) -> Result<AppState, Error> {
    let stat_table = StatTable::generation_one()?;

    Ok(AppState {
        db,
        catalog_client: CatalogClient::new(http_client.clone(), config.catalog_api_url.clone()),
        pokeapi_client: PokeApiClient::new(http_client, config.pokeapi_url.clone()),
        stat_table: Arc::new(stat_table),
        sprite_base_url: config.sprite_base_url.clone(),
        import_limit: config.import_limit,
        import_lock: ImportLock::default(),
    })
}
