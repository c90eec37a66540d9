#![allow(non_snake_case)]

mod client;

use retrodex::model;

#[cfg(feature = "server")]
use retrodex::server;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(client::App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{config::Config, startup};

        dotenvy::dotenv().ok();
        let config = match Config::from_env() {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Configuration error: {}", e);
                std::process::exit(1);
            }
        };

        let http_client = startup::build_http_client()?;
        let db = startup::connect_to_database(&config).await?;
        let state = startup::build_app_state(&config, db, http_client)?;

        tracing::info!(
            "Starting server on {}, importing up to {} pokemon from {}",
            dioxus_cli_config::fullstack_address_or_localhost(),
            config.import_limit,
            config.pokeapi_url
        );

        let mut router = dioxus::server::router(client::App);
        let server_routes = server::router::routes().with_state(state);
        router = router.merge(server_routes);

        Ok(router)
    })
}
