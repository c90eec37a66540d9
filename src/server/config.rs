use crate::{model::import::IMPORT_RANGE_END, server::error::config::ConfigError};

pub static DEFAULT_POKEAPI_URL: &str = "https://pokeapi.co/api/v2";
pub static DEFAULT_CATALOG_API_URL: &str = "http://127.0.0.1:8080";
pub static DEFAULT_SPRITE_BASE_URL: &str = concat!(
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon",
    "/versions/generation-i/red-blue/transparent"
);

pub struct Config {
    pub database_url: String,
    /// Base URL of the third-party source API
    pub pokeapi_url: String,
    /// Base URL of the Resource API the importer reads from and writes to
    pub catalog_api_url: String,
    /// Sprites are expected at `{sprite_base_url}/{id}.png`
    pub sprite_base_url: String,
    /// Last source id processed by an import run
    pub import_limit: i32,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingEnvVar(key.to_string()))
        };
        let optional = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let import_limit = match lookup("IMPORT_LIMIT") {
            None => IMPORT_RANGE_END,
            Some(raw) => match raw.parse::<i32>() {
                Ok(limit) if limit > 0 => limit,
                _ => {
                    return Err(ConfigError::InvalidEnvValue {
                        var: "IMPORT_LIMIT".to_string(),
                        reason: format!("expected a positive integer, got {:?}", raw),
                    })
                }
            },
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            pokeapi_url: trim_trailing_slash(optional("POKEAPI_URL", DEFAULT_POKEAPI_URL)),
            catalog_api_url: trim_trailing_slash(optional(
                "CATALOG_API_URL",
                DEFAULT_CATALOG_API_URL,
            )),
            sprite_base_url: trim_trailing_slash(optional(
                "SPRITE_BASE_URL",
                DEFAULT_SPRITE_BASE_URL,
            )),
            import_limit,
        })
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
