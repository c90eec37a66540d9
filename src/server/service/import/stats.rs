use std::collections::HashMap;

use serde::Deserialize;

use crate::server::error::config::ConfigError;

static GENERATION_ONE_STATS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/stat_pokemons_1G.json"
));

/// Generation one base stats of a single pokemon.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize)]
pub struct BaseStats {
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub special: i32,
}

#[derive(Deserialize)]
struct StatEntry {
    id: i32,
    #[serde(flatten)]
    stats: BaseStats,
}

/// Static base stat table keyed by source id.
#[derive(Debug, Default)]
pub struct StatTable {
    stats: HashMap<i32, BaseStats>,
}

impl StatTable {
    /// The table bundled with the application.
    pub fn generation_one() -> Result<Self, ConfigError> {
        Self::from_json(GENERATION_ONE_STATS)
    }

    /// Parse a table from a JSON array of `{ id, hp, attack, defense, speed, special }`.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let entries: Vec<StatEntry> = serde_json::from_str(json)?;

        Ok(Self {
            stats: entries.into_iter().map(|e| (e.id, e.stats)).collect(),
        })
    }

    /// Stats for `id`, all zeros when the table has no entry.
    pub fn get(&self, id: i32) -> BaseStats {
        self.stats.get(&id).copied().unwrap_or_default()
    }
}
