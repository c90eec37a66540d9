use crate::{
    model::pokemon::PokemonInput,
    server::{
        error::api::ApiError,
        model::pokeapi::{type_names, PokemonSource, PokemonSpecies},
        service::import::stats::BaseStats,
    },
};

/// Language of names and descriptions taken from the source API.
pub static SOURCE_LANGUAGE: &str = "fr";

/// Attributes of one source id, ready to be combined with stats into a catalog record.
#[derive(Clone, Debug, PartialEq)]
pub struct SourceRecord {
    pub name: String,
    pub description: Option<String>,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub weight_kg: f64,
    pub height_m: f64,
}

impl SourceRecord {
    /// Combine the species and pokemon documents of `id`.
    ///
    /// When the pokemon lists past types, the first historical type set replaces the current
    /// one so the catalog keeps generation one typings.
    pub fn assemble(
        id: i32,
        species: &PokemonSpecies,
        pokemon: &PokemonSource,
    ) -> Result<Self, ApiError> {
        let name = species
            .localized_name(SOURCE_LANGUAGE)
            .ok_or(ApiError::MissingLocalizedName(id))?;

        let historical = pokemon
            .past_types
            .first()
            .map(|past| type_names(&past.types))
            .filter(|types| !types.is_empty());
        let types = historical.unwrap_or_else(|| type_names(&pokemon.types));

        let (primary_type, secondary_type) = match types.as_slice() {
            [] => return Err(ApiError::MissingType(id)),
            [primary] => (primary.to_string(), None),
            [primary, secondary, ..] => (primary.to_string(), Some(secondary.to_string())),
        };

        Ok(Self {
            name: name.to_string(),
            description: species.localized_flavor_text(SOURCE_LANGUAGE),
            primary_type,
            secondary_type,
            weight_kg: f64::from(pokemon.weight) / 10.0,
            height_m: f64::from(pokemon.height) / 10.0,
        })
    }

    /// Build the create body for an imported record.
    pub fn into_input(self, id: i32, image: String, stats: BaseStats) -> PokemonInput {
        PokemonInput {
            catalog_index: id,
            name: self.name,
            primary_type: self.primary_type,
            secondary_type: self.secondary_type,
            description: self.description,
            image,
            hp: stats.hp,
            attack: stats.attack,
            defense: stats.defense,
            speed: stats.speed,
            special: stats.special,
            weight_kg: self.weight_kg,
            height_m: self.height_m,
            imported: true,
        }
    }
}

/// Sprite of `id` under the configured sprite base URL.
pub fn sprite_url(sprite_base_url: &str, id: i32) -> String {
    format!("{}/{}.png", sprite_base_url, id)
}
