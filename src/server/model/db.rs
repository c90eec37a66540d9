//! Database model type aliases.
//!
//! Convenient aliases for the SeaORM entity models used throughout the server, so services
//! and controllers don't need to import from the generated `entity` crate directly.

/// Type alias for a catalog record database model.
///
/// # Fields (from `entity::pokemon::Model`)
/// - `id` - Primary key, assigned on create
/// - `catalog_index` - Pokédex number, 1..=151 for imported records, 152+ for user authored ones
/// - `name` - Display name
/// - `primary_type` / `secondary_type` - Type pair, the secondary one is optional
/// - `description` - Flavor text (nullable)
/// - `image` - Sprite URL or local sprite path
/// - `hp`, `attack`, `defense`, `speed`, `special` - Base stats
/// - `weight_kg` / `height_m` - Weight in kilograms and height in meters
/// - `imported` - Whether the record came from the bulk import and was never edited since
/// - `created_at` - Timestamp when the record was created
/// - `updated_at` - Timestamp of the last record update
pub type PokemonModel = entity::pokemon::Model;

impl From<PokemonModel> for crate::model::pokemon::PokemonDto {
    fn from(model: PokemonModel) -> Self {
        Self {
            iri: format!("{}/{}", crate::model::pokemon::COLLECTION_PATH, model.id),
            id: model.id,
            catalog_index: model.catalog_index,
            name: model.name,
            primary_type: model.primary_type,
            secondary_type: model.secondary_type,
            description: model.description,
            image: model.image,
            hp: model.hp,
            attack: model.attack,
            defense: model.defense,
            speed: model.speed,
            special: model.special,
            weight_kg: model.weight_kg,
            height_m: model.height_m,
            imported: model.imported,
        }
    }
}
