//! JSON documents as the source API and the Resource API serve them.
//!
//! This crate cannot depend on the retrodex crate, so every factory returns a
//! `serde_json::Value` that tests deserialize into the type they need.

use serde_json::{json, Value};

/// Language tag of the localized names and flavor texts the importer reads.
pub static SOURCE_LANGUAGE: &str = "fr";

fn language(name: &str) -> Value {
    json!({
        "name": name,
        "url": format!("https://pokeapi.co/api/v2/language/{}/", name),
    })
}

fn type_slot(slot: usize, name: &str) -> Value {
    json!({
        "slot": slot,
        "type": {
            "name": name,
            "url": format!("https://pokeapi.co/api/v2/type/{}/", name),
        },
    })
}

fn type_slots(types: &[&str]) -> Vec<Value> {
    types
        .iter()
        .enumerate()
        .map(|(index, name)| type_slot(index + 1, name))
        .collect()
}

/// Create a `pokemon-species` document with an English and a French name.
///
/// The flavor text carries a line break and a form feed as the live source API does.
///
/// # Arguments
/// - `id` - Source id
/// - `french_name` - Name returned for the `fr` language
pub fn mock_species(id: i32, french_name: &str) -> Value {
    json!({
        "id": id,
        "name": format!("species-{}", id),
        "names": [
            { "name": format!("Species {}", id), "language": language("en") },
            { "name": french_name, "language": language(SOURCE_LANGUAGE) },
        ],
        "flavor_text_entries": [
            {
                "flavor_text": format!("Species {}\nflavor text.", id),
                "language": language("en"),
                "version": { "name": "red", "url": "" },
            },
            {
                "flavor_text": format!("Description de\n{}.\u{c}Fin.", french_name),
                "language": language(SOURCE_LANGUAGE),
                "version": { "name": "x", "url": "" },
            },
        ],
    })
}

/// Create a `pokemon-species` document without any French name.
pub fn mock_species_without_french_name(id: i32) -> Value {
    json!({
        "id": id,
        "names": [
            { "name": format!("Species {}", id), "language": language("en") },
        ],
        "flavor_text_entries": [],
    })
}

/// Create a `pokemon` document with current types only.
///
/// # Arguments
/// - `id` - Source id
/// - `types` - Type names in slot order
/// - `weight` - Weight in hectograms
/// - `height` - Height in decimeters
pub fn mock_pokemon_source(id: i32, types: &[&str], weight: i32, height: i32) -> Value {
    json!({
        "id": id,
        "weight": weight,
        "height": height,
        "types": type_slots(types),
        "past_types": [],
    })
}

/// Create a `pokemon` document whose types changed after generation one.
///
/// # Arguments
/// - `types` - Current type names in slot order
/// - `past_types` - Type names the pokemon had up to generation five
pub fn mock_pokemon_source_with_past_types(
    id: i32,
    types: &[&str],
    past_types: &[&str],
    weight: i32,
    height: i32,
) -> Value {
    json!({
        "id": id,
        "weight": weight,
        "height": height,
        "types": type_slots(types),
        "past_types": [
            {
                "generation": {
                    "name": "generation-v",
                    "url": "https://pokeapi.co/api/v2/generation/5/",
                },
                "types": type_slots(past_types),
            },
        ],
    })
}

/// Create a request body for the Resource API's create and replace operations.
///
/// # Arguments
/// - `catalog_index` - Value of `numpokedex`
/// - `name` - Record name
/// - `imported` - Value of `importe`
pub fn mock_pokemon_input(catalog_index: i32, name: &str, imported: bool) -> Value {
    json!({
        "numpokedex": catalog_index,
        "name": name,
        "type1": "normal",
        "type2": null,
        "description": format!("Description de {}.", name),
        "images": "/sprite/missingNo.png",
        "hp": 45,
        "attack": 49,
        "defense": 49,
        "vitesse": 45,
        "special": 65,
        "poids": 6.9,
        "taille": 0.7,
        "importe": imported,
    })
}

/// Create a catalog record as the Resource API returns it.
///
/// # Arguments
/// - `id` - Database id, also used in `@id`
/// - `catalog_index` - Value of `numpokedex`
/// - `imported` - Value of `importe`
pub fn mock_pokemon_record(id: i32, catalog_index: i32, imported: bool) -> Value {
    let name = format!("Pokemon {}", catalog_index);
    let mut record = mock_pokemon_input(catalog_index, &name, imported);
    record["@id"] = json!(format!("/pokemon/{}", id));
    record["id"] = json!(id);

    record
}

/// Create one page of the Resource API collection.
///
/// # Arguments
/// - `page` - Page number of this document
/// - `members` - Records on the page
/// - `total_items` - Size of the whole collection
/// - `next_page` - Page number advertised as `hydra:next`, if any
pub fn mock_collection_page(
    page: u64,
    members: Vec<Value>,
    total_items: u64,
    next_page: Option<u64>,
) -> Value {
    let mut view = json!({
        "@id": format!("/pokemon?page={}", page),
        "hydra:first": "/pokemon?page=1",
    });
    if let Some(next) = next_page {
        view["hydra:next"] = json!(format!("/pokemon?page={}", next));
    }

    json!({
        "@context": "/contexts/Pokemon",
        "@id": "/pokemon",
        "@type": "hydra:Collection",
        "hydra:member": members,
        "hydra:totalItems": total_items,
        "hydra:view": view,
    })
}
