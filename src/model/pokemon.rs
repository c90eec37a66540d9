//! Catalog record and collection envelope as they appear on the wire.
//!
//! Field names follow the Resource API's JSON-LD vocabulary (`numpokedex`, `type1`, `importe`,
//! `hydra:member`, ...) while the Rust side uses descriptive names.

use std::future::Future;

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::api::ViolationDto;

/// Path of the catalog collection on the Resource API.
pub static COLLECTION_PATH: &str = "/pokemon";

/// Image used when a record is created without picking a sprite.
pub static DEFAULT_IMAGE: &str = "/sprite/missingNo.png";

/// A catalog record as returned by the Resource API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PokemonDto {
    /// Resource path of the record, e.g. `/pokemon/12`
    #[serde(rename = "@id")]
    pub iri: String,
    pub id: i32,
    #[serde(rename = "numpokedex")]
    pub catalog_index: i32,
    pub name: String,
    #[serde(rename = "type1")]
    pub primary_type: String,
    #[serde(rename = "type2", default)]
    pub secondary_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "images")]
    pub image: String,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    #[serde(rename = "vitesse")]
    pub speed: i32,
    pub special: i32,
    #[serde(rename = "poids")]
    pub weight_kg: f64,
    #[serde(rename = "taille")]
    pub height_m: f64,
    #[serde(rename = "importe")]
    pub imported: bool,
}

impl PokemonDto {
    /// Copy the writable fields of this record into a create/replace body.
    pub fn to_input(&self) -> PokemonInput {
        PokemonInput {
            catalog_index: self.catalog_index,
            name: self.name.clone(),
            primary_type: self.primary_type.clone(),
            secondary_type: self.secondary_type.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
            special: self.special,
            weight_kg: self.weight_kg,
            height_m: self.height_m,
            imported: self.imported,
        }
    }
}

/// Body of a create (`POST`) or replace (`PUT`) request.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PokemonInput {
    #[serde(rename = "numpokedex")]
    pub catalog_index: i32,
    pub name: String,
    #[serde(rename = "type1")]
    pub primary_type: String,
    #[serde(rename = "type2", default)]
    pub secondary_type: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "images")]
    pub image: String,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    #[serde(rename = "vitesse")]
    pub speed: i32,
    pub special: i32,
    #[serde(rename = "poids")]
    pub weight_kg: f64,
    #[serde(rename = "taille")]
    pub height_m: f64,
    #[serde(rename = "importe", default)]
    pub imported: bool,
}

impl PokemonInput {
    /// Structural checks the Resource API applies to every stored record.
    ///
    /// Returns an empty `Vec` when the record is acceptable.
    pub fn violations(&self) -> Vec<ViolationDto> {
        let mut violations = Vec::new();

        if self.name.trim().is_empty() {
            violations.push(ViolationDto::new("name", "This value should not be blank."));
        }

        if self.primary_type.trim().is_empty() {
            violations.push(ViolationDto::new("type1", "This value should not be blank."));
        }

        if let Some(secondary) = &self.secondary_type {
            if secondary == &self.primary_type {
                violations.push(ViolationDto::new(
                    "type2",
                    "The secondary type must differ from the primary type.",
                ));
            }
        }

        if self.image.trim().is_empty() {
            violations.push(ViolationDto::new("images", "This value should not be blank."));
        }

        violations
    }
}

/// Body of a partial update (`PATCH`) request; absent fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PokemonPatch {
    #[serde(rename = "numpokedex", default, skip_serializing_if = "Option::is_none")]
    pub catalog_index: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type1", default, skip_serializing_if = "Option::is_none")]
    pub primary_type: Option<String>,
    /// `null` clears the secondary type, an absent key keeps it
    #[serde(
        rename = "type2",
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub secondary_type: Option<Option<String>>,
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    #[cfg_attr(feature = "server", schema(value_type = Option<String>))]
    pub description: Option<Option<String>>,
    #[serde(rename = "images", default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hp: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attack: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defense: Option<i32>,
    #[serde(rename = "vitesse", default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub special: Option<i32>,
    #[serde(rename = "poids", default, skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    #[serde(rename = "taille", default, skip_serializing_if = "Option::is_none")]
    pub height_m: Option<f64>,
}

impl PokemonPatch {
    /// Apply this patch on top of an existing record.
    pub fn apply_to(self, mut input: PokemonInput) -> PokemonInput {
        if let Some(catalog_index) = self.catalog_index {
            input.catalog_index = catalog_index;
        }
        if let Some(name) = self.name {
            input.name = name;
        }
        if let Some(primary_type) = self.primary_type {
            input.primary_type = primary_type;
        }
        if let Some(secondary_type) = self.secondary_type {
            input.secondary_type = secondary_type;
        }
        if let Some(description) = self.description {
            input.description = description;
        }
        if let Some(image) = self.image {
            input.image = image;
        }
        if let Some(hp) = self.hp {
            input.hp = hp;
        }
        if let Some(attack) = self.attack {
            input.attack = attack;
        }
        if let Some(defense) = self.defense {
            input.defense = defense;
        }
        if let Some(speed) = self.speed {
            input.speed = speed;
        }
        if let Some(special) = self.special {
            input.special = special;
        }
        if let Some(weight_kg) = self.weight_kg {
            input.weight_kg = weight_kg;
        }
        if let Some(height_m) = self.height_m {
            input.height_m = height_m;
        }

        input
    }
}

/// Distinguishes an explicit `null` (`Some(None)`) from a missing key (`None`).
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// One page of the catalog collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct PokemonCollection {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "hydra:member")]
    pub member: Vec<PokemonDto>,
    #[serde(rename = "hydra:totalItems")]
    pub total_items: u64,
    #[serde(rename = "hydra:view", default, skip_serializing_if = "Option::is_none")]
    pub view: Option<CollectionView>,
}

impl PokemonCollection {
    /// Cursor of the following page, if the Resource API advertised one.
    pub fn next_page(&self) -> Option<&str> {
        self.view.as_ref()?.next.as_deref()
    }
}

/// Paging links of a collection page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
pub struct CollectionView {
    #[serde(rename = "@id")]
    pub iri: String,
    #[serde(rename = "hydra:first", default, skip_serializing_if = "Option::is_none")]
    pub first: Option<String>,
    #[serde(rename = "hydra:last", default, skip_serializing_if = "Option::is_none")]
    pub last: Option<String>,
    #[serde(rename = "hydra:previous", default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    #[serde(rename = "hydra:next", default, skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

/// Build the path of a collection page, keeping the optional `importe` filter.
pub fn collection_path(page: u64, imported: Option<bool>) -> String {
    match imported {
        Some(imported) => format!("{}?page={}&importe={}", COLLECTION_PATH, page, imported),
        None => format!("{}?page={}", COLLECTION_PATH, page),
    }
}

/// Split records into imported ones and user authored or edited ones, each sorted by
/// catalog index.
pub fn split_by_origin(records: Vec<PokemonDto>) -> (Vec<PokemonDto>, Vec<PokemonDto>) {
    let (mut imported, mut custom): (Vec<_>, Vec<_>) =
        records.into_iter().partition(|pokemon| pokemon.imported);

    imported.sort_by_key(|pokemon| pokemon.catalog_index);
    custom.sort_by_key(|pokemon| pokemon.catalog_index);

    (imported, custom)
}

/// Walk every page of the catalog collection and return all records.
///
/// Starts from `first_page` and keeps following the `hydra:next` cursor of each page until a
/// page without one is reached. The whole collection is buffered before returning; the first
/// failing page aborts the walk with its error.
///
/// # Arguments
/// - `first_page` - Path of the first page, usually [`collection_path`]`(1, filter)`
/// - `fetch_page` - Fetches and decodes the page behind a cursor
///
/// # Returns
/// - `Ok(Vec<PokemonDto>)` - Members of every page, in page order
/// - `Err(E)` - The error of the first page that could not be fetched
pub async fn collect_pages<E, F, Fut>(
    first_page: String,
    mut fetch_page: F,
) -> Result<Vec<PokemonDto>, E>
where
    F: FnMut(String) -> Fut,
    Fut: Future<Output = Result<PokemonCollection, E>>,
{
    let mut records = Vec::new();
    let mut cursor = Some(first_page);

    while let Some(path) = cursor.take() {
        let page = fetch_page(path).await?;

        cursor = page.next_page().map(str::to_string);
        records.extend(page.member);
    }

    Ok(records)
}
