//! Response shapes of the third-party source API.
//!
//! Only the fields the importer consumes are modelled; everything else in the documents is
//! ignored during deserialization.

use serde::Deserialize;

/// A `{ name, url }` reference to another source API resource.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LocalizedName {
    pub name: String,
    pub language: NamedResource,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

/// `GET /pokemon-species/{id}`
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PokemonSpecies {
    #[serde(default)]
    pub names: Vec<LocalizedName>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

impl PokemonSpecies {
    /// Name in the given language, if the source has one.
    pub fn localized_name(&self, language: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|n| n.language.name == language)
            .map(|n| n.name.as_str())
    }

    /// First flavor text in the given language with line breaks and form feeds flattened.
    pub fn localized_flavor_text(&self, language: &str) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| entry.flavor_text.replace(&['\n', '\u{c}'][..], " "))
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TypeSlot {
    pub slot: i32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

/// Types a pokemon had up to some earlier generation.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PastTypes {
    pub generation: NamedResource,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

/// `GET /pokemon/{id}`
///
/// `weight` is in hectograms and `height` in decimeters.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PokemonSource {
    pub weight: i32,
    pub height: i32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub past_types: Vec<PastTypes>,
}

/// Type names ordered by slot, the first one being the primary type.
pub fn type_names(slots: &[TypeSlot]) -> Vec<&str> {
    let mut slots: Vec<&TypeSlot> = slots.iter().collect();
    slots.sort_by_key(|s| s.slot);

    slots.into_iter().map(|s| s.kind.name.as_str()).collect()
}
