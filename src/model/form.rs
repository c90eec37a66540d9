//! Create / edit form rules for user authored records.

use crate::model::{
    api::ViolationDto,
    pokemon::{PokemonDto, PokemonInput, DEFAULT_IMAGE},
};

/// Types offered by the form, generation one only.
pub static POKEMON_TYPES: [&str; 14] = [
    "grass", "fire", "water", "electric", "ice", "fighting", "poison", "ground", "flying",
    "psychic", "bug", "ghost", "dragon", "normal",
];

/// Sprites a user can pick for a custom record.
pub static AVAILABLE_IMAGES: [&str; 4] = [
    "/sprite/fossil_aero.png",
    "/sprite/fossil_kabu.png",
    "/sprite/ghost.png",
    "/sprite/missingNo.png",
];

/// First catalog index handed out to user authored records.
pub const CUSTOM_CATALOG_INDEX_BASE: i32 = 152;

/// Catalog index for a user authored record given how many such records already exist.
///
/// Deleting and re-creating records can hand out an index twice.
pub fn custom_catalog_index(non_imported_count: usize) -> i32 {
    CUSTOM_CATALOG_INDEX_BASE + non_imported_count as i32
}

/// Pick the image to store: the user's choice, else the current one, else the placeholder.
pub fn resolve_image(selected: Option<&str>, current: Option<&str>) -> String {
    selected
        .or(current)
        .unwrap_or(DEFAULT_IMAGE)
        .to_string()
}

/// Raw form state, one string per input.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PokemonForm {
    pub name: String,
    pub type1: String,
    pub type2: String,
    pub hp: String,
    pub attack: String,
    pub defense: String,
    pub vitesse: String,
    pub special: String,
    pub poids: String,
    pub taille: String,
    pub description: String,
}

/// Parsed form values that passed validation.
#[derive(Clone, Debug, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub primary_type: String,
    pub secondary_type: Option<String>,
    pub hp: i32,
    pub attack: i32,
    pub defense: i32,
    pub speed: i32,
    pub special: i32,
    pub weight_kg: f64,
    pub height_m: f64,
    pub description: String,
}

impl FormValues {
    /// Turn validated values into a request body; user authored records are never imported.
    pub fn into_input(self, image: String, catalog_index: i32) -> PokemonInput {
        PokemonInput {
            catalog_index,
            name: self.name,
            primary_type: self.primary_type,
            secondary_type: self.secondary_type,
            description: Some(self.description),
            image,
            hp: self.hp,
            attack: self.attack,
            defense: self.defense,
            speed: self.speed,
            special: self.special,
            weight_kg: self.weight_kg,
            height_m: self.height_m,
            imported: false,
        }
    }
}

impl PokemonForm {
    /// Prefill the form from an existing record.
    pub fn from_dto(pokemon: &PokemonDto) -> Self {
        Self {
            name: pokemon.name.clone(),
            type1: pokemon.primary_type.clone(),
            type2: pokemon.secondary_type.clone().unwrap_or_default(),
            hp: pokemon.hp.to_string(),
            attack: pokemon.attack.to_string(),
            defense: pokemon.defense.to_string(),
            vitesse: pokemon.speed.to_string(),
            special: pokemon.special.to_string(),
            poids: pokemon.weight_kg.to_string(),
            taille: pokemon.height_m.to_string(),
            description: pokemon.description.clone().unwrap_or_default(),
        }
    }

    /// Validate every field, collecting one message per failing field.
    pub fn validate(&self) -> Result<FormValues, Vec<ViolationDto>> {
        let mut violations = Vec::new();

        let name = self.name.trim();
        if name.is_empty() {
            violations.push(ViolationDto::new(
                "name",
                "Le nom est requis. Veuillez entrer un nom valide.",
            ));
        }

        let type1 = self.type1.trim();
        if type1.is_empty() {
            violations.push(ViolationDto::new(
                "type1",
                "Le Type 1 est requis. Veuillez sélectionner un type.",
            ));
        }

        let type2 = self.type2.trim();
        if !type2.is_empty() && type2 == type1 {
            violations.push(ViolationDto::new(
                "type2",
                "On ne peut pas avoir deux fois le même type !",
            ));
        }

        let hp = positive_number::<i32>(&mut violations, "hp", &self.hp, "les points de vie");
        let attack = positive_number::<i32>(&mut violations, "attack", &self.attack, "l'attaque");
        let defense =
            positive_number::<i32>(&mut violations, "defense", &self.defense, "la défense");
        let speed = positive_number::<i32>(&mut violations, "vitesse", &self.vitesse, "la vitesse");
        let special =
            positive_number::<i32>(&mut violations, "special", &self.special, "le spécial");
        let weight = positive_number::<f64>(&mut violations, "poids", &self.poids, "le poids");
        let height = positive_number::<f64>(&mut violations, "taille", &self.taille, "la taille");

        let description = self.description.trim();
        if description.is_empty() {
            violations.push(ViolationDto::new(
                "description",
                "Il faut une description. Veuillez fournir une description détaillée.",
            ));
        }

        match (hp, attack, defense, speed, special, weight, height) {
            (
                Some(hp),
                Some(attack),
                Some(defense),
                Some(speed),
                Some(special),
                Some(weight_kg),
                Some(height_m),
            ) if violations.is_empty() => Ok(FormValues {
                name: name.to_string(),
                primary_type: type1.to_string(),
                secondary_type: (!type2.is_empty()).then(|| type2.to_string()),
                hp,
                attack,
                defense,
                speed,
                special,
                weight_kg,
                height_m,
                description: description.to_string(),
            }),
            _ => Err(violations),
        }
    }
}

/// Parse a required, strictly positive number, recording a violation on failure.
fn positive_number<T>(
    violations: &mut Vec<ViolationDto>,
    field: &str,
    raw: &str,
    label: &str,
) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let raw = raw.trim();

    if raw.is_empty() {
        violations.push(ViolationDto::new(
            field,
            format!(
                "Ce champ est obligatoire. Veuillez entrer un nombre pour {}.",
                label
            ),
        ));
        return None;
    }

    let Ok(value) = raw.parse::<T>() else {
        violations.push(ViolationDto::new(field, "Il faut un nombre."));
        return None;
    };

    if value <= T::default() {
        violations.push(ViolationDto::new(field, "Il faut un nombre positif."));
        return None;
    }

    Some(value)
}
