//! Catalog record database insertion utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, fixtures::pokemon::PokemonFixtures, model::PokemonModel};

impl<'a> PokemonFixtures<'a> {
    /// Insert a mock catalog record into the database.
    ///
    /// The record is named `Pokemon {catalog_index}` and carries the same values as
    /// [`mock_pokemon_input`](crate::fixtures::pokemon::factory::mock_pokemon_input).
    ///
    /// # Arguments
    /// - `catalog_index` - Value of the catalog index column
    /// - `imported` - Whether the record counts as imported
    ///
    /// # Returns
    /// - `Ok(PokemonModel)` - The created record
    /// - `Err(TestError::DbErr)` - Insert failed
    pub async fn insert_mock_pokemon(
        &self,
        catalog_index: i32,
        imported: bool,
    ) -> Result<PokemonModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::Pokemon::insert(entity::pokemon::ActiveModel {
                catalog_index: ActiveValue::Set(catalog_index),
                name: ActiveValue::Set(format!("Pokemon {}", catalog_index)),
                primary_type: ActiveValue::Set("normal".to_string()),
                secondary_type: ActiveValue::Set(None),
                description: ActiveValue::Set(Some(format!(
                    "Description de Pokemon {}.",
                    catalog_index
                ))),
                image: ActiveValue::Set("/sprite/missingNo.png".to_string()),
                hp: ActiveValue::Set(45),
                attack: ActiveValue::Set(49),
                defense: ActiveValue::Set(49),
                speed: ActiveValue::Set(45),
                special: ActiveValue::Set(65),
                weight_kg: ActiveValue::Set(6.9),
                height_m: ActiveValue::Set(0.7),
                imported: ActiveValue::Set(imported),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.context.db)
            .await?,
        )
    }
}
