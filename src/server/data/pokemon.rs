use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, DeleteResult,
    EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{model::pokemon::PokemonInput, server::model::db::PokemonModel};

pub struct PokemonRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PokemonRepository<'a> {
    /// Creates a new instance of [`PokemonRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a record, storing the imported flag exactly as given
    pub async fn create(&self, input: PokemonInput) -> Result<PokemonModel, DbErr> {
        let now = Utc::now().naive_utc();

        let mut pokemon = entity::pokemon::ActiveModel {
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };
        set_fields(&mut pokemon, input);

        pokemon.insert(self.db).await
    }

    pub async fn get(&self, id: i32) -> Result<Option<PokemonModel>, DbErr> {
        entity::prelude::Pokemon::find_by_id(id).one(self.db).await
    }

    /// Fetches one page of records ordered by id along with the total record count
    ///
    /// `page` is 1-based. Pages past the end return an empty list with the real total,
    /// including pages whose row offset does not fit in a `u64`.
    pub async fn list_page(
        &self,
        page: u64,
        per_page: u64,
        imported: Option<bool>,
    ) -> Result<(Vec<PokemonModel>, u64), DbErr> {
        let mut query =
            entity::prelude::Pokemon::find().order_by_asc(entity::pokemon::Column::Id);

        if let Some(imported) = imported {
            query = query.filter(entity::pokemon::Column::Imported.eq(imported));
        }

        let paginator = query.paginate(self.db, per_page);
        let total = paginator.num_items().await?;

        let page_index = page.saturating_sub(1);
        let records = match page_index.checked_mul(per_page) {
            Some(offset) if offset < total => paginator.fetch_page(page_index).await?,
            _ => Vec::new(),
        };

        Ok((records, total))
    }

    /// Overwrites every writable field of a record
    ///
    /// Returns `None` if no record with the given id exists.
    pub async fn update(
        &self,
        id: i32,
        input: PokemonInput,
    ) -> Result<Option<PokemonModel>, DbErr> {
        let Some(existing) = self.get(id).await? else {
            return Ok(None);
        };

        let mut pokemon = existing.into_active_model();
        set_fields(&mut pokemon, input);
        pokemon.updated_at = ActiveValue::Set(Utc::now().naive_utc());

        pokemon.update(self.db).await.map(Some)
    }

    /// Deletes a record
    ///
    /// Returns OK regardless of the record existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Pokemon::delete_by_id(id)
            .exec(self.db)
            .await
    }
}

fn set_fields(pokemon: &mut entity::pokemon::ActiveModel, input: PokemonInput) {
    pokemon.catalog_index = ActiveValue::Set(input.catalog_index);
    pokemon.name = ActiveValue::Set(input.name);
    pokemon.primary_type = ActiveValue::Set(input.primary_type);
    pokemon.secondary_type = ActiveValue::Set(input.secondary_type);
    pokemon.description = ActiveValue::Set(input.description);
    pokemon.image = ActiveValue::Set(input.image);
    pokemon.hp = ActiveValue::Set(input.hp);
    pokemon.attack = ActiveValue::Set(input.attack);
    pokemon.defense = ActiveValue::Set(input.defense);
    pokemon.speed = ActiveValue::Set(input.speed);
    pokemon.special = ActiveValue::Set(input.special);
    pokemon.weight_kg = ActiveValue::Set(input.weight_kg);
    pokemon.height_m = ActiveValue::Set(input.height_m);
    pokemon.imported = ActiveValue::Set(input.imported);
}
