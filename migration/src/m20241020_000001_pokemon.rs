use sea_orm_migration::{prelude::*, schema::*};

static IDX_POKEMON_CATALOG_INDEX: &str = "idx_pokemon_catalog_index";
static IDX_POKEMON_IMPORTED: &str = "idx_pokemon_imported";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pokemon::Table)
                    .if_not_exists()
                    .col(pk_auto(Pokemon::Id))
                    .col(integer(Pokemon::CatalogIndex))
                    .col(string_len(Pokemon::Name, 50))
                    .col(string_len(Pokemon::PrimaryType, 50))
                    .col(string_len_null(Pokemon::SecondaryType, 50))
                    .col(text_null(Pokemon::Description))
                    .col(string(Pokemon::Image))
                    .col(integer(Pokemon::Hp))
                    .col(integer(Pokemon::Attack))
                    .col(integer(Pokemon::Defense))
                    .col(integer(Pokemon::Speed))
                    .col(integer(Pokemon::Special))
                    .col(double(Pokemon::WeightKg))
                    .col(double(Pokemon::HeightM))
                    .col(boolean(Pokemon::Imported))
                    .col(timestamp(Pokemon::CreatedAt))
                    .col(timestamp(Pokemon::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POKEMON_CATALOG_INDEX)
                    .table(Pokemon::Table)
                    .col(Pokemon::CatalogIndex)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_POKEMON_IMPORTED)
                    .table(Pokemon::Table)
                    .col(Pokemon::Imported)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POKEMON_IMPORTED)
                    .table(Pokemon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_POKEMON_CATALOG_INDEX)
                    .table(Pokemon::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Pokemon::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Pokemon {
    Table,
    Id,
    CatalogIndex,
    Name,
    PrimaryType,
    SecondaryType,
    Description,
    Image,
    Hp,
    Attack,
    Defense,
    Speed,
    Special,
    WeightKg,
    HeightM,
    Imported,
    CreatedAt,
    UpdatedAt,
}
