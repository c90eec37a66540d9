use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    model::pokemon::{
        collection_path, CollectionView, PokemonCollection, PokemonDto, PokemonInput,
        PokemonPatch, COLLECTION_PATH,
    },
    server::{data::pokemon::PokemonRepository, error::pokemon::PokemonError, error::Error},
};

/// Records per collection page.
pub const PAGE_SIZE: u64 = 30;

pub struct PokemonService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PokemonService<'a> {
    /// Creates a new instance of [`PokemonService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds one page of the collection with its Hydra paging links
    ///
    /// A missing page defaults to 1; the `imported` filter is carried into every link.
    pub async fn list(
        &self,
        page: Option<i64>,
        imported: Option<bool>,
    ) -> Result<PokemonCollection, Error> {
        let page = page.unwrap_or(1);
        if page < 1 {
            return Err(PokemonError::InvalidPage(page).into());
        }
        let page = page as u64;

        let pokemon_repository = PokemonRepository::new(self.db);
        let (records, total) = pokemon_repository
            .list_page(page, PAGE_SIZE, imported)
            .await?;

        let last = total.div_ceil(PAGE_SIZE).max(1);
        let view = CollectionView {
            iri: collection_path(page, imported),
            first: Some(collection_path(1, imported)),
            last: Some(collection_path(last, imported)),
            previous: (page > 1).then(|| collection_path(page - 1, imported)),
            next: (page < last).then(|| collection_path(page + 1, imported)),
        };

        Ok(PokemonCollection {
            iri: COLLECTION_PATH.to_string(),
            member: records.into_iter().map(PokemonDto::from).collect(),
            total_items: total,
            view: Some(view),
        })
    }

    pub async fn get(&self, id: i32) -> Result<PokemonDto, Error> {
        let pokemon_repository = PokemonRepository::new(self.db);

        match pokemon_repository.get(id).await? {
            Some(pokemon) => Ok(pokemon.into()),
            None => Err(PokemonError::NotFound(id).into()),
        }
    }

    pub async fn create(&self, input: PokemonInput) -> Result<PokemonDto, Error> {
        validate(&input)?;

        let pokemon_repository = PokemonRepository::new(self.db);
        let pokemon = pokemon_repository.create(input).await?;

        tracing::debug!(
            "Created pokemon {} (#{}, imported: {})",
            pokemon.name,
            pokemon.catalog_index,
            pokemon.imported
        );

        Ok(pokemon.into())
    }

    /// Replaces a record; the result is never flagged as imported
    pub async fn replace(&self, id: i32, mut input: PokemonInput) -> Result<PokemonDto, Error> {
        input.imported = false;
        validate(&input)?;

        let pokemon_repository = PokemonRepository::new(self.db);

        match pokemon_repository.update(id, input).await? {
            Some(pokemon) => Ok(pokemon.into()),
            None => Err(PokemonError::NotFound(id).into()),
        }
    }

    /// Merges a partial update into a record; the result is never flagged as imported
    pub async fn patch(&self, id: i32, patch: PokemonPatch) -> Result<PokemonDto, Error> {
        let current = self.get(id).await?;

        let mut input = patch.apply_to(current.to_input());
        input.imported = false;
        validate(&input)?;

        let pokemon_repository = PokemonRepository::new(self.db);

        match pokemon_repository.update(id, input).await? {
            Some(pokemon) => Ok(pokemon.into()),
            None => Err(PokemonError::NotFound(id).into()),
        }
    }

    pub async fn delete(&self, id: i32) -> Result<(), Error> {
        let pokemon_repository = PokemonRepository::new(self.db);
        let result = pokemon_repository.delete(id).await?;

        if result.rows_affected == 0 {
            return Err(PokemonError::NotFound(id).into());
        }

        tracing::debug!("Deleted pokemon {}", id);

        Ok(())
    }
}

fn validate(input: &PokemonInput) -> Result<(), PokemonError> {
    let violations = input.violations();
    if violations.is_empty() {
        Ok(())
    } else {
        Err(PokemonError::Validation(violations))
    }
}
