//! Bulk import of the generation one catalog from the third-party source API.
//!
//! A run first takes a snapshot of the whole catalog through the Resource API, then walks the
//! source ids one at a time. Each id is either created, skipped because an imported record
//! with the same catalog index already exists, or recorded as failed. A failing id never stops
//! the run; only a failing snapshot does, before anything is written.

pub mod lock;
pub mod source;
pub mod stats;

use std::collections::HashSet;

use dioxus_logger::tracing;
use futures::{stream, StreamExt};

use crate::{
    model::import::{ImportEntry, ImportFailure, ImportOutcome, ImportReport},
    server::{
        api::{catalog::CatalogClient, pokeapi::PokeApiClient},
        error::{api::ApiError, import::ImportError},
        service::import::{
            source::{sprite_url, SourceRecord},
            stats::StatTable,
        },
    },
};

pub struct ImportService<'a> {
    catalog_client: &'a CatalogClient,
    pokeapi_client: &'a PokeApiClient,
    stat_table: &'a StatTable,
    sprite_base_url: &'a str,
}

impl<'a> ImportService<'a> {
    /// Creates a new instance of [`ImportService`]
    pub fn new(
        catalog_client: &'a CatalogClient,
        pokeapi_client: &'a PokeApiClient,
        stat_table: &'a StatTable,
        sprite_base_url: &'a str,
    ) -> Self {
        Self {
            catalog_client,
            pokeapi_client,
            stat_table,
            sprite_base_url,
        }
    }

    /// Import source ids `1..=limit` into the catalog
    ///
    /// Ids are processed strictly in order; the next id's source fetch only starts once the
    /// previous id's create has resolved.
    ///
    /// # Returns
    /// - `Ok(ImportReport)` - Counts, skipped and failed ids, and status lines in call order
    /// - `Err(ImportError::Snapshot)` - The existing catalog could not be read, nothing was written
    pub async fn run(&self, limit: i32) -> Result<ImportReport, ImportError> {
        let snapshot = self
            .catalog_client
            .fetch_all(None)
            .await
            .map_err(ImportError::Snapshot)?;

        let already_imported: HashSet<i32> = snapshot
            .iter()
            .filter(|pokemon| pokemon.imported)
            .map(|pokemon| pokemon.catalog_index)
            .collect();

        tracing::info!(
            "Starting import of {} pokemon, {} of {} existing records already imported",
            limit,
            already_imported.len(),
            snapshot.len()
        );

        let already_imported = &already_imported;
        let report = stream::iter(1..=limit)
            .fold(ImportReport::default(), move |mut report, id| async move {
                let outcome = self.import_one(id, already_imported).await;
                report.record(outcome);
                report
            })
            .await
            .finish();

        tracing::info!(
            "Import finished: {} created, {} skipped, {} failed",
            report.imported_count,
            report.skipped.len(),
            report.errors.len()
        );

        Ok(report)
    }

    /// Fetch and assemble the source attributes of a single id
    pub async fn fetch_source(&self, id: i32) -> Result<SourceRecord, ApiError> {
        let species = self.pokeapi_client.get_species(id).await?;
        let pokemon = self.pokeapi_client.get_pokemon(id).await?;

        SourceRecord::assemble(id, &species, &pokemon)
    }

    async fn import_one(&self, id: i32, already_imported: &HashSet<i32>) -> ImportOutcome {
        match self.try_import_one(id, already_imported).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("Failed to import pokemon {}: {}", id, e);

                ImportOutcome::Failed(ImportFailure {
                    catalog_index: id,
                    reason: e.to_string(),
                })
            }
        }
    }

    async fn try_import_one(
        &self,
        id: i32,
        already_imported: &HashSet<i32>,
    ) -> Result<ImportOutcome, ApiError> {
        let source = self.fetch_source(id).await?;
        let entry = ImportEntry {
            catalog_index: id,
            name: source.name.clone(),
        };

        if already_imported.contains(&id) {
            tracing::debug!("Skipping pokemon {} ({}), already imported", id, entry.name);
            return Ok(ImportOutcome::Skipped(entry));
        }

        let input = source.into_input(
            id,
            sprite_url(self.sprite_base_url, id),
            self.stat_table.get(id),
        );
        self.catalog_client.create(&input).await?;

        tracing::debug!("Imported pokemon {} ({})", id, entry.name);

        Ok(ImportOutcome::Created(entry))
    }
}
