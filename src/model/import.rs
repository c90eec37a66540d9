use serde::{Deserialize, Serialize};

/// Last catalog index covered by the bulk import (generation one).
pub const IMPORT_RANGE_END: i32 = 151;

/// A record the importer created or left alone.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ImportEntry {
    pub catalog_index: i32,
    pub name: String,
}

/// An id the importer could not bring over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ImportFailure {
    pub catalog_index: i32,
    pub reason: String,
}

/// Result of processing a single source id.
#[derive(Clone, Debug, PartialEq)]
pub enum ImportOutcome {
    Created(ImportEntry),
    Skipped(ImportEntry),
    Failed(ImportFailure),
}

/// Aggregate result of one import run.
///
/// `status` holds the user facing lines in the order the ids were processed, followed by a
/// closing summary once [`ImportReport::finish`] has been called.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ImportReport {
    pub imported_count: u32,
    pub skipped: Vec<ImportEntry>,
    pub errors: Vec<ImportFailure>,
    pub status: Vec<String>,
}

impl ImportReport {
    /// Fold the outcome of one id into the report.
    pub fn record(&mut self, outcome: ImportOutcome) {
        match outcome {
            ImportOutcome::Created(_) => {
                self.imported_count += 1;
            }
            ImportOutcome::Skipped(entry) => {
                self.status.push(format!(
                    "Le Pokémon {} existe déjà et a été importé, saut de l'importation.",
                    entry.name
                ));
                self.skipped.push(entry);
            }
            ImportOutcome::Failed(failure) => {
                self.status.push(format!(
                    "Erreur lors de l'importation du Pokémon {} : {}",
                    failure.catalog_index, failure.reason
                ));
                self.errors.push(failure);
            }
        }
    }

    /// Append the closing summary line.
    pub fn finish(mut self) -> Self {
        let summary = if self.errors.is_empty() {
            "Importation réussie !".to_string()
        } else {
            format!(
                "Importation terminée avec {} erreur(s).",
                self.errors.len()
            )
        };
        self.status.push(summary);

        self
    }
}
