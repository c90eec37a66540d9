//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use mockito::{Mock, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{
    error::TestError,
    fixtures::pokemon::factory::{mock_collection_page, mock_pokemon_source, mock_species},
    TestContext,
};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// catalog records, and mock HTTP endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test context.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_pokemon_table: bool,

    // Database fixtures to insert
    pokemon: Vec<(i32, bool)>, // (catalog_index, imported)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    species_endpoints: Vec<(i32, Value, usize)>,
    pokemon_endpoints: Vec<(i32, Value, usize)>,
    source_error_endpoints: Vec<(String, usize, usize)>, // (path, status, expected_requests)
    catalog_page_endpoints: Vec<(u64, Value, usize)>,
    catalog_page_error_endpoints: Vec<(u64, usize, usize)>,
    catalog_create_endpoints: Vec<(i32, usize)>,
    catalog_create_error_endpoints: Vec<(i32, usize, usize)>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_pokemon_table: false,
            pokemon: Vec::new(),
            mock_builders: Vec::new(),
            species_endpoints: Vec::new(),
            pokemon_endpoints: Vec::new(),
            source_error_endpoints: Vec::new(),
            catalog_page_endpoints: Vec::new(),
            catalog_page_error_endpoints: Vec::new(),
            catalog_create_endpoints: Vec::new(),
            catalog_create_error_endpoints: Vec::new(),
        }
    }

    /// Add the catalog table to the test database.
    pub fn with_pokemon_table(mut self) -> Self {
        self.include_pokemon_table = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use retrodex_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), retrodex_test_utils::TestError> {
    /// let test = TestBuilder::new().with_table(Pokemon).build().await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a mock catalog record into the database.
    ///
    /// The catalog table is created automatically.
    ///
    /// # Arguments
    /// - `catalog_index` - Catalog index of the record
    /// - `imported` - Whether the record counts as imported
    pub fn with_mock_pokemon(mut self, catalog_index: i32, imported: bool) -> Self {
        self.include_pokemon_table = true;
        self.pokemon.push((catalog_index, imported));
        self
    }

    /// Serve both source API documents for one id, with a single current type.
    ///
    /// # Arguments
    /// - `id` - Source id
    /// - `french_name` - Localized name the importer should pick
    /// - `types` - Type names in slot order
    /// - `expected_requests` - Number of times each endpoint should be called
    pub fn with_source_entry(
        mut self,
        id: i32,
        french_name: &str,
        types: &[&str],
        expected_requests: usize,
    ) -> Self {
        self.species_endpoints
            .push((id, mock_species(id, french_name), expected_requests));
        self.pokemon_endpoints
            .push((id, mock_pokemon_source(id, types, 69, 7), expected_requests));
        self
    }

    /// Serve a custom `pokemon-species` document.
    pub fn with_species_endpoint(
        mut self,
        id: i32,
        species: Value,
        expected_requests: usize,
    ) -> Self {
        self.species_endpoints.push((id, species, expected_requests));
        self
    }

    /// Serve a custom `pokemon` document.
    pub fn with_pokemon_endpoint(
        mut self,
        id: i32,
        pokemon: Value,
        expected_requests: usize,
    ) -> Self {
        self.pokemon_endpoints.push((id, pokemon, expected_requests));
        self
    }

    /// Answer a source API path with an error status.
    ///
    /// # Arguments
    /// - `path` - Path below the source API prefix, e.g. `/pokemon-species/3`
    /// - `status_code` - HTTP status code to return
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_source_error(
        mut self,
        path: &str,
        status_code: usize,
        expected_requests: usize,
    ) -> Self {
        self.source_error_endpoints
            .push((path.to_string(), status_code, expected_requests));
        self
    }

    /// Serve one Resource API collection page.
    pub fn with_catalog_page_endpoint(
        mut self,
        page: u64,
        body: Value,
        expected_requests: usize,
    ) -> Self {
        self.catalog_page_endpoints
            .push((page, body, expected_requests));
        self
    }

    /// Answer one Resource API collection page with an error status.
    pub fn with_catalog_page_error(
        mut self,
        page: u64,
        status_code: usize,
        expected_requests: usize,
    ) -> Self {
        self.catalog_page_error_endpoints
            .push((page, status_code, expected_requests));
        self
    }

    /// Serve the whole Resource API collection as a single page.
    ///
    /// # Arguments
    /// - `records` - Records of the collection, see
    ///   [`mock_pokemon_record`](crate::fixtures::pokemon::factory::mock_pokemon_record)
    /// - `expected_requests` - Number of times the page should be requested
    pub fn with_catalog_snapshot(self, records: Vec<Value>, expected_requests: usize) -> Self {
        let total = records.len() as u64;
        self.with_catalog_page_endpoint(
            1,
            mock_collection_page(1, records, total, None),
            expected_requests,
        )
    }

    /// Accept an imported record with the given catalog index on `POST /pokemon`.
    pub fn with_catalog_create_endpoint(
        mut self,
        catalog_index: i32,
        expected_requests: usize,
    ) -> Self {
        self.catalog_create_endpoints
            .push((catalog_index, expected_requests));
        self
    }

    /// Reject a record with the given catalog index on `POST /pokemon`.
    pub fn with_catalog_create_error(
        mut self,
        catalog_index: i32,
        status_code: usize,
        expected_requests: usize,
    ) -> Self {
        self.catalog_create_error_endpoints
            .push((catalog_index, status_code, expected_requests));
        self
    }

    /// Add a custom mock endpoint.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use retrodex_test_utils::TestBuilder;
    ///
    /// # async fn example() -> Result<(), retrodex_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_mock_endpoint(|server| {
    ///         server
    ///             .mock("GET", "/api/v2/pokemon/1")
    ///             .with_status(503)
    ///             .expect(1)
    ///             .create()
    ///     })
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_mock_endpoint<F>(mut self, builder: F) -> Self
    where
        F: FnOnce(&mut ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(builder));
        self
    }

    /// Build the test context.
    ///
    /// Executes all queued operations in order:
    /// 1. Create database tables
    /// 2. Insert database fixtures
    /// 3. Create mock HTTP endpoints
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test context
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();
        if self.include_pokemon_table {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.push(schema.create_table_from_entity(entity::prelude::Pokemon));
        }
        all_tables.extend(self.tables);
        context.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for (catalog_index, imported) in self.pokemon {
            context
                .pokemon()
                .insert_mock_pokemon(catalog_index, imported)
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints come first so tests can layer an error mock before a success mock
        // on the same path.
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut context.server));
        }

        for (id, species, expected) in self.species_endpoints {
            mocks.push(context.pokemon().create_species_endpoint(id, species, expected));
        }

        for (id, pokemon, expected) in self.pokemon_endpoints {
            mocks.push(context.pokemon().create_pokemon_endpoint(id, pokemon, expected));
        }

        for (path, status, expected) in self.source_error_endpoints {
            mocks.push(
                context
                    .pokemon()
                    .create_source_error_endpoint(&path, status, expected),
            );
        }

        for (page, body, expected) in self.catalog_page_endpoints {
            mocks.push(
                context
                    .pokemon()
                    .create_catalog_page_endpoint(page, body, expected),
            );
        }

        for (page, status, expected) in self.catalog_page_error_endpoints {
            mocks.push(
                context
                    .pokemon()
                    .create_catalog_page_error_endpoint(page, status, expected),
            );
        }

        for (catalog_index, expected) in self.catalog_create_endpoints {
            mocks.push(
                context
                    .pokemon()
                    .create_catalog_create_endpoint(catalog_index, expected),
            );
        }

        for (catalog_index, status, expected) in self.catalog_create_error_endpoints {
            mocks.push(context.pokemon().create_catalog_create_error_endpoint(
                catalog_index,
                status,
                expected,
            ));
        }

        // Store mocks in the context so they live as long as the test
        context.mocks = mocks;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
