//! Tests for PokemonRepository::create method.

use super::*;

/// Tests creating an imported record.
///
/// Verifies that every field of the input is stored and that both timestamps are set.
///
/// Expected: Ok with a record mirroring the input
#[tokio::test]
async fn creates_imported_record() -> Result<(), TestError> {
    let test = test_context_with_tables!(entity::prelude::Pokemon)?;
    let input = mock_input(1, "Bulbizarre", true)?;

    let pokemon_repo = PokemonRepository::new(&test.db);
    let result = pokemon_repo.create(input.clone()).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let created = result.unwrap();
    assert_eq!(created.catalog_index, 1);
    assert_eq!(created.name, "Bulbizarre");
    assert_eq!(created.primary_type, input.primary_type);
    assert_eq!(created.secondary_type, None);
    assert_eq!(created.weight_kg, input.weight_kg);
    assert!(created.imported);
    assert_eq!(created.created_at, created.updated_at);

    Ok(())
}

/// Tests that the imported flag is stored as given.
///
/// Expected: Ok with imported set to false
#[tokio::test]
async fn stores_custom_record_as_not_imported() -> Result<(), TestError> {
    let test = test_context_with_tables!(entity::prelude::Pokemon)?;

    let pokemon_repo = PokemonRepository::new(&test.db);
    let created = pokemon_repo.create(mock_input(152, "Fossilo", false)?).await?;

    assert!(!created.imported);
    assert_eq!(created.catalog_index, 152);

    Ok(())
}

/// Tests that two records may share a catalog index.
///
/// Expected: Ok with two distinct ids
#[tokio::test]
async fn allows_duplicate_catalog_index() -> Result<(), TestError> {
    let test = test_context_with_tables!(entity::prelude::Pokemon)?;

    let pokemon_repo = PokemonRepository::new(&test.db);
    let first = pokemon_repo.create(mock_input(152, "Fossilo", false)?).await?;
    let second = pokemon_repo.create(mock_input(152, "Spectro", false)?).await?;

    assert_ne!(first.id, second.id);

    Ok(())
}

/// Expect Error when required tables haven't been created
#[tokio::test]
async fn fails_when_tables_missing() -> Result<(), TestError> {
    let test = test_context_with_tables!()?;

    let pokemon_repo = PokemonRepository::new(&test.db);
    let result = pokemon_repo.create(mock_input(1, "Bulbizarre", true)?).await;

    assert!(result.is_err());

    Ok(())
}
