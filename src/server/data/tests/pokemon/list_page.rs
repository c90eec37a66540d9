//! Tests for PokemonRepository::list_page method.
//!
//! This module verifies paging, ordering and the imported filter of the collection query.

use super::*;

/// Tests fetching the first and last page of a collection.
///
/// Verifies that records are ordered by id, that a page holds at most `per_page` records and
/// that the total counts the whole collection.
///
/// Expected: Ok with 2 records then 1 record, total 3 each time
#[tokio::test]
async fn pages_through_records_in_id_order() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_pokemon(3, true)
        .with_mock_pokemon(1, true)
        .with_mock_pokemon(2, true)
        .build()
        .await?;

    let pokemon_repo = PokemonRepository::new(&test.db);
    let (first, total) = pokemon_repo.list_page(1, 2, None).await?;
    let (last, last_total) = pokemon_repo.list_page(2, 2, None).await?;

    assert_eq!(total, 3);
    assert_eq!(last_total, 3);
    let catalog_indexes: Vec<i32> = first.iter().map(|p| p.catalog_index).collect();
    assert_eq!(catalog_indexes, vec![3, 1]);
    assert_eq!(last.len(), 1);
    assert!(first[0].id < first[1].id && first[1].id < last[0].id);

    Ok(())
}

/// Tests fetching a page past the end of the collection.
///
/// Expected: Ok with an empty page and the real total
#[tokio::test]
async fn returns_empty_page_past_the_end() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_pokemon(1, true)
        .build()
        .await?;

    let pokemon_repo = PokemonRepository::new(&test.db);
    let (records, total) = pokemon_repo.list_page(5, 30, None).await?;

    assert!(records.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

/// Tests a page whose row offset overflows.
///
/// Expected: Ok with an empty page and the real total
#[tokio::test]
async fn returns_empty_page_when_offset_overflows() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_pokemon(1, true)
        .build()
        .await?;

    let pokemon_repo = PokemonRepository::new(&test.db);
    let (records, total) = pokemon_repo.list_page(u64::MAX, 30, None).await?;

    assert!(records.is_empty());
    assert_eq!(total, 1);

    Ok(())
}

/// Tests the imported filter.
///
/// Verifies that only records with the requested flag are returned and counted.
///
/// Expected: Ok with the single custom record when filtering on false
#[tokio::test]
async fn filters_on_imported_flag() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_pokemon(1, true)
        .with_mock_pokemon(2, true)
        .with_mock_pokemon(152, false)
        .build()
        .await?;

    let pokemon_repo = PokemonRepository::new(&test.db);
    let (custom, custom_total) = pokemon_repo.list_page(1, 30, Some(false)).await?;
    let (imported, imported_total) = pokemon_repo.list_page(1, 30, Some(true)).await?;

    assert_eq!(custom_total, 1);
    assert_eq!(custom[0].catalog_index, 152);
    assert_eq!(imported_total, 2);
    assert!(imported.iter().all(|p| p.imported));

    Ok(())
}

/// Expect an empty page with a zero total for an empty table
#[tokio::test]
async fn handles_empty_table() -> Result<(), TestError> {
    let test = test_context_with_tables!(entity::prelude::Pokemon)?;

    let pokemon_repo = PokemonRepository::new(&test.db);
    let (records, total) = pokemon_repo.list_page(1, 30, None).await?;

    assert!(records.is_empty());
    assert_eq!(total, 0);

    Ok(())
}
