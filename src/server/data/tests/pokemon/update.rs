//! Tests for PokemonRepository::update method.

use super::*;

/// Tests overwriting an existing record.
///
/// Verifies that every writable field is replaced, the id and creation time are kept and the
/// update time moves forward.
///
/// Expected: Ok(Some) with the new values
#[tokio::test]
async fn overwrites_existing_record() -> Result<(), TestError> {
    let mut test = test_context_with_tables!(entity::prelude::Pokemon)?;
    let existing = test.pokemon().insert_mock_pokemon(4, true).await?;

    // Wait a moment to ensure timestamp changes
    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let mut input = mock_input(4, "Salamèche", false)?;
    input.primary_type = "fire".to_string();
    input.secondary_type = Some("dragon".to_string());

    let pokemon_repo = PokemonRepository::new(&test.db);
    let result = pokemon_repo.update(existing.id, input).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let updated = result.unwrap().expect("record should exist");
    assert_eq!(updated.id, existing.id);
    assert_eq!(updated.name, "Salamèche");
    assert_eq!(updated.primary_type, "fire");
    assert_eq!(updated.secondary_type.as_deref(), Some("dragon"));
    assert!(!updated.imported);
    assert_eq!(updated.created_at, existing.created_at);
    assert!(updated.updated_at > existing.updated_at);

    Ok(())
}

/// Expect None when updating a record not present in table
#[tokio::test]
async fn returns_none_for_nonexistent_record() -> Result<(), TestError> {
    let test = test_context_with_tables!(entity::prelude::Pokemon)?;

    let pokemon_repo = PokemonRepository::new(&test.db);
    let result = pokemon_repo
        .update(42, mock_input(4, "Salamèche", false)?)
        .await;

    assert!(result.is_ok());
    assert!(result.unwrap().is_none());

    Ok(())
}
