use super::*;

/// Expect one affected row and the record gone after deleting it
#[tokio::test]
async fn deletes_existing_record() -> Result<(), TestError> {
    let mut test = test_context_with_tables!(entity::prelude::Pokemon)?;
    let model = test.pokemon().insert_mock_pokemon(7, true).await?;

    let pokemon_repo = PokemonRepository::new(&test.db);
    let result = pokemon_repo.delete(model.id).await?;

    assert_eq!(result.rows_affected, 1);
    assert!(pokemon_repo.get(model.id).await?.is_none());

    Ok(())
}

/// Expect Ok with zero affected rows when the record doesn't exist
#[tokio::test]
async fn reports_zero_rows_for_nonexistent_record() -> Result<(), TestError> {
    let test = test_context_with_tables!(entity::prelude::Pokemon)?;

    let pokemon_repo = PokemonRepository::new(&test.db);
    let result = pokemon_repo.delete(1).await?;

    assert_eq!(result.rows_affected, 0);

    Ok(())
}
