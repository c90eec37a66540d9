use super::*;

/// Tests the paging links of a middle page.
///
/// Expected: Ok with 30 members and first, last, previous and next links
#[tokio::test]
async fn links_middle_page() -> Result<(), TestError> {
    let mut builder = TestBuilder::new();
    for catalog_index in 1..=75 {
        builder = builder.with_mock_pokemon(catalog_index, true);
    }
    let test = builder.build().await?;

    let pokemon_service = PokemonService::new(&test.db);
    let result = pokemon_service.list(Some(2), None).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let collection = result.unwrap();
    assert_eq!(collection.iri, "/pokemon");
    assert_eq!(collection.total_items, 75);
    assert_eq!(collection.member.len(), 30);
    assert_eq!(collection.member[0].catalog_index, 31);

    let view = collection.view.expect("view should be present");
    assert_eq!(view.iri, "/pokemon?page=2");
    assert_eq!(view.first.as_deref(), Some("/pokemon?page=1"));
    assert_eq!(view.last.as_deref(), Some("/pokemon?page=3"));
    assert_eq!(view.previous.as_deref(), Some("/pokemon?page=1"));
    assert_eq!(view.next.as_deref(), Some("/pokemon?page=3"));

    Ok(())
}

/// Tests that the imported filter is applied and carried into the links.
///
/// Expected: Ok with only custom records and links keeping `importe=false`
#[tokio::test]
async fn filters_and_keeps_filter_in_links() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_pokemon(1, true)
        .with_mock_pokemon(152, false)
        .with_mock_pokemon(153, false)
        .build()
        .await?;

    let pokemon_service = PokemonService::new(&test.db);
    let collection = pokemon_service.list(None, Some(false)).await.unwrap();

    assert_eq!(collection.total_items, 2);
    assert!(collection.member.iter().all(|p| !p.imported));
    let view = collection.view.unwrap();
    assert_eq!(view.iri, "/pokemon?page=1&importe=false");
    assert_eq!(view.previous, None);
    assert_eq!(view.next, None);

    Ok(())
}

/// Tests an empty catalog.
///
/// Expected: Ok with no members and a single page
#[tokio::test]
async fn lists_empty_catalog() -> Result<(), TestError> {
    let test = test_context_with_tables!(entity::prelude::Pokemon)?;

    let pokemon_service = PokemonService::new(&test.db);
    let collection = pokemon_service.list(Some(1), None).await.unwrap();

    assert_eq!(collection.total_items, 0);
    assert!(collection.member.is_empty());
    assert_eq!(collection.view.unwrap().last.as_deref(), Some("/pokemon?page=1"));

    Ok(())
}

/// Expect Error for a page less than 1
#[tokio::test]
async fn rejects_page_zero() -> Result<(), TestError> {
    let test = test_context_with_tables!(entity::prelude::Pokemon)?;

    let pokemon_service = PokemonService::new(&test.db);
    let result = pokemon_service.list(Some(0), None).await;

    assert!(matches!(
        result,
        Err(Error::PokemonError(PokemonError::InvalidPage(0)))
    ));

    Ok(())
}

/// Expect an empty page with the real total when the row offset overflows
#[tokio::test]
async fn lists_empty_page_for_huge_page_number() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_pokemon(1, true)
        .build()
        .await?;

    let pokemon_service = PokemonService::new(&test.db);
    let collection = pokemon_service.list(Some(i64::MAX), None).await.unwrap();

    assert_eq!(collection.total_items, 1);
    assert!(collection.member.is_empty());
    let view = collection.view.unwrap();
    assert_eq!(view.next, None);
    assert_eq!(view.last.as_deref(), Some("/pokemon?page=1"));

    Ok(())
}
