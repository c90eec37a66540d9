use super::*;

/// Expect 200 OK with the last page and no next link
#[tokio::test]
async fn returns_requested_page() -> Result<(), TestError> {
    let mut builder = TestBuilder::new();
    for catalog_index in 1..=31 {
        builder = builder.with_mock_pokemon(catalog_index, true);
    }
    let test = builder.build().await?;

    let result = list_pokemon(
        State(test.into_app_state()),
        Query(ListParams {
            page: Some(2),
            importe: None,
        }),
    )
    .await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let collection: PokemonCollection = json_body(resp).await;
    assert_eq!(collection.total_items, 31);
    assert_eq!(collection.member.len(), 1);
    assert_eq!(collection.next_page(), None);

    Ok(())
}

/// Expect 400 Bad Request for a page less than 1
#[tokio::test]
async fn returns_400_for_negative_page() -> Result<(), TestError> {
    let test = test_context_with_tables!(entity::prelude::Pokemon)?;

    let result = list_pokemon(
        State(test.into_app_state()),
        Query(ListParams {
            page: Some(-1),
            importe: None,
        }),
    )
    .await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Expect 200 OK with an empty page for a page number whose row offset overflows
#[tokio::test]
async fn returns_empty_page_for_max_page() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_mock_pokemon(1, true)
        .build()
        .await?;

    let result = list_pokemon(
        State(test.into_app_state()),
        Query(ListParams {
            page: Some(i64::MAX),
            importe: None,
        }),
    )
    .await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let collection: PokemonCollection = json_body(resp).await;
    assert_eq!(collection.total_items, 1);
    assert!(collection.member.is_empty());

    Ok(())
}
