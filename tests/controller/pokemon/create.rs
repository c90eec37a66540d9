//! Tests for the create_pokemon endpoint.

use super::*;

/// Tests creating a valid record.
///
/// Expected: 201 Created with the stored record echoed back
#[tokio::test]
async fn creates_record() -> Result<(), TestError> {
    let test = test_context_with_tables!(entity::prelude::Pokemon)?;

    let result = create_pokemon(
        State(test.into_app_state()),
        Json(mock_input(152, "Fossilo", false)),
    )
    .await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: PokemonDto = json_body(resp).await;
    assert_eq!(created.catalog_index, 152);
    assert_eq!(created.name, "Fossilo");
    assert!(!created.imported);

    Ok(())
}

/// Tests creating a record with a blank name.
///
/// Expected: 422 Unprocessable Entity listing the `name` violation
#[tokio::test]
async fn rejects_blank_name() -> Result<(), TestError> {
    let test = test_context_with_tables!(entity::prelude::Pokemon)?;

    let result = create_pokemon(
        State(test.into_app_state()),
        Json(mock_input(152, "  ", false)),
    )
    .await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: ValidationErrorDto = json_body(resp).await;
    assert_eq!(body.violations.len(), 1);
    assert_eq!(body.violations[0].property_path, "name");

    Ok(())
}

/// Tests a database failure while creating.
///
/// Expected: 500 Internal Server Error
#[tokio::test]
async fn returns_500_when_tables_missing() -> Result<(), TestError> {
    let test = test_context_with_tables!()?;

    let result = create_pokemon(
        State(test.into_app_state()),
        Json(mock_input(1, "Bulbizarre", true)),
    )
    .await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
