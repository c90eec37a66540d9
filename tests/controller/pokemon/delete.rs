use super::*;

/// Expect 204 No Content, then 404 Not Found on a second delete
#[tokio::test]
async fn deletes_record_once() -> Result<(), TestError> {
    let mut test = test_context_with_tables!(entity::prelude::Pokemon)?;
    let model = test.pokemon().insert_mock_pokemon(7, false).await?;
    let state = test.into_app_state();

    let first = into_response(delete_pokemon(State(state.clone()), Path(model.id)).await);
    let second = into_response(delete_pokemon(State(state), Path(model.id)).await);

    assert_eq!(first.status(), StatusCode::NO_CONTENT);
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    Ok(())
}
