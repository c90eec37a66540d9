//! Tests for the run_import endpoint.

use std::time::Duration;

use axum::extract::State;
use retrodex::{model::import::ImportReport, server::controller::import::run_import};

use super::*;

/// Tests a complete run through the endpoint.
///
/// Expected: 200 OK with the report and the lock released afterwards
#[tokio::test]
async fn returns_report_after_run() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_snapshot(vec![], 1)
        .with_source_entry(1, "Bulbizarre", &["grass", "poison"], 1)
        .with_catalog_create_endpoint(1, 1)
        .build()
        .await?;
    let state = test.into_app_state_with_limit(1);

    let result = run_import(State(state.clone())).await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::OK);
    let report: ImportReport = json_body(resp).await;
    assert_eq!(report.imported_count, 1);
    assert!(state.import_lock.try_acquire().is_some());

    test.assert_mocks();

    Ok(())
}

/// Tests a client that stops waiting right after the run started.
///
/// Verifies that dropping the request future neither aborts the run nor releases the lock early.
///
/// Expected: the record is still created and the lock is freed once the run finishes
#[tokio::test]
async fn finishes_run_after_client_disconnect() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_snapshot(vec![], 1)
        .with_source_entry(1, "Bulbizarre", &["grass", "poison"], 1)
        .with_catalog_create_endpoint(1, 1)
        .build()
        .await?;
    let state = test.into_app_state_with_limit(1);

    let request = run_import(State(state.clone()));
    let waited = tokio::time::timeout(Duration::ZERO, request).await;
    assert!(waited.is_err(), "Run should still be in progress");

    let mut released = false;
    for _ in 0..200 {
        if state.import_lock.try_acquire().is_some() {
            released = true;
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(released, "Lock should be released once the run finishes");

    test.assert_mocks();

    Ok(())
}

/// Tests starting a run while another one holds the lock.
///
/// Expected: 409 Conflict without any outbound request
#[tokio::test]
async fn returns_409_while_running() -> Result<(), TestError> {
    let test = TestBuilder::new().with_catalog_snapshot(vec![], 0).build().await?;
    let state = test.into_app_state_with_limit(1);
    let _guard = state.import_lock.try_acquire().expect("lock should be free");

    let result = run_import(State(state.clone())).await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    test.assert_mocks();

    Ok(())
}

/// Tests a run whose snapshot cannot be read.
///
/// Expected: 502 Bad Gateway
#[tokio::test]
async fn returns_502_when_snapshot_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_page_error(1, 503, 1)
        .build()
        .await?;
    let state = test.into_app_state_with_limit(1);

    let result = run_import(State(state)).await;

    let resp = into_response(result);
    assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);

    test.assert_mocks();

    Ok(())
}
