use super::*;

/// Tests that a failing source fetch only fails its own id.
///
/// Verifies that the ids after the failing one are still imported, that the failure is
/// reported with its id and that the closing line counts the errors.
///
/// Expected: Ok with ids 1 and 3 created and id 2 listed as failed
#[tokio::test]
async fn continues_after_source_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_snapshot(vec![], 1)
        .with_source_entry(1, "Bulbizarre", &["grass", "poison"], 1)
        .with_source_error("/pokemon-species/2", 500, 1)
        .with_source_entry(3, "Florizarre", &["grass", "poison"], 1)
        .with_catalog_create_endpoint(1, 1)
        .with_catalog_create_endpoint(2, 0)
        .with_catalog_create_endpoint(3, 1)
        .build()
        .await?;
    let state = test.into_app_state_with_limit(3);

    let report = import_service(&state).run(state.import_limit).await.unwrap();

    assert_eq!(report.imported_count, 2);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].catalog_index, 2);
    assert!(report.errors[0].reason.contains("500"));
    assert_eq!(report.status.len(), 2);
    assert!(report.status[0].starts_with("Erreur lors de l'importation du Pokémon 2 : "));
    assert_eq!(report.status[1], "Importation terminée avec 1 erreur(s).");

    test.assert_mocks();

    Ok(())
}

/// Tests that a rejected create only fails its own id.
///
/// Expected: Ok with id 1 listed as failed and id 2 created
#[tokio::test]
async fn continues_after_rejected_create() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_snapshot(vec![], 1)
        .with_source_entry(1, "Bulbizarre", &["grass", "poison"], 1)
        .with_source_entry(2, "Herbizarre", &["grass", "poison"], 1)
        .with_catalog_create_error(1, 422, 1)
        .with_catalog_create_endpoint(2, 1)
        .build()
        .await?;
    let state = test.into_app_state_with_limit(2);

    let report = import_service(&state).run(state.import_limit).await.unwrap();

    assert_eq!(report.imported_count, 1);
    let failed: Vec<i32> = report.errors.iter().map(|e| e.catalog_index).collect();
    assert_eq!(failed, vec![1]);

    test.assert_mocks();

    Ok(())
}

/// Tests a source species without a French name.
///
/// Expected: Ok with the id listed as failed and nothing created
#[tokio::test]
async fn fails_id_without_french_name() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_snapshot(vec![], 1)
        .with_species_endpoint(1, factory::mock_species_without_french_name(1), 1)
        .with_pokemon_endpoint(1, factory::mock_pokemon_source(1, &["grass"], 69, 7), 1)
        .with_catalog_create_endpoint(1, 0)
        .build()
        .await?;
    let state = test.into_app_state_with_limit(1);

    let report = import_service(&state).run(state.import_limit).await.unwrap();

    assert_eq!(report.imported_count, 0);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].catalog_index, 1);

    test.assert_mocks();

    Ok(())
}
