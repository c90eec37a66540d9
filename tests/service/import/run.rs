use super::*;

/// Tests importing into an empty catalog.
///
/// Verifies that the first record is assembled from the French name, the current types, the
/// converted weight and height, the bundled base stats and the sprite link, and that it is
/// flagged as imported.
///
/// Expected: Ok with one record created and a single success status line
#[tokio::test]
async fn imports_first_record_with_all_attributes() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_snapshot(vec![], 1)
        .with_source_entry(1, "Bulbizarre", &["grass", "poison"], 1)
        .with_mock_endpoint(|server| {
            let sprite = format!("{}/sprites/1.png", server.url());

            server
                .mock("POST", "/pokemon")
                .match_body(Matcher::PartialJson(json!({
                    "numpokedex": 1,
                    "name": "Bulbizarre",
                    "type1": "grass",
                    "type2": "poison",
                    "description": "Description de Bulbizarre. Fin.",
                    "images": sprite,
                    "hp": 45,
                    "attack": 49,
                    "defense": 49,
                    "vitesse": 45,
                    "special": 65,
                    "poids": 6.9,
                    "taille": 0.7,
                    "importe": true,
                })))
                .with_status(201)
                .with_body("{}")
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let state = test.into_app_state_with_limit(1);

    let result = import_service(&state).run(state.import_limit).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let report = result.unwrap();
    assert_eq!(report.imported_count, 1);
    assert!(report.skipped.is_empty());
    assert!(report.errors.is_empty());
    assert_eq!(report.status, vec!["Importation réussie !".to_string()]);

    test.assert_mocks();

    Ok(())
}

/// Tests skipping ids whose catalog index is already imported.
///
/// Verifies that the source is still fetched for a skipped id, that no create is sent for it
/// and that a user authored record with a colliding index does not prevent the import.
///
/// Expected: Ok with ids 1, 2, 3 and 5 created and id 4 skipped
#[tokio::test]
async fn skips_already_imported_catalog_index() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_snapshot(
            vec![
                factory::mock_pokemon_record(10, 4, true),
                factory::mock_pokemon_record(11, 5, false),
            ],
            1,
        )
        .with_source_entry(1, "Bulbizarre", &["grass", "poison"], 1)
        .with_source_entry(2, "Herbizarre", &["grass", "poison"], 1)
        .with_source_entry(3, "Florizarre", &["grass", "poison"], 1)
        .with_source_entry(4, "Salamèche", &["fire"], 1)
        .with_source_entry(5, "Reptincel", &["fire"], 1)
        .with_catalog_create_endpoint(1, 1)
        .with_catalog_create_endpoint(2, 1)
        .with_catalog_create_endpoint(3, 1)
        .with_catalog_create_endpoint(4, 0)
        .with_catalog_create_endpoint(5, 1)
        .build()
        .await?;
    let state = test.into_app_state_with_limit(5);

    let report = import_service(&state).run(state.import_limit).await.unwrap();

    assert_eq!(report.imported_count, 4);
    assert_eq!(
        report.skipped,
        vec![ImportEntry {
            catalog_index: 4,
            name: "Salamèche".to_string(),
        }]
    );
    assert_eq!(
        report.status,
        vec![
            "Le Pokémon Salamèche existe déjà et a été importé, saut de l'importation."
                .to_string(),
            "Importation réussie !".to_string(),
        ]
    );

    test.assert_mocks();

    Ok(())
}

/// Tests running the import again over a fully imported catalog.
///
/// Expected: Ok with nothing created and every id skipped in order
#[tokio::test]
async fn rerun_over_imported_catalog_creates_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_snapshot(
            vec![
                factory::mock_pokemon_record(1, 1, true),
                factory::mock_pokemon_record(2, 2, true),
                factory::mock_pokemon_record(3, 3, true),
            ],
            1,
        )
        .with_source_entry(1, "Bulbizarre", &["grass", "poison"], 1)
        .with_source_entry(2, "Herbizarre", &["grass", "poison"], 1)
        .with_source_entry(3, "Florizarre", &["grass", "poison"], 1)
        .with_catalog_create_endpoint(1, 0)
        .with_catalog_create_endpoint(2, 0)
        .with_catalog_create_endpoint(3, 0)
        .build()
        .await?;
    let state = test.into_app_state_with_limit(3);

    let report = import_service(&state).run(state.import_limit).await.unwrap();

    assert_eq!(report.imported_count, 0);
    let skipped: Vec<i32> = report.skipped.iter().map(|e| e.catalog_index).collect();
    assert_eq!(skipped, vec![1, 2, 3]);
    assert_eq!(report.status.len(), 4);

    test.assert_mocks();

    Ok(())
}

/// Tests that generation one typings win over current ones.
///
/// Verifies that when the source lists past types, the first historical type set replaces
/// the current types, including clearing a secondary type the pokemon only gained later.
///
/// Expected: Ok with the record created as a pure normal type
#[tokio::test]
async fn prefers_historical_types() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_snapshot(vec![], 1)
        .with_species_endpoint(1, factory::mock_species(1, "Mélofée"), 1)
        .with_pokemon_endpoint(
            1,
            factory::mock_pokemon_source_with_past_types(
                1,
                &["fairy", "flying"],
                &["normal"],
                75,
                6,
            ),
            1,
        )
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/pokemon")
                .match_body(Matcher::PartialJson(json!({
                    "numpokedex": 1,
                    "type1": "normal",
                    "type2": null,
                    "poids": 7.5,
                    "taille": 0.6,
                })))
                .with_status(201)
                .with_body("{}")
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let state = test.into_app_state_with_limit(1);

    let report = import_service(&state).run(state.import_limit).await.unwrap();

    assert_eq!(report.imported_count, 1);

    test.assert_mocks();

    Ok(())
}

/// Tests importing an id missing from the stat table.
///
/// Expected: Ok with the record created with every base stat at zero
#[tokio::test]
async fn defaults_missing_stats_to_zero() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_catalog_snapshot(vec![], 1)
        .with_source_entry(1, "Bulbizarre", &["grass", "poison"], 1)
        .with_mock_endpoint(|server| {
            server
                .mock("POST", "/pokemon")
                .match_body(Matcher::PartialJson(json!({
                    "numpokedex": 1,
                    "hp": 0,
                    "attack": 0,
                    "defense": 0,
                    "vitesse": 0,
                    "special": 0,
                })))
                .with_status(201)
                .with_body("{}")
                .expect(1)
                .create()
        })
        .build()
        .await?;
    let state = test.into_app_state_with_limit(1);
    let empty_table = StatTable::from_json("[]").unwrap();

    let import_service = ImportService::new(
        &state.catalog_client,
        &state.pokeapi_client,
        &empty_table,
        &state.sprite_base_url,
    );
    let report = import_service.run(1).await.unwrap();

    assert_eq!(report.imported_count, 1);

    test.assert_mocks();

    Ok(())
}
