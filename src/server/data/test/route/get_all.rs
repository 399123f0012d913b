use super::*;

/// Tests listing the catalog.
///
/// Verifies that routes come back ordered by name regardless of insertion order.
///
/// Expected: Ok with routes sorted alphabetically
#[tokio::test]
async fn returns_routes_ordered_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::route::RouteFactory::new(db).name("Ruta Sur").build().await?;
    factory::route::RouteFactory::new(db).name("Costera").build().await?;
    factory::route::RouteFactory::new(db).name("Las Lomas").build().await?;

    let repo = RouteRepository::new(db);
    let names: Vec<String> = repo.get_all().await?.into_iter().map(|r| r.name).collect();

    assert_eq!(names, vec!["Costera", "Las Lomas", "Ruta Sur"]);

    Ok(())
}
