use super::*;

/// Tests finding a route by its slug.
///
/// Expected: Ok(Some(route)) with matching id and levels
#[tokio::test]
async fn finds_route_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::route::RouteFactory::new(db)
        .slug("costera")
        .build()
        .await?;

    let repo = RouteRepository::new(db);
    let route = repo.find_by_slug("costera").await?.unwrap();

    assert_eq!(route.id, created.id);
    assert!(!route.level.is_empty());
    assert!(repo.exists(created.id).await?);

    Ok(())
}

/// Tests looking up a slug that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::route::create_route(db).await?;

    let repo = RouteRepository::new(db);

    assert!(repo.find_by_slug("missing").await?.is_none());
    assert!(!repo.exists(uuid::Uuid::new_v4()).await?);

    Ok(())
}
