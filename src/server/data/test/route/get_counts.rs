use super::*;

/// Tests counting relations of a route.
///
/// Verifies that reviews, favorites and route calls are counted and that only
/// ACTIVE photos contribute to the photo counter.
///
/// Expected: Ok with reviews=2, favorites=1, route_calls=1, photos=1
#[tokio::test]
async fn counts_related_rows() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::route::create_route(db).await?;
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;

    factory::review::create_review(db, first.id, route.id, 4).await?;
    factory::review::create_review(db, second.id, route.id, 5).await?;
    factory::favorite::create_favorite(db, first.id, route.id).await?;
    factory::route_call::RouteCallFactory::new(db, first.id)
        .route(&route)
        .build()
        .await?;
    factory::photo::create_route_photo(db, first.id, route.id).await?;
    factory::photo::PhotoFactory::new(db, second.id, PhotoContext::RouteGallery)
        .route(route.id)
        .status(PhotoStatus::Rejected)
        .build()
        .await?;

    let repo = RouteRepository::new(db);
    let counts = repo.get_counts(&[route.id]).await?;
    let counts = counts[&route.id];

    assert_eq!(counts.reviews, 2);
    assert_eq!(counts.favorites, 1);
    assert_eq!(counts.route_calls, 1);
    assert_eq!(counts.photos, 1);

    Ok(())
}

/// Tests counting a route without any relation.
///
/// Expected: Ok with an entry holding zeroed counters
#[tokio::test]
async fn zeroes_routes_without_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::route::create_route(db).await?;

    let repo = RouteRepository::new(db);
    let counts = repo.get_counts(&[route.id]).await?;

    assert_eq!(counts.len(), 1);
    assert_eq!(counts[&route.id].reviews, 0);
    assert_eq!(counts[&route.id].photos, 0);

    Ok(())
}
