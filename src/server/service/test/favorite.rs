use super::*;
use crate::server::service::favorite::FavoriteService;

/// Tests favoriting and unfavoriting a route.
///
/// Expected: flag true after add, false after remove
#[tokio::test]
async fn adds_and_removes_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;

    let service = FavoriteService::new(db);
    let favorite = service.add(user.id, route.id).await?;
    assert_eq!(favorite.route.id, route.id);
    assert!(service.is_favorite(user.id, route.id).await?);

    service.remove(user.id, route.id).await?;
    assert!(!service.is_favorite(user.id, route.id).await?);

    Ok(())
}

/// Tests favoriting a route twice.
///
/// Expected: Err(AppError::Conflict)
#[tokio::test]
async fn rejects_duplicate_favorite() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;
    factory::favorite::create_favorite(db, user.id, route.id).await?;

    let result = FavoriteService::new(db).add(user.id, route.id).await;

    assert!(matches!(result, Err(AppError::Conflict(_))));

    Ok(())
}

/// Tests favoriting a missing route and removing a missing favorite.
///
/// Expected: Err(AppError::NotFound) for both
#[tokio::test]
async fn reports_missing_rows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;

    let service = FavoriteService::new(db);
    let added = service.add(user.id, Uuid::new_v4()).await;
    let removed = service.remove(user.id, route.id).await;

    assert!(matches!(added, Err(AppError::NotFound(_))));
    assert!(matches!(removed, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the favorites listing.
///
/// Verifies that each favorite carries the review and route call counts of its route.
///
/// Expected: Ok with one favorite counting 1 review and 1 route call
#[tokio::test]
async fn lists_favorites_with_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;
    factory::favorite::create_favorite(db, user.id, route.id).await?;
    factory::review::create_review(db, user.id, route.id, 5).await?;
    factory::route_call::RouteCallFactory::new(db, user.id)
        .route(&route)
        .build()
        .await?;

    let favorites = FavoriteService::new(db).get_mine(user.id).await?;

    assert_eq!(favorites.len(), 1);
    assert_eq!(favorites[0].reviews, 1);
    assert_eq!(favorites[0].route_calls, 1);

    Ok(())
}
