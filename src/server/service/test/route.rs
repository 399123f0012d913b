use super::*;
use crate::server::service::route::RouteService;

/// Tests the route detail view.
///
/// Verifies that the detail carries counters, mean rating, reviews and only the
/// ACTIVE gallery photos of the route.
///
/// Expected: Ok with 2 reviews, mean 4.5 and 1 photo
#[tokio::test]
async fn builds_route_detail() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::route::RouteFactory::new(db)
        .slug("costera")
        .build()
        .await?;
    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    factory::review::create_review(db, first.id, route.id, 4).await?;
    factory::review::create_review(db, second.id, route.id, 5).await?;
    factory::photo::create_route_photo(db, first.id, route.id).await?;
    factory::photo::PhotoFactory::new(db, first.id, PhotoContext::RouteGallery)
        .route(route.id)
        .status(PhotoStatus::Rejected)
        .build()
        .await?;

    let detail = RouteService::new(db).get_by_slug("costera").await?;

    assert_eq!(detail.stats.route.id, route.id);
    assert_eq!(detail.stats.average_rating, 4.5);
    assert_eq!(detail.stats.counts.reviews, 2);
    assert_eq!(detail.stats.counts.photos, 1);
    assert_eq!(detail.reviews.len(), 2);
    assert_eq!(detail.photos.len(), 1);

    Ok(())
}

/// Tests an unknown slug.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn fails_for_unknown_slug() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = RouteService::new(db).get_by_slug("nowhere").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the catalog listing with stats.
///
/// Expected: Ok with every route and its counters
#[tokio::test]
async fn lists_catalog_with_stats() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;
    factory::route::create_route(db).await?;
    factory::favorite::create_favorite(db, user.id, route.id).await?;

    let routes = RouteService::new(db).get_all().await?;

    assert_eq!(routes.len(), 2);
    let favorited = routes.iter().find(|r| r.route.id == route.id).unwrap();
    assert_eq!(favorited.counts.favorites, 1);

    Ok(())
}
