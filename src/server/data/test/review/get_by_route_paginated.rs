use super::*;

/// Tests paginating a route's reviews.
///
/// Verifies that only reviews of the requested route are counted and that the
/// last page holds the remainder.
///
/// Expected: Ok with 5 items over 3 pages, 1 item on page 3
#[tokio::test]
async fn paginates_reviews_of_route() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::route::create_route(db).await?;
    let other = factory::route::create_route(db).await?;
    for _ in 0..5 {
        let user = factory::user::create_user(db).await?;
        factory::review::create_review(db, user.id, route.id, 4).await?;
    }
    let user = factory::user::create_user(db).await?;
    factory::review::create_review(db, user.id, other.id, 1).await?;

    let repo = ReviewRepository::new(db);
    let first = repo
        .get_by_route_paginated(route.id, PageRequest::new(Some(1), Some(2)))
        .await?;
    let last = repo
        .get_by_route_paginated(route.id, PageRequest::new(Some(3), Some(2)))
        .await?;

    assert_eq!(first.items.len(), 2);
    assert_eq!(first.total_items, 5);
    assert_eq!(first.total_pages, 3);
    assert_eq!(last.items.len(), 1);
    assert!(last.items.iter().all(|r| r.route_id == route.id));

    Ok(())
}

/// Tests paginating a route without reviews.
///
/// Expected: Ok with empty page and zero totals
#[tokio::test]
async fn returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let route = factory::route::create_route(db).await?;

    let repo = ReviewRepository::new(db);
    let page = repo
        .get_by_route_paginated(route.id, PageRequest::default())
        .await?;

    assert!(page.items.is_empty());
    assert_eq!(page.total_items, 0);

    Ok(())
}
