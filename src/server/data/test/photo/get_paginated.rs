use super::*;

/// Tests the default photo listing.
///
/// Verifies that the listing returns ACTIVE photos only, newest first.
///
/// Expected: Ok with the two active photos, newest first
#[tokio::test]
async fn lists_active_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;
    let older = PhotoFactory::new(db, user.id, PhotoContext::RouteGallery)
        .route(route.id)
        .created_at(Utc::now() - Duration::hours(2))
        .build()
        .await?;
    let newer = PhotoFactory::new(db, user.id, PhotoContext::RouteGallery)
        .route(route.id)
        .created_at(Utc::now() - Duration::hours(1))
        .build()
        .await?;
    PhotoFactory::new(db, user.id, PhotoContext::RouteGallery)
        .route(route.id)
        .status(PhotoStatus::Rejected)
        .build()
        .await?;

    let repo = PhotoRepository::new(db);
    let page = repo
        .get_paginated(PhotoFilter::default(), PageRequest::default())
        .await?;

    let ids: Vec<_> = page.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(page.total_items, 2);

    Ok(())
}

/// Tests filtering photos by context and route call.
///
/// Expected: Ok with only the gallery photo of the route call
#[tokio::test]
async fn filters_by_context_and_route_call() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, route, route_call) =
        factory::helpers::create_route_call_with_dependencies(db).await?;
    let gallery = PhotoFactory::new(db, organizer.id, PhotoContext::RouteCallGallery)
        .route_call(route_call.id)
        .build()
        .await?;
    PhotoFactory::new(db, organizer.id, PhotoContext::RouteCallCover)
        .route_call(route_call.id)
        .build()
        .await?;
    factory::photo::create_route_photo(db, organizer.id, route.id).await?;

    let repo = PhotoRepository::new(db);
    let page = repo
        .get_paginated(
            PhotoFilter {
                context: Some(PhotoContext::RouteCallGallery),
                route_call_id: Some(route_call.id),
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, gallery.id);

    Ok(())
}

/// Tests listing photos in a non-default status.
///
/// Expected: Ok with the rejected photo only
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;
    factory::photo::create_route_photo(db, user.id, route.id).await?;
    let rejected = PhotoFactory::new(db, user.id, PhotoContext::RouteGallery)
        .route(route.id)
        .status(PhotoStatus::Rejected)
        .build()
        .await?;

    let repo = PhotoRepository::new(db);
    let page = repo
        .get_paginated(
            PhotoFilter {
                status: PhotoStatus::Rejected,
                ..Default::default()
            },
            PageRequest::default(),
        )
        .await?;

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, rejected.id);

    Ok(())
}
