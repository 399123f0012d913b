use super::*;

/// Tests finding the current cover of a route call.
///
/// Verifies that deleted covers and gallery photos are ignored.
///
/// Expected: Ok(Some) with the active cover
#[tokio::test]
async fn finds_active_cover() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (organizer, _route, route_call) =
        factory::helpers::create_route_call_with_dependencies(db).await?;
    PhotoFactory::new(db, organizer.id, PhotoContext::RouteCallCover)
        .route_call(route_call.id)
        .status(PhotoStatus::Deleted)
        .build()
        .await?;
    PhotoFactory::new(db, organizer.id, PhotoContext::RouteCallGallery)
        .route_call(route_call.id)
        .build()
        .await?;
    let cover = PhotoFactory::new(db, organizer.id, PhotoContext::RouteCallCover)
        .route_call(route_call.id)
        .build()
        .await?;

    let repo = PhotoRepository::new(db);
    let found = repo.find_active_cover(route_call.id).await?;

    assert_eq!(found.map(|p| p.id), Some(cover.id));

    Ok(())
}

/// Tests a route call without cover.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_cover() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_organizer, _route, route_call) =
        factory::helpers::create_route_call_with_dependencies(db).await?;

    let repo = PhotoRepository::new(db);

    assert!(repo.find_active_cover(route_call.id).await?.is_none());

    Ok(())
}
