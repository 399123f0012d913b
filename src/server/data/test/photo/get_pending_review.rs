use super::*;

/// Tests the moderation queue.
///
/// Verifies that only ACTIVE photos without moderation timestamp are queued,
/// oldest first.
///
/// Expected: Ok with the two unmoderated active photos, oldest first
#[tokio::test]
async fn queues_unmoderated_active_photos() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;
    let newest = PhotoFactory::new(db, user.id, PhotoContext::RouteGallery)
        .route(route.id)
        .created_at(Utc::now() - Duration::minutes(5))
        .build()
        .await?;
    let oldest = PhotoFactory::new(db, user.id, PhotoContext::RouteGallery)
        .route(route.id)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;
    PhotoFactory::new(db, user.id, PhotoContext::RouteGallery)
        .route(route.id)
        .moderated_at(Utc::now())
        .build()
        .await?;
    PhotoFactory::new(db, user.id, PhotoContext::RouteGallery)
        .route(route.id)
        .status(PhotoStatus::Deleted)
        .build()
        .await?;

    let repo = PhotoRepository::new(db);
    let pending = repo.get_pending_review().await?;

    let ids: Vec<_> = pending.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![oldest.id, newest.id]);

    Ok(())
}
