use super::*;

/// Tests listing a user's own photos.
///
/// Verifies that every status except DELETED is returned and that the moderator
/// is attached to moderated photos.
///
/// Expected: Ok with active and rejected photos, rejected one with moderator
#[tokio::test]
async fn returns_non_deleted_photos_with_moderator() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let route = factory::route::create_route(db).await?;
    factory::photo::create_route_photo(db, user.id, route.id).await?;
    let rejected = factory::photo::create_route_photo(db, user.id, route.id).await?;
    let deleted = PhotoFactory::new(db, user.id, PhotoContext::RouteGallery)
        .route(route.id)
        .status(PhotoStatus::Deleted)
        .build()
        .await?;

    let repo = PhotoRepository::new(db);
    repo.moderate(
        rejected.id,
        admin.id,
        Some(PhotoStatus::Rejected),
        Some("Blurry".to_string()),
    )
    .await?;

    let photos = repo.get_by_user(user.id).await?;

    assert_eq!(photos.len(), 2);
    assert!(photos.iter().all(|p| p.id != deleted.id));
    let moderated = photos.iter().find(|p| p.id == rejected.id).unwrap();
    assert_eq!(moderated.moderator.as_ref().map(|m| m.id), Some(admin.id));

    Ok(())
}
