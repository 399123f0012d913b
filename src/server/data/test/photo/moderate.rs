use super::*;

/// Tests approving a photo.
///
/// Verifies that approval stamps the moderation fields and keeps the photo ACTIVE.
///
/// Expected: Ok with status ACTIVE and moderated_by set
#[tokio::test]
async fn approval_keeps_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let route = factory::route::create_route(db).await?;
    let photo = factory::photo::create_route_photo(db, user.id, route.id).await?;

    let repo = PhotoRepository::new(db);
    let approved = repo.moderate(photo.id, admin.id, None, None).await?;

    assert_eq!(approved.status, PhotoStatus::Active);
    assert_eq!(approved.moderated_by, Some(admin.id));
    assert!(approved.moderated_at.is_some());
    assert!(repo.get_pending_review().await?.is_empty());

    Ok(())
}

/// Tests rejecting a photo with notes.
///
/// Expected: Ok with status REJECTED and notes stored
#[tokio::test]
async fn rejection_stores_notes() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;
    let route = factory::route::create_route(db).await?;
    let photo = factory::photo::create_route_photo(db, user.id, route.id).await?;

    let repo = PhotoRepository::new(db);
    let rejected = repo
        .moderate(
            photo.id,
            admin.id,
            Some(PhotoStatus::Rejected),
            Some("Not a skating photo".to_string()),
        )
        .await?;

    assert_eq!(rejected.status, PhotoStatus::Rejected);
    assert_eq!(
        rejected.moderation_notes.as_deref(),
        Some("Not a skating photo")
    );
    assert!(repo.get_active_by_route(route.id, None).await?.is_empty());

    Ok(())
}

/// Tests replacing the image of an existing photo.
///
/// Expected: Ok with the new URL on the same photo
#[tokio::test]
async fn updates_image() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;
    let photo = factory::photo::create_route_photo(db, user.id, route.id).await?;

    let repo = PhotoRepository::new(db);
    let updated = repo
        .update_image(photo.id, "https://cdn.example.com/new.png".to_string())
        .await?;

    assert_eq!(updated.id, photo.id);
    assert_eq!(updated.image_url, "https://cdn.example.com/new.png");

    Ok(())
}
