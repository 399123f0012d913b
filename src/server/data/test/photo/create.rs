use super::*;

/// Tests storing an uploaded photo.
///
/// Expected: Ok with ACTIVE, unmoderated photo and uploader attached
#[tokio::test]
async fn creates_active_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_all_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;

    let repo = PhotoRepository::new(db);
    let photo = repo
        .create(CreatePhotoParams {
            context: PhotoContext::RouteGallery,
            route_id: Some(route.id),
            route_call_id: None,
            user_id: user.id,
            image_url: "https://cdn.example.com/routes/1.jpg".to_string(),
            caption: Some("Sunset at the pier".to_string()),
        })
        .await?;

    assert_eq!(photo.status, PhotoStatus::Active);
    assert_eq!(photo.user.id, user.id);
    assert!(photo.moderated_at.is_none());
    assert!(photo.moderator.is_none());

    Ok(())
}
