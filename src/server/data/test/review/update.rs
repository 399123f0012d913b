use super::*;

/// Tests a partial review update.
///
/// Verifies that only the provided rating changes and the comment is kept.
///
/// Expected: Ok with new rating and original comment
#[tokio::test]
async fn updates_only_given_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;
    let review = factory::review::ReviewFactory::new(db, user.id, route.id)
        .rating(2)
        .comment("Too many potholes")
        .build()
        .await?;

    let repo = ReviewRepository::new(db);
    let updated = repo
        .update(
            review.id,
            UpdateReviewParams {
                rating: Some(4),
                comment: None,
            },
        )
        .await?;

    assert_eq!(updated.rating, 4);
    assert_eq!(updated.comment.as_deref(), Some("Too many potholes"));

    Ok(())
}

/// Tests updating a review that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound)
#[tokio::test]
async fn fails_for_missing_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReviewRepository::new(db);
    let result = repo
        .update(uuid::Uuid::new_v4(), UpdateReviewParams::default())
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
