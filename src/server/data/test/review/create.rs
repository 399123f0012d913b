use super::*;

/// Tests creating a review.
///
/// Verifies that the created review is returned with its author attached.
///
/// Expected: Ok with rating, comment and author set
#[tokio::test]
async fn creates_review_with_author() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;

    let repo = ReviewRepository::new(db);
    let review = repo
        .create(CreateReviewParams {
            route_id: route.id,
            user_id: user.id,
            rating: 5,
            comment: Some("Smooth asphalt all the way".to_string()),
        })
        .await?;

    assert_eq!(review.rating, 5);
    assert_eq!(review.comment.as_deref(), Some("Smooth asphalt all the way"));
    assert_eq!(review.user.id, user.id);
    assert!(repo.exists_for_user(user.id, route.id).await?);

    Ok(())
}

/// Tests creating a second review of the same route by the same user.
///
/// Expected: Err from the unique key on (user, route)
#[tokio::test]
async fn fails_for_duplicate_review() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;
    factory::review::create_review(db, user.id, route.id, 3).await?;

    let repo = ReviewRepository::new(db);
    let result = repo
        .create(CreateReviewParams {
            route_id: route.id,
            user_id: user.id,
            rating: 4,
            comment: None,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
