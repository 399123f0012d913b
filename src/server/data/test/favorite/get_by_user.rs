use super::*;

/// Tests listing a user's favorites.
///
/// Verifies that favorites of other users are not returned.
///
/// Expected: Ok with the user's two favorites
#[tokio::test]
async fn returns_only_users_favorites() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let other = factory::user::create_user(db).await?;
    let first = factory::route::create_route(db).await?;
    let second = factory::route::create_route(db).await?;
    factory::favorite::create_favorite(db, user.id, first.id).await?;
    factory::favorite::create_favorite(db, user.id, second.id).await?;
    factory::favorite::create_favorite(db, other.id, first.id).await?;

    let repo = FavoriteRepository::new(db);
    let favorites = repo.get_by_user(user.id).await?;

    assert_eq!(favorites.len(), 2);
    assert!(favorites.iter().all(|f| f.user_id == user.id));

    Ok(())
}
