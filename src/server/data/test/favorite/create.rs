use super::*;

/// Tests adding a route to favorites.
///
/// Expected: Ok with favorite holding the route summary
#[tokio::test]
async fn creates_favorite_with_route() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;

    let repo = FavoriteRepository::new(db);
    let favorite = repo.create(user.id, route.id).await?;

    assert_eq!(favorite.user_id, user.id);
    assert_eq!(favorite.route.slug, route.slug);
    assert!(repo.find(user.id, route.id).await?.is_some());

    Ok(())
}

/// Tests that a route can be favorited only once per user.
///
/// Expected: Err from the unique key on (user, route)
#[tokio::test]
async fn fails_for_duplicate_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;
    factory::favorite::create_favorite(db, user.id, route.id).await?;

    let repo = FavoriteRepository::new(db);

    assert!(repo.create(user.id, route.id).await.is_err());

    Ok(())
}

/// Tests removing a favorite.
///
/// Expected: Ok with favorite no longer found
#[tokio::test]
async fn deletes_favorite() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_route_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let route = factory::route::create_route(db).await?;
    let favorite = factory::favorite::create_favorite(db, user.id, route.id).await?;

    let repo = FavoriteRepository::new(db);
    repo.delete(favorite.id).await?;

    assert!(repo.find(user.id, route.id).await?.is_none());

    Ok(())
}
