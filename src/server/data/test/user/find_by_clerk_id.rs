use super::*;

/// Tests finding a mirrored user by identity provider id.
///
/// Expected: Ok(Some(user)) with matching id
#[tokio::test]
async fn finds_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .clerk_id("user_2xyz")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_clerk_id("user_2xyz").await?;

    assert!(user.is_some());
    assert_eq!(user.unwrap().id, created.id);

    Ok(())
}

/// Tests looking up an identity never seen before.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_identity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let user = repo.find_by_clerk_id("user_unknown").await?;

    assert!(user.is_none());

    Ok(())
}
