use super::*;

/// Tests batch loading users keyed by id.
///
/// Verifies that duplicated ids are collapsed and unknown ids are ignored.
///
/// Expected: Ok with a map holding the two existing users
#[tokio::test]
async fn loads_requested_users() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::user::create_user(db).await?;
    let second = factory::user::create_user(db).await?;
    factory::user::create_user(db).await?;

    let repo = UserRepository::new(db);
    let users = repo
        .find_by_ids([first.id, second.id, first.id, uuid::Uuid::new_v4()])
        .await?;

    assert_eq!(users.len(), 2);
    assert_eq!(users[&first.id].clerk_id, first.clerk_id);
    assert!(users.contains_key(&second.id));

    Ok(())
}

/// Tests that an empty id list skips the query.
///
/// Expected: Ok with empty map
#[tokio::test]
async fn returns_empty_map_for_no_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let users = repo.find_by_ids(Vec::new()).await?;

    assert!(users.is_empty());

    Ok(())
}
