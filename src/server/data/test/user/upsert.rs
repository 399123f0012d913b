use super::*;

fn profile(clerk_id: &str, email: &str) -> CreateUserParams {
    CreateUserParams {
        clerk_id: clerk_id.to_string(),
        email: email.to_string(),
        name: Some("Lucía".to_string()),
        last_name: Some("Pérez".to_string()),
        image_url: None,
    }
}

/// Tests mirroring a new identity.
///
/// Verifies that a user seen for the first time is stored with its profile and the
/// USER role.
///
/// Expected: Ok with user created with role USER
#[tokio::test]
async fn creates_new_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(profile("user_2abc", "lucia@example.com"))
        .await?;

    assert_eq!(user.clerk_id, "user_2abc");
    assert_eq!(user.email, "lucia@example.com");
    assert_eq!(user.name.as_deref(), Some("Lucía"));
    assert_eq!(user.role, UserRole::User);
    assert!(!user.is_admin());

    Ok(())
}

/// Tests upserting an identity that already exists.
///
/// Verifies that a second upsert for the same clerk id refreshes the profile
/// columns on the existing row instead of inserting a duplicate.
///
/// Expected: Ok with same id and updated email
#[tokio::test]
async fn refreshes_existing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let first = repo.upsert(profile("user_2abc", "old@example.com")).await?;
    let second = repo.upsert(profile("user_2abc", "new@example.com")).await?;

    assert_eq!(first.id, second.id);
    assert_eq!(second.email, "new@example.com");

    Ok(())
}

/// Tests that upserting never changes the role of an existing user.
///
/// Expected: Ok with ADMIN role preserved
#[tokio::test]
async fn preserves_admin_role() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::user::UserFactory::new(db)
        .clerk_id("user_admin")
        .admin(true)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let user = repo
        .upsert(profile("user_admin", "admin@example.com"))
        .await?;

    assert_eq!(user.id, admin.id);
    assert_eq!(user.role, UserRole::Admin);

    Ok(())
}
