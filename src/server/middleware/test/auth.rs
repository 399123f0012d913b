use super::*;

/// Tests a request without an Authorization header.
///
/// Expected: Err(AuthError::MissingToken)
#[tokio::test]
async fn rejects_missing_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let verifier = verifier();
    let identity = FakeIdentityProvider::new();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(db, &verifier, &identity, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));

    Ok(())
}

/// Tests a token signed with another secret.
///
/// Expected: Err(AuthError::InvalidToken)
#[tokio::test]
async fn rejects_invalid_token() -> Result<(), AppError> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let verifier = verifier();
    let identity = FakeIdentityProvider::new();
    let headers = bearer(&sign_with("user_2abc", "other-secret", 3600));

    let result = AuthGuard::new(db, &verifier, &identity, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InvalidToken(_)))
    ));

    Ok(())
}

/// Tests the first request of an unknown user.
///
/// Verifies that the user is created from the identity provider profile.
///
/// Expected: Ok with the synced user
#[tokio::test]
async fn syncs_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let verifier = verifier();
    let identity = FakeIdentityProvider::new().with_profile("user_new", "new@example.com");
    let headers = bearer(&sign("user_new"));

    let user = AuthGuard::new(db, &verifier, &identity, &headers)
        .require(&[])
        .await?;

    assert_eq!(user.clerk_id, "user_new");
    assert_eq!(user.email, "new@example.com");
    assert_eq!(identity.calls(), 1);

    Ok(())
}

/// Tests a valid token whose user cannot be synced.
///
/// Expected: Err(AuthError::SyncFailed)
#[tokio::test]
async fn reports_sync_failure() -> Result<(), AppError> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let verifier = verifier();
    let identity = FakeIdentityProvider::new();
    let headers = bearer(&sign("user_ghost"));

    let result = AuthGuard::new(db, &verifier, &identity, &headers)
        .require(&[])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::SyncFailed(_)))
    ));

    Ok(())
}

/// Tests admin-only access.
///
/// Expected: AdminRequired for a regular user, Ok for an admin
#[tokio::test]
async fn requires_admin_role() -> Result<(), AppError> {
    let test = TestBuilder::new().with_route_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let verifier = verifier();
    let identity = FakeIdentityProvider::new();

    let user = factory::user::create_user(db).await?;
    let admin = factory::user::create_admin(db).await?;

    let user_headers = bearer(&sign(&user.clerk_id));
    let denied = AuthGuard::new(db, &verifier, &identity, &user_headers)
        .require(&[Permission::Admin])
        .await;
    assert!(matches!(
        denied,
        Err(AppError::AuthErr(AuthError::AdminRequired))
    ));

    let admin_headers = bearer(&sign(&admin.clerk_id));
    let allowed = AuthGuard::new(db, &verifier, &identity, &admin_headers)
        .require(&[Permission::Admin])
        .await?;
    assert_eq!(allowed.id, admin.id);
    assert_eq!(identity.calls(), 0);

    Ok(())
}
