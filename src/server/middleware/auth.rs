use axum::http::{header::AUTHORIZATION, HeaderMap};
use sea_orm::DatabaseConnection;

use crate::server::{
    error::{auth::AuthError, AppError},
    model::user::User,
    service::{identity::IdentityProvider, token::TokenVerifier, user_sync::UserSyncService},
    state::AppState,
};

pub enum Permission {
    Admin,
}

/// Resolves the bearer token of a request into a local user.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    verifier: &'a TokenVerifier,
    identity: &'a dyn IdentityProvider,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        verifier: &'a TokenVerifier,
        identity: &'a dyn IdentityProvider,
        headers: &'a HeaderMap,
    ) -> Self {
        Self {
            db,
            verifier,
            identity,
            headers,
        }
    }

    pub fn from_state(state: &'a AppState, headers: &'a HeaderMap) -> Self {
        Self::new(
            &state.db,
            state.token_verifier.as_ref(),
            state.identity.as_ref(),
            headers,
        )
    }

    /// Requires an authenticated user holding every listed permission.
    ///
    /// Users seen for the first time are created from the identity provider profile.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user
    /// - `Err(AuthError::MissingToken)` - No bearer token in the request
    /// - `Err(AuthError::InvalidToken)` - Token failed verification
    /// - `Err(AuthError::SyncFailed)` - User could not be loaded or created
    /// - `Err(AuthError::AdminRequired)` - User lacks a required permission
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let token = self.bearer_token().ok_or(AuthError::MissingToken)?;
        let claims = self.verifier.verify(token)?;

        let user = UserSyncService::new(self.db, self.identity)
            .get_or_create(&claims.sub)
            .await
            .map_err(|e| AuthError::SyncFailed(e.to_string()))?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.is_admin() {
                        tracing::debug!("User {} denied admin access", user.id);
                        return Err(AuthError::AdminRequired.into());
                    }
                }
            }
        }

        Ok(user)
    }

    fn bearer_token(&self) -> Option<&'a str> {
        let value = self.headers.get(AUTHORIZATION)?.to_str().ok()?;
        let token = value.strip_prefix("Bearer ")?.trim();

        (!token.is_empty()).then_some(token)
    }
}

