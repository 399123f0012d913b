//! Shared handles cloned into every handler.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::service::{
    identity::IdentityProvider, storage::PhotoStorage, token::TokenVerifier,
};

/// Everything a handler needs besides the request itself.
///
/// Cloning is cheap: the connection pool shares its internals and everything else sits
/// behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,

    /// Verifies bearer session tokens.
    pub token_verifier: Arc<TokenVerifier>,

    /// Identity provider queried the first time a user authenticates.
    pub identity: Arc<dyn IdentityProvider>,

    /// Object storage holding photo files.
    pub storage: Arc<dyn PhotoStorage>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        token_verifier: TokenVerifier,
        identity: Arc<dyn IdentityProvider>,
        storage: Arc<dyn PhotoStorage>,
    ) -> Self {
        Self {
            db,
            token_verifier: Arc::new(token_verifier),
            identity,
            storage,
        }
    }
}
