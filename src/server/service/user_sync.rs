use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository, error::AppError, model::user::User,
    service::identity::IdentityProvider,
};

/// Mirrors identity provider users into the local user table on first sight.
pub struct UserSyncService<'a> {
    db: &'a DatabaseConnection,
    identity: &'a dyn IdentityProvider,
}

impl<'a> UserSyncService<'a> {
    pub fn new(db: &'a DatabaseConnection, identity: &'a dyn IdentityProvider) -> Self {
        Self { db, identity }
    }

    /// Returns the local user for an identity, creating it when missing.
    ///
    /// Known identities are served from the database without contacting the provider. New
    /// identities have their profile fetched and stored with the USER role.
    ///
    /// # Arguments
    /// - `clerk_id` - Identity provider user id (`sub` claim)
    ///
    /// # Returns
    /// - `Ok(User)` - Existing or newly created local user
    /// - `Err(AppError)` - Provider lookup or database error
    pub async fn get_or_create(&self, clerk_id: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if let Some(user) = user_repo.find_by_clerk_id(clerk_id).await? {
            return Ok(user);
        }

        let mut profile = self.identity.fetch_user(clerk_id).await?;
        profile.clerk_id = clerk_id.to_string();

        let user = user_repo.upsert(profile).await?;
        tracing::info!("Synced new user {} from identity provider", user.id);

        Ok(user)
    }
}
