//! Identity provider client used to mirror users into the local database.

use async_trait::async_trait;
use serde::Deserialize;

use crate::server::{error::AppError, model::user::CreateUserParams};

/// Source of user profiles for identities seen for the first time.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Fetches the profile of an identity.
    ///
    /// # Arguments
    /// - `clerk_id` - Identity provider user id (`sub` claim)
    ///
    /// # Returns
    /// - `Ok(CreateUserParams)` - Profile ready to be stored locally
    /// - `Err(AppError)` - Provider unreachable or identity unknown
    async fn fetch_user(&self, clerk_id: &str) -> Result<CreateUserParams, AppError>;
}

/// Clerk backend API client.
pub struct ClerkClient {
    http_client: reqwest::Client,
    api_url: String,
    secret_key: String,
}

#[derive(Debug, Deserialize)]
struct ClerkUser {
    id: String,
    #[serde(default)]
    email_addresses: Vec<ClerkEmailAddress>,
    primary_email_address_id: Option<String>,
    first_name: Option<String>,
    last_name: Option<String>,
    image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ClerkEmailAddress {
    id: String,
    email_address: String,
}

impl ClerkUser {
    /// Picks the primary email address, falling back to the first one, or empty.
    fn into_params(self) -> CreateUserParams {
        let email = self
            .primary_email_address_id
            .as_ref()
            .and_then(|primary| self.email_addresses.iter().find(|e| &e.id == primary))
            .or_else(|| self.email_addresses.first())
            .map(|e| e.email_address.clone())
            .unwrap_or_default();

        CreateUserParams {
            clerk_id: self.id,
            email,
            name: self.first_name.filter(|n| !n.is_empty()),
            last_name: self.last_name.filter(|n| !n.is_empty()),
            image_url: self.image_url.filter(|u| !u.is_empty()),
        }
    }
}

impl ClerkClient {
    pub fn new(http_client: reqwest::Client, api_url: String, secret_key: String) -> Self {
        Self {
            http_client,
            api_url,
            secret_key,
        }
    }
}

#[async_trait]
impl IdentityProvider for ClerkClient {
    async fn fetch_user(&self, clerk_id: &str) -> Result<CreateUserParams, AppError> {
        let user = self
            .http_client
            .get(format!("{}/users/{}", self.api_url, clerk_id))
            .bearer_auth(&self.secret_key)
            .send()
            .await?
            .error_for_status()?
            .json::<ClerkUser>()
            .await?;

        Ok(user.into_params())
    }
}
