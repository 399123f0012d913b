use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_FRONTEND_URL: &str = "http://localhost:3000";
const DEFAULT_STORAGE_BUCKET: &str = "photos";
const CLERK_API_URL: &str = "https://api.clerk.com/v1";

/// Key material used to verify session tokens.
#[derive(Debug, Clone)]
pub enum JwtKey {
    /// RS256 PEM public key published by the identity provider.
    RsaPem(String),
    /// HS256 shared secret, for local development tokens.
    Secret(String),
}

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub frontend_url: String,

    pub clerk_secret_key: String,
    pub clerk_api_url: String,
    pub jwt_key: JwtKey,

    pub supabase_url: String,
    pub supabase_service_key: String,
    pub storage_bucket: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value.parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: "PORT".to_string(),
                reason: e.to_string(),
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let jwt_key = match (optional("CLERK_JWT_KEY"), optional("JWT_SECRET")) {
            (Some(pem), _) => JwtKey::RsaPem(pem),
            (None, Some(secret)) => JwtKey::Secret(secret),
            (None, None) => return Err(ConfigError::MissingEnvVar("CLERK_JWT_KEY".to_string()).into()),
        };

        Ok(Self {
            database_url: required("DATABASE_URL")?,
            port,
            frontend_url: optional("FRONTEND_URL")
                .unwrap_or_else(|| DEFAULT_FRONTEND_URL.to_string()),
            clerk_secret_key: required("CLERK_SECRET_KEY")?,
            clerk_api_url: CLERK_API_URL.to_string(),
            jwt_key,
            supabase_url: required("SUPABASE_URL")?
                .trim_end_matches('/')
                .to_string(),
            supabase_service_key: required("SUPABASE_SERVICE_KEY")?,
            storage_bucket: optional("STORAGE_BUCKET")
                .unwrap_or_else(|| DEFAULT_STORAGE_BUCKET.to_string()),
        })
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads a variable, treating an empty value as unset.
fn optional(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}
