//! Session token verification.
//!
//! Session tokens are JWTs issued by the identity provider. Production deployments verify them
//! with the provider's RS256 public key; local setups can use an HS256 shared secret instead.

use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::server::{
    config::JwtKey,
    error::{auth::AuthError, config::ConfigError, AppError},
};

/// Claims read from a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Identity provider user id.
    pub sub: String,
    pub exp: usize,
    #[serde(default)]
    pub iat: Option<usize>,
}

pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// Builds a verifier from configured key material.
    ///
    /// # Returns
    /// - `Ok(TokenVerifier)` - Verifier ready for use
    /// - `Err(AppError::ConfigErr)` - The PEM key could not be parsed
    pub fn new(key: &JwtKey) -> Result<Self, AppError> {
        let (key, algorithm) = match key {
            JwtKey::RsaPem(pem) => (
                DecodingKey::from_rsa_pem(pem.replace("\\n", "\n").as_bytes()).map_err(|e| {
                    ConfigError::InvalidValue {
                        name: "CLERK_JWT_KEY".to_string(),
                        reason: e.to_string(),
                    }
                })?,
                Algorithm::RS256,
            ),
            JwtKey::Secret(secret) => (DecodingKey::from_secret(secret.as_bytes()), Algorithm::HS256),
        };

        let mut validation = Validation::new(algorithm);
        validation.validate_aud = false;

        Ok(Self { key, validation })
    }

    /// Verifies signature and expiry of a token and returns its claims.
    ///
    /// # Returns
    /// - `Ok(SessionClaims)` - Token is valid
    /// - `Err(AuthError::InvalidToken)` - Bad signature, expired, malformed or empty subject
    pub fn verify(&self, token: &str) -> Result<SessionClaims, AuthError> {
        let data = decode::<SessionClaims>(token, &self.key, &self.validation)
            .map_err(|e| AuthError::InvalidToken(e.to_string()))?;

        if data.claims.sub.trim().is_empty() {
            return Err(AuthError::InvalidToken("empty subject".to_string()));
        }

        Ok(data.claims)
    }
}
