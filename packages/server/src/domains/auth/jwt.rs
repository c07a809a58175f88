use anyhow::Result;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT Claims - data stored in the token
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String,   // Subject (user_id as string)
    pub user_id: Uuid, // User UUID
    pub email: String, // Email (for logging/debugging)
    pub exp: i64,      // Expiration timestamp
    pub iat: i64,      // Issued at timestamp
    pub iss: String,   // Issuer
}

/// Response body for successful signup/signin.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// JWT Service - creates and verifies JWT tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl: chrono::Duration,
}

impl JwtService {
    /// Create new JWT service with secret, issuer, and token lifetime in minutes
    pub fn new(secret: &str, issuer: String, ttl_minutes: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            issuer,
            ttl: chrono::Duration::minutes(ttl_minutes),
        }
    }

    /// Create a new access token for a user
    pub fn create_token(&self, user_id: Uuid, email: &str) -> Result<String> {
        let now = chrono::Utc::now();
        let exp = now + self.ttl;

        let claims = Claims {
            sub: user_id.to_string(),
            user_id,
            email: email.to_string(),
            exp: exp.timestamp(),
            iat: now.timestamp(),
            iss: self.issuer.clone(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(Into::into)
    }

    /// Verify and decode an access token
    ///
    /// Returns claims if the token is valid and not expired
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::default();
        validation.set_issuer(&[&self.issuer]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(Into::into)
    }
}
