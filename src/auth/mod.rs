pub mod password;

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SecurityConfig;
use crate::database::models::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenType {
    Access,
    Refresh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    pub username: String,
    pub token_type: TokenType,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("JWT secret not configured")]
    MissingSecret,

    #[error("JWT generation error: {0}")]
    TokenGeneration(#[source] jsonwebtoken::errors::Error),

    #[error("Token is invalid or expired: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    #[error("Token has wrong type, expected {0:?}")]
    WrongTokenType(TokenType),
}

/// Access + refresh pair returned by `POST /token/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// HS256 signing keys and token lifetimes
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenKeys {
    pub fn new(security: &SecurityConfig) -> Result<Self, AuthError> {
        if security.jwt_secret.is_empty() {
            return Err(AuthError::MissingSecret);
        }

        Ok(Self {
            encoding: EncodingKey::from_secret(security.jwt_secret.as_bytes()),
            decoding: DecodingKey::from_secret(security.jwt_secret.as_bytes()),
            access_ttl: Duration::minutes(security.access_token_minutes),
            refresh_ttl: Duration::hours(security.refresh_token_hours),
        })
    }

    pub fn issue(&self, user: &User, token_type: TokenType) -> Result<String, AuthError> {
        let now = Utc::now();
        let ttl = match token_type {
            TokenType::Access => self.access_ttl,
            TokenType::Refresh => self.refresh_ttl,
        };
        let claims = Claims {
            sub: user.id.to_string(),
            username: user.username.clone(),
            token_type,
            exp: (now + ttl).timestamp(),
            iat: now.timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).map_err(AuthError::TokenGeneration)
    }

    pub fn issue_pair(&self, user: &User) -> Result<TokenPair, AuthError> {
        Ok(TokenPair {
            access: self.issue(user, TokenType::Access)?,
            refresh: self.issue(user, TokenType::Refresh)?,
        })
    }

    /// Check signature, expiry and token type.
    pub fn verify(&self, token: &str, expected: TokenType) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default()).map_err(AuthError::InvalidToken)?;

        if data.claims.token_type != expected {
            return Err(AuthError::WrongTokenType(expected));
        }
        Ok(data.claims)
    }

    /// Mint a fresh access token from a valid refresh token.
    pub fn refresh(&self, refresh_token: &str) -> Result<String, AuthError> {
        let claims = self.verify(refresh_token, TokenType::Refresh)?;
        let now = Utc::now();
        let access = Claims {
            sub: claims.sub,
            username: claims.username,
            token_type: TokenType::Access,
            exp: (now + self.access_ttl).timestamp(),
            iat: now.timestamp(),
        };
        encode(&Header::default(), &access, &self.encoding).map_err(AuthError::TokenGeneration)
    }
}
