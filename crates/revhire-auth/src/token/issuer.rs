//! HS256 access token creation and validation.
//!
//! Tokens are issued at login only. No route currently requires one and
//! there is no revocation list.

use chrono::{TimeDelta, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use revhire_core::config::AuthConfig;
use revhire_core::error::AppError;

use super::claims::Claims;

/// Token type reported alongside every issued access token.
pub const BEARER: &str = "bearer";

/// Login response body: the signed token and its scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

/// Creates and validates signed access tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    /// Access token lifetime.
    access_ttl: TimeDelta,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("access_ttl", &self.access_ttl)
            .finish()
    }
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    ///
    /// Fails when the configured TTL does not fit a signed duration.
    pub fn new(config: &AuthConfig) -> Result<Self, AppError> {
        let access_ttl = i64::try_from(config.jwt_access_ttl_minutes)
            .ok()
            .and_then(TimeDelta::try_minutes)
            .ok_or_else(|| {
                AppError::configuration(format!(
                    "auth.jwt_access_ttl_minutes is out of range: {}",
                    config.jwt_access_ttl_minutes
                ))
            })?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 5;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
            access_ttl,
        })
    }

    /// Issues a bearer token for `subject` expiring after the configured TTL.
    pub fn issue(&self, subject: &str) -> Result<AccessToken, AppError> {
        let now = Utc::now();
        let exp = now.checked_add_signed(self.access_ttl).ok_or_else(|| {
            AppError::configuration("Access token expiry overflows the supported date range")
        })?;

        let claims = Claims {
            sub: subject.to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let access_token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(AccessToken {
            access_token,
            token_type: BEARER.to_string(),
        })
    }

    /// Verifies a token's signature and expiry and returns its claims.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::validation("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::validation("Invalid token signature")
                }
                _ => AppError::validation(format!("Token validation failed: {e}")),
            })
    }
}
