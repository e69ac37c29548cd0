//! JWT Issuing and Verification
//!
//! HS256 tokens carrying the user id, email and role.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::config::JwtConfig;
use crate::domain::models::user::User;

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub email: String,
    /// Role code (`ADMIN`, `STAFF`, `TRAINER`)
    pub role: String,
    /// Issued at timestamp
    pub iat: i64,
    /// Expiration timestamp
    pub exp: i64,
}

/// A signed token and its lifetime
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: i64,
}

/// Sign a token for `user`, valid for `expires_in_secs` from `now`
///
/// # Errors
///
/// Returns the `jsonwebtoken` error raised while encoding.
pub fn issue_token(
    config: &JwtConfig,
    user: &User,
    now: DateTime<Utc>,
) -> Result<IssuedToken, jsonwebtoken::errors::Error> {
    let claims = Claims {
        sub: user.id().to_string(),
        email: user.email().to_string(),
        role: user.role().code().to_string(),
        iat: now.timestamp(),
        exp: (now + Duration::seconds(config.expires_in_secs)).timestamp(),
    };

    let token = encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )?;

    Ok(IssuedToken {
        token,
        expires_in: config.expires_in_secs,
    })
}

/// Verify signature and expiry, returning the claims
///
/// # Errors
///
/// Returns the `jsonwebtoken` error for bad signatures, wrong algorithms,
/// malformed or expired tokens.
pub fn verify_token(config: &JwtConfig, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    // Pin the algorithm so a token cannot pick its own
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.leeway = 60;

    decode::<Claims>(token, &DecodingKey::from_secret(config.secret.as_bytes()), &validation).map(|data| data.claims)
}
