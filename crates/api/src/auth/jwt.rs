//! Access tokens.
//!
//! A successful login returns an HS256-signed JWT carrying [`Claims`]. The
//! dashboard client sends it back as `Authorization: Bearer <token>` and the
//! [`AuthUser`](crate::middleware::auth::AuthUser) extractor decodes it.

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use spms_core::types::DbId;
use uuid::Uuid;

/// Token payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// `user_logins.id` of the caller.
    pub sub: DbId,
    /// `admin`, `faculty` or `student`.
    pub role: String,
    /// Login email; faculty scoping maps it onto a staff record.
    pub email: String,
    pub exp: i64,
    pub iat: i64,
    /// Random per-token id (UUID v4).
    pub jti: String,
}

impl Claims {
    fn new(login_id: DbId, role: &str, email: &str, ttl_mins: i64) -> Self {
        let iat = Utc::now().timestamp();
        Self {
            sub: login_id,
            role: role.to_owned(),
            email: email.to_owned(),
            exp: iat + ttl_mins * 60,
            iat,
            jti: Uuid::new_v4().to_string(),
        }
    }
}

/// Signing secret and token lifetime.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    /// Access token lifetime in minutes.
    pub access_token_expiry_mins: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty) and `JWT_ACCESS_EXPIRY_MINS`
    /// (default `60`).
    ///
    /// # Panics
    ///
    /// Panics when the secret is missing or empty or the expiry is not an
    /// integer.
    pub fn from_env() -> Self {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => panic!("JWT_SECRET must be set to a non-empty value"),
        };

        let access_token_expiry_mins = match std::env::var("JWT_ACCESS_EXPIRY_MINS") {
            Ok(raw) => raw
                .parse()
                .unwrap_or_else(|e| panic!("JWT_ACCESS_EXPIRY_MINS must be an integer: {e}")),
            Err(_) => 60,
        };

        Self {
            secret,
            access_token_expiry_mins,
        }
    }
}

/// Sign an access token for a login.
pub fn generate_access_token(
    login_id: DbId,
    role: &str,
    email: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let claims = Claims::new(login_id, role, email, config.access_token_expiry_mins);
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check signature and expiry, returning the embedded [`Claims`].
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str) -> JwtConfig {
        JwtConfig {
            secret: secret.to_string(),
            access_token_expiry_mins: 30,
        }
    }

    #[test]
    fn test_token_carries_login_identity() {
        let cfg = config("unit-test-secret");
        let token = generate_access_token(42, "faculty", "guide@uni.test", &cfg).unwrap();

        let claims = validate_token(&token, &cfg).unwrap();
        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, "faculty");
        assert_eq!(claims.email, "guide@uni.test");
        assert_eq!(claims.exp - claims.iat, 30 * 60);
    }

    #[test]
    fn test_each_token_gets_its_own_jti() {
        let cfg = config("unit-test-secret");
        let issue = || {
            let token = generate_access_token(1, "student", "s@uni.test", &cfg).unwrap();
            validate_token(&token, &cfg).unwrap()
        };
        assert_ne!(issue().jti, issue().jti);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let cfg = config("unit-test-secret");
        // Negative lifetime, well past the decoder's default leeway.
        let claims = Claims::new(7, "admin", "a@uni.test", -10);
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(cfg.secret.as_bytes()),
        )
        .unwrap();

        assert!(validate_token(&token, &cfg).is_err());
    }

    #[test]
    fn test_token_from_another_secret_is_rejected() {
        let token = generate_access_token(1, "admin", "a@uni.test", &config("one")).unwrap();
        assert!(validate_token(&token, &config("two")).is_err());
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(validate_token("not.a.jwt", &config("unit-test-secret")).is_err());
    }
}
