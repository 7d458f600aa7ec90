use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims embedded in a session token: the staff member's id, display name
/// and role, plus issue/expiry timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub nombre: String,
    pub rol: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(id: i32, nombre: String, rol: String, ttl_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: id,
            nombre,
            rol,
            iat: now.timestamp(),
            exp: (now + Duration::hours(ttl_hours)).timestamp(),
        }
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("token expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(String),

    #[error("JWT secret not configured")]
    MissingSecret,

    #[error("token generation failed: {0}")]
    TokenGeneration(String),

    #[error(transparent)]
    Hash(#[from] bcrypt::BcryptError),
}

/// Hash a password with a fresh salt. The work factor comes from
/// `SecurityConfig::bcrypt_cost` so tests can lower it.
pub fn hash_password(plaintext: &str, cost: u32) -> Result<String, AuthError> {
    Ok(bcrypt::hash(plaintext, cost)?)
}

/// Verify a password against a stored digest. A mismatch returns Ok(false);
/// only a malformed digest is an error.
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, AuthError> {
    Ok(bcrypt::verify(plaintext, digest)?)
}

/// Sign claims into an HS256 session token.
pub fn generate_token(claims: &Claims, secret: &str) -> Result<String, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), claims, &encoding_key)
        .map_err(|e| AuthError::TokenGeneration(e.to_string()))
}

/// Check signature and expiry. Expiry is reported as `AuthError::Expired`
/// so callers can tell it apart from a forged or garbled token; both collapse
/// to 401 at the HTTP boundary.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    if secret.is_empty() {
        return Err(AuthError::MissingSecret);
    }

    let decoding_key = DecodingKey::from_secret(secret.as_bytes());
    decode::<Claims>(token, &decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => AuthError::Expired,
            _ => AuthError::Invalid(e.to_string()),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "unit-test-secret";

    // Low cost keeps the hashing tests fast; production uses cost 10.
    const COST: u32 = 4;

    #[test]
    fn hashes_differ_but_both_verify() {
        let a = hash_password("s3creta", COST).unwrap();
        let b = hash_password("s3creta", COST).unwrap();
        assert_ne!(a, b, "fresh salt expected on every hash");
        assert!(verify_password("s3creta", &a).unwrap());
        assert!(verify_password("s3creta", &b).unwrap());
    }

    #[test]
    fn wrong_password_is_ok_false_not_error() {
        let digest = hash_password("correcta", COST).unwrap();
        assert!(!verify_password("incorrecta", &digest).unwrap());
    }

    #[test]
    fn malformed_digest_is_an_error() {
        assert!(verify_password("cualquiera", "not-a-bcrypt-digest").is_err());
    }

    #[test]
    fn token_round_trip_preserves_claims() {
        let claims = Claims::new(7, "Dra. Paz".to_string(), "veterinario".to_string(), 2);
        let token = generate_token(&claims, SECRET).unwrap();
        let decoded = verify_token(&token, SECRET).unwrap();
        assert_eq!(decoded.sub, 7);
        assert_eq!(decoded.nombre, "Dra. Paz");
        assert_eq!(decoded.rol, "veterinario");
        assert_eq!(decoded.exp, claims.exp);
    }

    #[test]
    fn expired_token_is_distinguishable() {
        // Issued three hours in the past with a two hour lifetime; well past
        // the validator's default leeway.
        let now = Utc::now();
        let claims = Claims {
            sub: 1,
            nombre: "x".to_string(),
            rol: "veterinario".to_string(),
            iat: (now - Duration::hours(3)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = generate_token(&claims, SECRET).unwrap();
        match verify_token(&token, SECRET) {
            Err(AuthError::Expired) => {}
            other => panic!("expected Expired, got {:?}", other),
        }
    }

    #[test]
    fn tampered_token_is_invalid_not_expired() {
        let claims = Claims::new(1, "x".to_string(), "administrador".to_string(), 2);
        let token = generate_token(&claims, SECRET).unwrap();
        let mut tampered = token.clone();
        tampered.pop();
        match verify_token(&tampered, SECRET) {
            Err(AuthError::Invalid(_)) => {}
            other => panic!("expected Invalid, got {:?}", other),
        }
        // Wrong secret also fails as Invalid
        match verify_token(&token, "otro-secreto") {
            Err(AuthError::Invalid(_)) => {}
            other => panic!("expected Invalid, got {:?}", other),
        }
    }

    #[test]
    fn empty_secret_is_rejected() {
        let claims = Claims::new(1, "x".to_string(), "veterinario".to_string(), 2);
        assert!(matches!(
            generate_token(&claims, ""),
            Err(AuthError::MissingSecret)
        ));
        assert!(matches!(
            verify_token("anything", ""),
            Err(AuthError::MissingSecret)
        ));
    }
}
