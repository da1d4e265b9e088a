//! Token minting helpers for tests.

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::Serialize;
use serde_json::json;

pub const SECRET: &str = "test-secret-do-not-use";

pub fn now() -> i64 {
    chrono::Utc::now().timestamp()
}

pub fn mint<T: Serialize>(alg: Algorithm, secret: &str, claims: &T) -> String {
    let mut header = Header::new(alg);
    header.typ = Some("JWT".to_string());
    jsonwebtoken::encode(&header, claims, &EncodingKey::from_secret(secret.as_bytes())).unwrap()
}

/// HS256 token signed with `SECRET`, valid for ten minutes.
pub fn token_for_role(role: &str) -> String {
    mint(
        Algorithm::HS256,
        SECRET,
        &json!({ "role": role, "exp": now() + 600 }),
    )
}

/// HS256 token signed with `SECRET` that expired an hour ago.
pub fn expired_token(role: &str) -> String {
    mint(
        Algorithm::HS256,
        SECRET,
        &json!({ "role": role, "exp": now() - 3600 }),
    )
}
