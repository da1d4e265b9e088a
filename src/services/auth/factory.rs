/// Factory: build the credential verifier from application `Config`.
use std::sync::Arc;

use crate::config::Config;
use crate::services::auth::{CredentialVerifier, JwtVerifier};

pub fn build_verifier(config: &Config) -> Arc<dyn CredentialVerifier> {
    let verifier = JwtVerifier::new(
        config.jwt_secret.as_deref().map(str::as_bytes),
        config.jwt_leeway_seconds,
    );

    if !verifier.has_secret() {
        tracing::warn!("JWT_SECRET is not set; every credential will be rejected");
    }

    Arc::new(verifier)
}
