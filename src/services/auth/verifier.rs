//! Credential verification seam.
//!
//! The gate only needs to know whether a credential is valid and, if so, which
//! claims it carries. Why a credential was rejected (bad signature, expired,
//! malformed) stays inside the implementation.

use async_trait::async_trait;

use super::ClaimSet;

/// Outcome of verifying one credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Valid(ClaimSet),
    Rejected,
}

/// Verifies an opaque credential string.
///
/// Implementations must never panic on hostile input and must reject
/// (not fail) when they have no key material.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    async fn verify(&self, credential: &str) -> Verification;
}
