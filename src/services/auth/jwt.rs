use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation};
use std::fmt;
use tracing::debug;

use super::{ClaimSet, CredentialVerifier, Verification};

/// Internal reason a credential was rejected. Logged, never returned to the gate.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("no verification secret configured")]
    MissingSecret,

    #[error("jwt verification failed: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),
}

/// HMAC (HS256/HS384/HS512) JWT verifier.
///
/// - `exp` is required (the issuer must always set it); `nbf` is checked when present.
/// - `aud`/`iss` are not checked (the issuer shares only the secret with us).
/// - Key material is intentionally not printable via Debug.
#[derive(Clone)]
pub struct JwtVerifier {
    decoding_key: Option<DecodingKey>,
    validation: Validation,
}

impl fmt::Debug for JwtVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Do not print key material
        f.debug_struct("JwtVerifier")
            .field("has_secret", &self.decoding_key.is_some())
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtVerifier {
    /// `secret == None` builds a verifier that rejects every credential.
    pub fn new(secret: Option<&[u8]>, leeway_seconds: u64) -> Self {
        let decoding_key = secret
            .filter(|s| !s.is_empty())
            .map(DecodingKey::from_secret);

        let mut validation = Validation::new(Algorithm::HS256);
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        validation.leeway = leeway_seconds;
        // Tokens without `exp` are rejected; the issuer must always set it.
        validation.set_required_spec_claims(&["exp"]);
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;

        Self {
            decoding_key,
            validation,
        }
    }

    pub fn has_secret(&self) -> bool {
        self.decoding_key.is_some()
    }

    /// Verify signature and registered claims, then decode the claim set.
    pub fn decode(&self, token: &str) -> Result<ClaimSet, VerifyError> {
        let key = self.decoding_key.as_ref().ok_or(VerifyError::MissingSecret)?;
        let data = jsonwebtoken::decode::<ClaimSet>(token, key, &self.validation)?;

        Ok(data.claims)
    }
}

#[async_trait]
impl CredentialVerifier for JwtVerifier {
    async fn verify(&self, credential: &str) -> Verification {
        match self.decode(credential) {
            Ok(claims) => Verification::Valid(claims),
            Err(err) => {
                debug!(error = %err, "credential rejected");
                Verification::Rejected
            }
        }
    }
}
