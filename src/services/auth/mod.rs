pub mod claims;
pub mod factory;
pub mod jwt;
pub mod verifier;

#[cfg(test)]
pub mod testing;

pub use claims::ClaimSet;
pub use factory::build_verifier;
pub use jwt::JwtVerifier;
pub use verifier::{CredentialVerifier, Verification};
