use serde::Deserialize;

/// Verified payload of a credential.
///
/// Only `role` is required by the gate; registered claims (`exp`, `nbf`, ...)
/// are checked by the verifier and not carried further.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClaimSet {
    pub role: String,
}

#[cfg(test)]
impl ClaimSet {
    pub fn new(role: impl Into<String>) -> Self {
        Self { role: role.into() }
    }
}
