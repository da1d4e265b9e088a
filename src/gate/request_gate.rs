use std::{fmt, sync::Arc};

use crate::services::auth::{CredentialVerifier, Verification};

use super::{Decision, GatePolicy, RouteClass};

/// Decides what happens to a request from its path and `token` cookie value.
///
/// Stateless per call; the only suspension point is the verifier.
#[derive(Clone)]
pub struct RequestGate {
    verifier: Arc<dyn CredentialVerifier>,
    policy: GatePolicy,
}

impl fmt::Debug for RequestGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RequestGate")
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}

impl RequestGate {
    pub fn new(verifier: Arc<dyn CredentialVerifier>, policy: GatePolicy) -> Self {
        Self { verifier, policy }
    }

    pub fn policy(&self) -> &GatePolicy {
        &self.policy
    }

    /// `credential` is the raw cookie value; an empty string means "no credential".
    pub async fn evaluate(&self, path: &str, credential: &str) -> Decision {
        let class = self.policy.classify(path);

        match (class, credential.is_empty()) {
            (RouteClass::Public, true) => Decision::Allow,

            // Already signed in: send the user to their role's home.
            // A bad cookie must not block the login page, so rejection allows.
            (RouteClass::Public, false) => match self.verifier.verify(credential).await {
                Verification::Valid(claims) => {
                    Decision::RedirectTo(self.policy.role_home(&claims.role))
                }
                Verification::Rejected => Decision::Allow,
            },

            (RouteClass::Protected | RouteClass::AdminScoped, true) => self.to_login(),

            (RouteClass::Protected | RouteClass::AdminScoped, false) => {
                match self.verifier.verify(credential).await {
                    Verification::Valid(claims)
                        if class == RouteClass::AdminScoped
                            && claims.role != self.policy.admin_role =>
                    {
                        self.to_login()
                    }
                    Verification::Valid(_) => Decision::Allow,
                    Verification::Rejected => self.to_login(),
                }
            }
        }
    }

    fn to_login(&self) -> Decision {
        Decision::redirect(self.policy.login_path.as_str())
    }
}
