/// Result of evaluating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Continue normal request handling.
    Allow,
    /// Answer with a redirect to the given path.
    RedirectTo(String),
}

impl Decision {
    pub fn redirect(target: impl Into<String>) -> Self {
        Self::RedirectTo(target.into())
    }
}
