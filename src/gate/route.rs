//! Route classification.
//!
//! Classification is a pure function of the path string: every path is
//! either public or protected, and protected paths under the admin prefix
//! are additionally admin-scoped.
//!
//! Paths arrive raw (percent-encoded, possibly with `.`/`..` segments) while
//! handlers see them decoded. A path is classified in both forms and the
//! stricter class wins.

use std::borrow::Cow;

/// Class of a request path, ordered from least to most restricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum RouteClass {
    Public,
    Protected,
    AdminScoped,
}

/// Static routing policy of the gate.
///
/// Defaults:
/// - public pages: `/login`, `/register` (exact match)
/// - login redirect: `/login`
/// - role home: `/com-man/<role>`
/// - admin-scoped prefix: `/com-man/admin`, role `admin`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePolicy {
    pub public_paths: Vec<String>,
    pub login_path: String,
    pub protected_root: String,
    pub admin_prefix: String,
    pub admin_role: String,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            public_paths: vec!["/login".to_string(), "/register".to_string()],
            login_path: "/login".to_string(),
            protected_root: "/com-man".to_string(),
            admin_prefix: "/com-man/admin".to_string(),
            admin_role: "admin".to_string(),
        }
    }
}

impl GatePolicy {
    pub fn classify(&self, path: &str) -> RouteClass {
        let raw = self.classify_literal(path);
        let normalized = self.classify_literal(&normalize_path(path));

        raw.max(normalized)
    }

    fn classify_literal(&self, path: &str) -> RouteClass {
        if self.public_paths.iter().any(|p| p == path) {
            RouteClass::Public
        } else if path.starts_with(&self.admin_prefix) {
            RouteClass::AdminScoped
        } else {
            RouteClass::Protected
        }
    }

    /// Whether the gate runs for `path` at all.
    ///
    /// Matches the public pages plus `<protected_root>` and everything below it.
    /// Other paths are left to the router's default handling.
    pub fn applies_to(&self, path: &str) -> bool {
        self.applies_to_literal(path) || self.applies_to_literal(&normalize_path(path))
    }

    fn applies_to_literal(&self, path: &str) -> bool {
        if self.public_paths.iter().any(|p| p == path) {
            return true;
        }

        match path.strip_prefix(&self.protected_root) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }

    /// Landing page for an already authenticated user: `<protected_root>/<role>`.
    pub fn role_home(&self, role: &str) -> String {
        format!("{}/{}", self.protected_root, urlencoding::encode(role))
    }
}

/// Percent-decode `path` and resolve `.`, `..` and empty segments.
///
/// Always returns an absolute path; `..` never climbs above `/`.
pub fn normalize_path(path: &str) -> String {
    let decoded: Cow<'_, str> = match urlencoding::decode(path) {
        Ok(decoded) => decoded,
        Err(_) => Cow::Owned(
            String::from_utf8_lossy(&urlencoding::decode_binary(path.as_bytes())).into_owned(),
        ),
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    format!("/{}", segments.join("/"))
}
