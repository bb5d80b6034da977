use std::fmt;

/// Identity and credentials used to address the health backend.
///
/// Passed explicitly to every save call.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    base_url: String,
    user_id: String,
    token: String,
}

impl Session {
    pub fn new(base_url: &str, user_id: &str, token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            user_id: user_id.to_string(),
            token: token.to_string(),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Absolute URL for a backend path starting with `/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("base_url", &self.base_url)
            .field("user_id", &self.user_id)
            .field("token", &"<redacted>")
            .finish()
    }
}
