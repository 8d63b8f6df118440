use serde::{Deserialize, Serialize};

/// Payload carried inside every issued token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub exp: usize,
    pub admin: bool,
}

/// The verified caller of a request. Never persisted; rebuilt from the
/// bearer token on every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    pub fn id(&self) -> &str {
        &self.0.sub
    }

    pub fn is_admin(&self) -> bool {
        self.0.admin
    }
}
