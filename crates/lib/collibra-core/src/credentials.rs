use std::fmt;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

/// Endpoint and basic-auth credentials for a single catalog call.
///
/// For REST the endpoint is the base URL that request paths are resolved
/// against; for GraphQL it is the full query endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub endpoint: String,
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns a copy with each provided field replacing the default one.
    #[must_use]
    pub fn with_overrides(
        &self,
        endpoint: Option<String>,
        username: Option<String>,
        password: Option<String>,
    ) -> Self {
        Self {
            endpoint: endpoint.unwrap_or_else(|| self.endpoint.clone()),
            username: username.unwrap_or_else(|| self.username.clone()),
            password: password.unwrap_or_else(|| self.password.clone()),
        }
    }

    /// `Authorization` header value for HTTP Basic auth.
    #[must_use]
    pub fn basic_auth_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.password));
        format!("Basic {token}")
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("endpoint", &self.endpoint)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}
