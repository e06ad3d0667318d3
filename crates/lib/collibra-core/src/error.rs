use std::error::Error;
use std::fmt;

/// Failures raised while fetching from the catalog.
///
/// Every variant aborts the whole paginated fetch; nothing is retried.
#[derive(Debug)]
pub enum CatalogError {
    /// The server answered with a non-2xx status.
    Transport {
        status: u16,
        status_text: String,
        target: String,
        body: String,
    },
    /// A GraphQL response carried one or more entries in `errors`.
    Query { message: String },
    /// A GraphQL response had neither `errors` nor `data`.
    MissingData,
    /// A successful response body was not the expected JSON.
    MalformedResponse { target: String, reason: String },
    /// The request never produced a response (connect, TLS, body read).
    Request {
        target: String,
        source: reqwest::Error,
    },
    /// The request target could not be resolved against the endpoint.
    InvalidUrl {
        base: String,
        target: String,
        source: url::ParseError,
    },
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    pub(crate) fn malformed(target: &str, err: &serde_json::Error) -> Self {
        Self::MalformedResponse {
            target: target.to_string(),
            reason: err.to_string(),
        }
    }

    /// HTTP status for transport failures.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport {
                status,
                status_text,
                target,
                body,
            } => write!(
                f,
                "Collibra request failed: {status} {status_text}. URL={target}. Body={body}"
            ),
            Self::Query { message } => write!(f, "Collibra GraphQL errors: {message}"),
            Self::MissingData => write!(f, "Collibra GraphQL: response missing 'data'."),
            Self::MalformedResponse { target, reason } => {
                write!(f, "malformed response from {target}: {reason}")
            }
            Self::Request { target, source } => write!(f, "request to {target} failed: {source}"),
            Self::InvalidUrl {
                base,
                target,
                source,
            } => write!(f, "invalid request url {target} (base {base}): {source}"),
        }
    }
}

impl Error for CatalogError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Request { source, .. } => Some(source),
            Self::InvalidUrl { source, .. } => Some(source),
            _ => None,
        }
    }
}
