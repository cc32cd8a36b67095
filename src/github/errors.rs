/// Errors from the GitHub API layer.
use thiserror::Error;

/// Typed failures for the single events request.
///
/// Every variant is terminal for the run: the caller prints one line and
/// exits non-zero. Nothing here is retried.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The username does not exist (HTTP 404).
    #[error("User '{username}' not found")]
    UserNotFound {
        /// The username that was requested.
        username: String,
    },

    /// The unauthenticated rate limit was hit (HTTP 403).
    #[error("API rate limit exceeded. Please try again later")]
    RateLimited,

    /// Any other non-2xx response from the API.
    #[error("GitHub API returned HTTP {status}: {snippet}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Bounded, whitespace-collapsed prefix of the response body.
        snippet: String,
    },

    /// Connection failure or request timeout.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not a JSON array.
    #[error("Invalid response from GitHub API: {0}")]
    Parse(String),
}
