/// Blocking HTTP client for the public GitHub events endpoint.
///
/// One client, one request, one response. The base URL is a struct field so
/// tests can point the client at a local mock server; production callers go
/// through [`EventsClient::new`] and always hit the fixed API root.
use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::ACCEPT;

use super::errors::FetchError;
use crate::activity::ActivityEvent;

/// Fixed endpoint root for the public GitHub REST API.
const API_ROOT: &str = "https://api.github.com";

/// Identifying User-Agent. GitHub rejects requests without one.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Media type pinning the v3 REST representation.
const ACCEPT_GITHUB_V3: &str = "application/vnd.github.v3+json";

/// Bound on the whole request (connect + read).
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Only this many of the most recent events are kept.
const MAX_EVENTS: usize = 10;

/// Longest body prefix included in an `Api` error message.
const MAX_SNIPPET: usize = 120;

/// Client for `GET /users/{username}/events`.
pub struct EventsClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl EventsClient {
    /// Build a client against the fixed GitHub API root.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Network` if the underlying client cannot be built.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(API_ROOT)
    }

    /// Build a client against an arbitrary base URL (mock servers in tests).
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Network` if the underlying client cannot be built.
    pub fn with_base_url(base_url: &str) -> Result<Self, FetchError> {
        let http = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| FetchError::Network(err.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Fetch the user's most recent events, capped at the first ten.
    ///
    /// Single attempt, no retries.
    ///
    /// # Errors
    ///
    /// - `FetchError::UserNotFound` — HTTP 404
    /// - `FetchError::RateLimited` — HTTP 403
    /// - `FetchError::Api` — any other non-2xx status
    /// - `FetchError::Network` — connection failure or timeout
    /// - `FetchError::Parse` — body is not a JSON array
    pub fn fetch_user_events(&self, username: &str) -> Result<Vec<ActivityEvent>, FetchError> {
        let url = format!("{}/users/{username}/events", self.base_url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, ACCEPT_GITHUB_V3)
            .send()
            .map_err(|err| transport_error(&err))?;

        let status = response.status();
        let body = response.text().map_err(|err| transport_error(&err))?;

        if !status.is_success() {
            return Err(classify_status(status, username, &body));
        }

        decode_events(&body)
    }
}

/// Map a transport-level reqwest failure to a `Network` error.
fn transport_error(err: &reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::Network("request timed out".to_owned());
    }
    FetchError::Network(err.to_string())
}

/// Map a non-2xx status to its typed error.
fn classify_status(status: StatusCode, username: &str, body: &str) -> FetchError {
    match status {
        StatusCode::NOT_FOUND => FetchError::UserNotFound {
            username: username.to_owned(),
        },
        StatusCode::FORBIDDEN => FetchError::RateLimited,
        _ => FetchError::Api {
            status: status.as_u16(),
            snippet: body_snippet(body),
        },
    }
}

/// Decode a JSON array body into events, keeping the first [`MAX_EVENTS`].
///
/// Individual elements that do not decode as events are dropped; only a body
/// that is not an array at all is a parse failure.
fn decode_events(body: &str) -> Result<Vec<ActivityEvent>, FetchError> {
    let raw: Vec<serde_json::Value> =
        serde_json::from_str(body).map_err(|err| FetchError::Parse(err.to_string()))?;

    Ok(raw
        .into_iter()
        .take(MAX_EVENTS)
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect())
}

/// Bound and flatten a response body for inclusion in an error message.
fn body_snippet(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.is_empty() {
        return "<empty body>".to_owned();
    }
    if flat.len() <= MAX_SNIPPET {
        return flat;
    }
    let mut cut = MAX_SNIPPET;
    while !flat.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}…", &flat[..cut])
}
