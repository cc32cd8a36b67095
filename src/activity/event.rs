/// Event model for the GitHub events feed.
///
/// Deserialization is deliberately lenient: only the type tag is required,
/// every sub-field the formatter reads is optional, and unknown keys are
/// ignored. A record the feed mangles should degrade to a weaker line, not
/// kill the run.
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One event as reported by `GET /users/{username}/events`.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivityEvent {
    /// Event type tag, e.g. `PushEvent`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Repository the event happened in.
    pub repo: Option<RepoRef>,
    /// Type-specific payload fields.
    #[serde(default)]
    pub payload: EventPayload,
    /// When the event was created. Decoded for completeness; no current
    /// line template prints it.
    #[allow(dead_code)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Repository reference inside an event.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoRef {
    /// Full name, e.g. "rust-lang/rust".
    pub name: String,
}

/// The payload sub-fields the formatter consumes. Everything else in the
/// payload object is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    /// Issue/PR action, e.g. "opened".
    pub action: Option<String>,
    /// Number of commits in a push.
    pub size: Option<u64>,
    /// Created/deleted ref kind: "repository", "branch", or "tag".
    pub ref_type: Option<String>,
    /// Created/deleted ref name.
    #[serde(rename = "ref")]
    pub git_ref: Option<String>,
}
