/// Map events to human-readable activity lines.
///
/// Dispatch is a fixed mapping from event type tag to a line template, with
/// a generic fallback for anything unrecognized. Formatting is total: every
/// decoded event yields a line, and missing payload fields weaken the line
/// instead of failing it.
use super::event::ActivityEvent;

/// Placeholder when the feed omits `repo.name`.
const UNKNOWN_REPO: &str = "unknown repository";

/// Produce the line body for a single event.
#[must_use]
pub fn describe(event: &ActivityEvent) -> String {
    let repo = event.repo.as_ref().map_or(UNKNOWN_REPO, |r| r.name.as_str());
    let payload = &event.payload;

    match event.kind.as_str() {
        "PushEvent" => {
            let commits = payload.size.unwrap_or(0);
            format!("Pushed {commits} commit(s) to {repo}")
        }
        "IssuesEvent" => match payload.action.as_deref() {
            Some(action) => format!("{} an issue in {repo}", capitalize(action)),
            None => generic(event, repo),
        },
        "WatchEvent" => format!("Starred {repo}"),
        "CreateEvent" => {
            let ref_type = payload.ref_type.as_deref().unwrap_or("repository");
            match payload.git_ref.as_deref() {
                Some(name) => format!("Created {ref_type} {name} in {repo}"),
                None => format!("Created {ref_type} in {repo}"),
            }
        }
        "ForkEvent" => format!("Forked {repo}"),
        "PullRequestEvent" => match payload.action.as_deref() {
            Some(action) => format!("{} a pull request in {repo}", capitalize(action)),
            None => generic(event, repo),
        },
        "DeleteEvent" => {
            let ref_type = payload.ref_type.as_deref().unwrap_or("branch");
            match payload.git_ref.as_deref() {
                Some(name) => format!("Deleted {ref_type} {name} in {repo}"),
                None => format!("Deleted {ref_type} in {repo}"),
            }
        }
        "ReleaseEvent" => format!("Published a release in {repo}"),
        "PublicEvent" => format!("Made {repo} public"),
        _ => generic(event, repo),
    }
}

/// Map a list of events to display lines, one per event, in input order.
#[must_use]
pub fn format_activity(events: &[ActivityEvent]) -> Vec<String> {
    events
        .iter()
        .map(|event| format!("- {}", describe(event)))
        .collect()
}

/// Fallback for unknown event types and events missing a required field.
fn generic(event: &ActivityEvent, repo: &str) -> String {
    format!("Did a {} on {repo}", event.kind)
}

/// Uppercase the first character ("opened" → "Opened").
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().collect::<String>() + chars.as_str()
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::activity::event::{EventPayload, RepoRef};

    fn event(kind: &str, repo: Option<&str>, payload: EventPayload) -> ActivityEvent {
        ActivityEvent {
            kind: kind.to_owned(),
            repo: repo.map(|name| RepoRef {
                name: name.to_owned(),
            }),
            payload,
            created_at: None,
        }
    }

    #[test]
    fn test_known_types_round_trip_to_fixed_lines() {
        let fixture = json!([
            {"type": "PushEvent", "repo": {"name": "octocat/hello"}, "payload": {"size": 3}},
            {"type": "IssuesEvent", "repo": {"name": "octocat/hello"}, "payload": {"action": "opened"}},
            {"type": "WatchEvent", "repo": {"name": "rust-lang/rust"}, "payload": {}},
            {"type": "CreateEvent", "repo": {"name": "octocat/hello"}, "payload": {"ref_type": "branch", "ref": "main"}},
            {"type": "ForkEvent", "repo": {"name": "serde-rs/serde"}, "payload": {}},
            {"type": "PullRequestEvent", "repo": {"name": "octocat/hello"}, "payload": {"action": "closed"}},
            {"type": "DeleteEvent", "repo": {"name": "octocat/hello"}, "payload": {"ref_type": "tag", "ref": "v0.1.0"}},
            {"type": "ReleaseEvent", "repo": {"name": "octocat/hello"}, "payload": {"action": "published"}},
            {"type": "PublicEvent", "repo": {"name": "octocat/hello"}, "payload": {}},
            {"type": "XyzEvent", "repo": {"name": "octocat/hello"}, "payload": {}}
        ]);
        let events: Vec<ActivityEvent> = serde_json::from_value(fixture).unwrap();

        assert_eq!(
            format_activity(&events),
            vec![
                "- Pushed 3 commit(s) to octocat/hello",
                "- Opened an issue in octocat/hello",
                "- Starred rust-lang/rust",
                "- Created branch main in octocat/hello",
                "- Forked serde-rs/serde",
                "- Closed a pull request in octocat/hello",
                "- Deleted tag v0.1.0 in octocat/hello",
                "- Published a release in octocat/hello",
                "- Made octocat/hello public",
                "- Did a XyzEvent on octocat/hello",
            ]
        );
    }

    #[test]
    fn test_push_without_size_counts_zero() {
        let line = describe(&event("PushEvent", Some("a/b"), EventPayload::default()));
        assert_eq!(line, "Pushed 0 commit(s) to a/b");
    }

    #[test]
    fn test_create_without_ref_omits_name() {
        let line = describe(&event("CreateEvent", Some("a/b"), EventPayload::default()));
        assert_eq!(line, "Created repository in a/b");
    }

    #[test]
    fn test_delete_without_ref_defaults_to_branch() {
        let line = describe(&event("DeleteEvent", Some("a/b"), EventPayload::default()));
        assert_eq!(line, "Deleted branch in a/b");
    }

    #[test]
    fn test_issue_without_action_falls_back_to_generic() {
        let line = describe(&event("IssuesEvent", Some("a/b"), EventPayload::default()));
        assert_eq!(line, "Did a IssuesEvent on a/b");
    }

    #[test]
    fn test_missing_repo_uses_placeholder() {
        let line = describe(&event("WatchEvent", None, EventPayload::default()));
        assert_eq!(line, "Starred unknown repository");
    }

    #[test]
    fn test_unknown_type_never_fails() {
        let line = describe(&event("TotallyNewEvent", Some("a/b"), EventPayload::default()));
        assert_eq!(line, "Did a TotallyNewEvent on a/b");
    }
}
