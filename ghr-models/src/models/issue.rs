//! Issue, label, milestone, and comment models.

use serde::Serialize;
use serde_json::Value;

use ghr_core::error::GhrResult;

use super::user::SimpleUser;
use crate::json::{self, FromJson};

crate::wire_enum! {
    /// State shared by issues, pull requests, and milestones.
    pub enum IssueState fallback Open {
        Open => "open",
        Closed => "closed",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Label {
    pub id: i64,
    pub node_id: String,
    pub name: String,
    /// Hex color without the leading `#`.
    pub color: String,
    pub description: Option<String>,
    pub default: bool,
}

impl FromJson for Label {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "Label")?;
        Ok(Self {
            id: json::i64_field(value, "id"),
            node_id: json::str_field(value, "node_id"),
            name: json::str_field(value, "name"),
            color: json::str_field(value, "color"),
            description: json::opt_str(value, "description"),
            default: json::bool_field(value, "default"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Milestone {
    pub id: i64,
    pub number: i64,
    pub title: String,
    pub description: Option<String>,
    pub state: IssueState,
    pub open_issues: i64,
    pub closed_issues: i64,
    pub due_on: Option<String>,
    pub created_at: String,
}

impl FromJson for Milestone {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "Milestone")?;
        Ok(Self {
            id: json::i64_field(value, "id"),
            number: json::i64_field(value, "number"),
            title: json::str_field(value, "title"),
            description: json::opt_str(value, "description"),
            state: json::enum_field(value, "state"),
            open_issues: json::i64_field(value, "open_issues"),
            closed_issues: json::i64_field(value, "closed_issues"),
            due_on: json::opt_str(value, "due_on"),
            created_at: json::str_field(value, "created_at"),
        })
    }
}

impl Milestone {
    pub fn due_timestamp(&self) -> Option<i64> {
        self.due_on.as_deref().and_then(json::timestamp_of)
    }

    /// Fraction of issues closed, in `0.0..=1.0`.
    pub fn progress(&self) -> f64 {
        let total = self.open_issues + self.closed_issues;
        if total == 0 {
            0.0
        } else {
            self.closed_issues as f64 / total as f64
        }
    }
}

/// An issue. Pull requests are also returned by the issue list endpoints;
/// `is_pull_request` tells them apart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub id: i64,
    pub node_id: String,
    pub number: i64,
    pub title: String,
    pub body: Option<String>,
    pub state: IssueState,
    pub state_reason: Option<String>,
    pub user: SimpleUser,
    pub labels: Vec<Label>,
    pub assignees: Vec<SimpleUser>,
    pub milestone: Option<Milestone>,
    pub comments: i64,
    pub locked: bool,
    pub html_url: String,
    /// Set when upstream attaches a `pull_request` object.
    #[serde(
        rename = "pull_request",
        serialize_with = "json::serialize_presence",
        skip_serializing_if = "json::is_false"
    )]
    pub is_pull_request: bool,
    pub created_at: String,
    pub updated_at: String,
    pub closed_at: Option<String>,
}

impl FromJson for Issue {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "Issue")?;
        Ok(Self {
            id: json::i64_field(value, "id"),
            node_id: json::str_field(value, "node_id"),
            number: json::required_i64(value, "Issue", "number")?,
            title: json::str_field(value, "title"),
            body: json::opt_str(value, "body"),
            state: json::enum_field(value, "state"),
            state_reason: json::opt_str(value, "state_reason"),
            user: SimpleUser::from_json(json::object_field(value, "user"))?,
            labels: json::list_of(value, "labels")?,
            assignees: json::list_of(value, "assignees")?,
            milestone: json::opt_object(value, "milestone")?,
            comments: json::i64_field(value, "comments"),
            locked: json::bool_field(value, "locked"),
            html_url: json::str_field(value, "html_url"),
            is_pull_request: json::has_field(value, "pull_request"),
            created_at: json::str_field(value, "created_at"),
            updated_at: json::str_field(value, "updated_at"),
            closed_at: json::opt_str(value, "closed_at"),
        })
    }
}

impl Issue {
    pub fn created_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.created_at)
    }

    pub fn updated_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.updated_at)
    }

    pub fn closed_timestamp(&self) -> Option<i64> {
        self.closed_at.as_deref().and_then(json::timestamp_of)
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|l| l.name.eq_ignore_ascii_case(name))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IssueComment {
    pub id: i64,
    pub node_id: String,
    pub body: String,
    pub user: SimpleUser,
    pub html_url: String,
    pub author_association: String,
    pub created_at: String,
    pub updated_at: String,
}

impl FromJson for IssueComment {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "IssueComment")?;
        Ok(Self {
            id: json::required_i64(value, "IssueComment", "id")?,
            node_id: json::str_field(value, "node_id"),
            body: json::str_field(value, "body"),
            user: SimpleUser::from_json(json::object_field(value, "user"))?,
            html_url: json::str_field(value, "html_url"),
            author_association: json::str_field(value, "author_association"),
            created_at: json::str_field(value, "created_at"),
            updated_at: json::str_field(value, "updated_at"),
        })
    }
}

impl IssueComment {
    /// Author association, `NONE` when upstream omitted it.
    pub fn association(&self) -> &str {
        if self.author_association.is_empty() {
            "NONE"
        } else {
            &self.author_association
        }
    }

    pub fn created_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_issue() -> Value {
        json!({
            "id": 1,
            "number": 1347,
            "state": "open",
            "title": "Found a bug",
            "body": "I'm having a problem with this.",
            "user": {"login": "octocat", "id": 1},
            "labels": [
                {"id": 208045946, "name": "bug", "color": "f29513", "default": true}
            ],
            "assignees": [{"login": "hubot", "id": 2}],
            "milestone": {
                "id": 1002604, "number": 1, "state": "open", "title": "v1.0",
                "open_issues": 4, "closed_issues": 8, "due_on": "2012-10-09T23:39:01Z"
            },
            "locked": true,
            "comments": 0,
            "pull_request": {"url": "https://api.github.com/repos/octocat/Hello-World/pulls/1347"},
            "closed_at": null,
            "created_at": "2011-04-22T13:33:48Z",
            "updated_at": "2011-04-22T13:33:48Z"
        })
    }

    #[test]
    fn test_issue_from_json() {
        let issue = Issue::from_json(&sample_issue()).unwrap();
        assert_eq!(issue.number, 1347);
        assert_eq!(issue.state, IssueState::Open);
        assert!(issue.has_label("BUG"));
        assert_eq!(issue.assignees[0].login, "hubot");
        assert!(issue.is_pull_request);
        assert!(issue.locked);
        assert_eq!(issue.closed_at, None);
        assert_eq!(issue.closed_timestamp(), None);
        assert_eq!(issue.created_timestamp(), Some(1_303_479_228));
    }

    #[test]
    fn test_issue_requires_number() {
        let mut v = sample_issue();
        v.as_object_mut().unwrap().remove("number");
        assert!(Issue::from_json(&v).is_err());
    }

    #[test]
    fn test_issue_nested_user_failure_propagates() {
        let mut v = sample_issue();
        v["user"] = json!({"id": 5});
        assert!(Issue::from_json(&v).is_err());
    }

    #[test]
    fn test_milestone_progress() {
        let issue = Issue::from_json(&sample_issue()).unwrap();
        let milestone = issue.milestone.unwrap();
        assert!((milestone.progress() - 8.0 / 12.0).abs() < f64::EPSILON);
        assert!(milestone.due_timestamp().is_some());
        assert_eq!(Milestone::default().progress(), 0.0);
    }

    #[test]
    fn test_unknown_state_falls_back_to_open() {
        let mut v = sample_issue();
        v["state"] = json!("reopened-ish");
        assert_eq!(Issue::from_json(&v).unwrap().state, IssueState::Open);
    }

    #[test]
    fn test_comment_defaults() {
        let c = IssueComment::from_json(&json!({"id": 9, "user": {"login": "o"}})).unwrap();
        assert_eq!(c.body, "");
        assert_eq!(c.author_association, "");
        assert_eq!(c.association(), "NONE");
        assert_eq!(c.created_timestamp(), None);
    }
}
