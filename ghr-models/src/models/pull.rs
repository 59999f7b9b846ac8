//! Pull request models.

use serde::Serialize;
use serde_json::Value;

use ghr_core::error::GhrResult;

use super::issue::{IssueState, Label};
use super::repository::Repository;
use super::user::SimpleUser;
use crate::json::{self, FromJson};

/// One side (`head` or `base`) of a pull request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequestRef {
    /// `owner:branch`.
    pub label: String,
    #[serde(rename = "ref")]
    pub ref_name: String,
    pub sha: String,
    pub user: Option<SimpleUser>,
    /// `None` when the source fork has been deleted.
    pub repo: Option<Repository>,
}

impl FromJson for PullRequestRef {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "PullRequestRef")?;
        Ok(Self {
            label: json::str_field(value, "label"),
            ref_name: json::str_field(value, "ref"),
            sha: json::str_field(value, "sha"),
            user: json::opt_object(value, "user")?,
            repo: json::opt_object(value, "repo")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PullRequest {
    pub id: i64,
    pub node_id: String,
    pub number: i64,
    pub title: String,
    pub body: Option<String>,
    pub state: IssueState,
    pub draft: bool,
    pub locked: bool,
    pub merged: bool,
    /// `None` while the service is still computing mergeability.
    pub mergeable: Option<bool>,
    /// Empty until upstream reports it.
    pub mergeable_state: String,
    pub merge_commit_sha: Option<String>,
    pub user: SimpleUser,
    pub labels: Vec<Label>,
    pub requested_reviewers: Vec<SimpleUser>,
    pub head: PullRequestRef,
    pub base: PullRequestRef,
    pub html_url: String,
    pub diff_url: String,
    pub commits: i64,
    pub additions: i64,
    pub deletions: i64,
    pub changed_files: i64,
    pub created_at: String,
    pub updated_at: String,
    pub closed_at: Option<String>,
    pub merged_at: Option<String>,
}

impl FromJson for PullRequest {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "PullRequest")?;
        let merged_at = json::opt_str(value, "merged_at");
        Ok(Self {
            id: json::i64_field(value, "id"),
            node_id: json::str_field(value, "node_id"),
            number: json::required_i64(value, "PullRequest", "number")?,
            title: json::str_field(value, "title"),
            body: json::opt_str(value, "body"),
            state: json::enum_field(value, "state"),
            draft: json::bool_field(value, "draft"),
            locked: json::bool_field(value, "locked"),
            // list payloads omit `merged`; a merge timestamp implies it
            merged: json::opt_bool(value, "merged").unwrap_or(merged_at.is_some()),
            mergeable: json::opt_bool(value, "mergeable"),
            mergeable_state: json::str_field(value, "mergeable_state"),
            merge_commit_sha: json::opt_str(value, "merge_commit_sha"),
            user: SimpleUser::from_json(json::object_field(value, "user"))?,
            labels: json::list_of(value, "labels")?,
            requested_reviewers: json::list_of(value, "requested_reviewers")?,
            head: PullRequestRef::from_json(json::object_field(value, "head"))?,
            base: PullRequestRef::from_json(json::object_field(value, "base"))?,
            html_url: json::str_field(value, "html_url"),
            diff_url: json::str_field(value, "diff_url"),
            commits: json::i64_field(value, "commits"),
            additions: json::i64_field(value, "additions"),
            deletions: json::i64_field(value, "deletions"),
            changed_files: json::i64_field(value, "changed_files"),
            created_at: json::str_field(value, "created_at"),
            updated_at: json::str_field(value, "updated_at"),
            closed_at: json::opt_str(value, "closed_at"),
            merged_at,
        })
    }
}

impl PullRequest {
    pub fn created_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.created_at)
    }

    pub fn merged_timestamp(&self) -> Option<i64> {
        self.merged_at.as_deref().and_then(json::timestamp_of)
    }

    /// Whether head and base live in different repositories.
    pub fn is_cross_repository(&self) -> bool {
        match (&self.head.repo, &self.base.repo) {
            (Some(head), Some(base)) => head.id != base.id,
            (None, Some(_)) => true,
            _ => false,
        }
    }
}

/// Result of `PUT /repos/{owner}/{repo}/pulls/{number}/merge`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MergeResult {
    pub sha: String,
    pub merged: bool,
    pub message: String,
}

impl FromJson for MergeResult {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "MergeResult")?;
        Ok(Self {
            sha: json::str_field(value, "sha"),
            merged: json::bool_field(value, "merged"),
            message: json::str_field(value, "message"),
        })
    }
}
