//! Actions models: workflows, runs, artifacts, caches, and secrets.
//!
//! The list variants carry the upstream `total_count` next to the page of
//! elements actually returned; the two are independent because the service
//! paginates.

use serde::Serialize;
use serde_json::Value;

use ghr_core::error::GhrResult;

use super::user::SimpleUser;
use crate::json::{self, FromJson};

crate::wire_enum! {
    pub enum WorkflowState fallback Active {
        Active => "active",
        Deleted => "deleted",
        DisabledFork => "disabled_fork",
        DisabledInactivity => "disabled_inactivity",
        DisabledManually => "disabled_manually",
    }
}

crate::wire_enum! {
    pub enum RunStatus fallback Queued {
        Queued => "queued",
        InProgress => "in_progress",
        Completed => "completed",
        Waiting => "waiting",
        Requested => "requested",
        Pending => "pending",
    }
}

crate::wire_enum! {
    /// Outcome of a completed run. `Unset` while the run has not concluded.
    pub enum RunConclusion fallback Unset {
        Unset => "",
        Success => "success",
        Failure => "failure",
        Neutral => "neutral",
        Cancelled => "cancelled",
        Skipped => "skipped",
        TimedOut => "timed_out",
        ActionRequired => "action_required",
        Stale => "stale",
        StartupFailure => "startup_failure",
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Workflow {
    pub id: i64,
    pub node_id: String,
    pub name: String,
    pub path: String,
    pub state: WorkflowState,
    pub html_url: String,
    pub badge_url: String,
    pub created_at: String,
    pub updated_at: String,
}

impl FromJson for Workflow {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "Workflow")?;
        Ok(Self {
            id: json::required_i64(value, "Workflow", "id")?,
            node_id: json::str_field(value, "node_id"),
            name: json::str_field(value, "name"),
            path: json::str_field(value, "path"),
            state: json::enum_field(value, "state"),
            html_url: json::str_field(value, "html_url"),
            badge_url: json::str_field(value, "badge_url"),
            created_at: json::str_field(value, "created_at"),
            updated_at: json::str_field(value, "updated_at"),
        })
    }
}

impl Workflow {
    pub fn created_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.created_at)
    }

    /// Workflow file name, e.g. `ci.yml` for `.github/workflows/ci.yml`.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowList {
    pub total_count: i64,
    pub workflows: Vec<Workflow>,
}

impl FromJson for WorkflowList {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "WorkflowList")?;
        Ok(Self {
            total_count: json::i64_field(value, "total_count"),
            workflows: json::list_of(value, "workflows")?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowRun {
    pub id: i64,
    pub node_id: String,
    pub name: String,
    pub display_title: String,
    pub head_branch: Option<String>,
    pub head_sha: String,
    pub path: String,
    pub run_number: i64,
    pub run_attempt: i64,
    pub event: String,
    pub status: RunStatus,
    pub conclusion: RunConclusion,
    pub workflow_id: i64,
    pub html_url: String,
    pub actor: Option<SimpleUser>,
    pub triggering_actor: Option<SimpleUser>,
    pub created_at: String,
    pub updated_at: String,
    pub run_started_at: String,
}

impl FromJson for WorkflowRun {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "WorkflowRun")?;
        Ok(Self {
            id: json::required_i64(value, "WorkflowRun", "id")?,
            node_id: json::str_field(value, "node_id"),
            name: json::str_field(value, "name"),
            display_title: json::str_field(value, "display_title"),
            head_branch: json::opt_str(value, "head_branch"),
            head_sha: json::str_field(value, "head_sha"),
            path: json::str_field(value, "path"),
            run_number: json::i64_field(value, "run_number"),
            run_attempt: json::i64_field(value, "run_attempt"),
            event: json::str_field(value, "event"),
            status: json::enum_field(value, "status"),
            conclusion: json::enum_field(value, "conclusion"),
            workflow_id: json::i64_field(value, "workflow_id"),
            html_url: json::str_field(value, "html_url"),
            actor: json::opt_object(value, "actor")?,
            triggering_actor: json::opt_object(value, "triggering_actor")?,
            created_at: json::str_field(value, "created_at"),
            updated_at: json::str_field(value, "updated_at"),
            run_started_at: json::str_field(value, "run_started_at"),
        })
    }
}

impl WorkflowRun {
    pub fn created_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.created_at)
    }

    pub fn updated_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.updated_at)
    }

    pub fn started_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.run_started_at)
    }

    pub fn is_completed(&self) -> bool {
        self.status == RunStatus::Completed
    }

    pub fn succeeded(&self) -> bool {
        self.is_completed() && self.conclusion == RunConclusion::Success
    }

    /// Seconds between start and last update, when both are known.
    pub fn duration_secs(&self) -> Option<i64> {
        let start = self.started_timestamp()?;
        let end = self.updated_timestamp()?;
        (end >= start).then_some(end - start)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkflowRunList {
    pub total_count: i64,
    pub workflow_runs: Vec<WorkflowRun>,
}

impl FromJson for WorkflowRunList {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "WorkflowRunList")?;
        Ok(Self {
            total_count: json::i64_field(value, "total_count"),
            workflow_runs: json::list_of(value, "workflow_runs")?,
        })
    }
}

impl WorkflowRunList {
    /// Whether more runs exist beyond the ones in this page.
    pub fn has_more(&self) -> bool {
        (self.workflow_runs.len() as i64) < self.total_count
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Artifact {
    pub id: i64,
    pub node_id: String,
    pub name: String,
    pub size_in_bytes: i64,
    pub url: String,
    pub archive_download_url: String,
    pub expired: bool,
    pub created_at: String,
    pub expires_at: String,
    pub updated_at: String,
}

impl FromJson for Artifact {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "Artifact")?;
        Ok(Self {
            id: json::required_i64(value, "Artifact", "id")?,
            node_id: json::str_field(value, "node_id"),
            name: json::str_field(value, "name"),
            size_in_bytes: json::i64_field(value, "size_in_bytes"),
            url: json::str_field(value, "url"),
            archive_download_url: json::str_field(value, "archive_download_url"),
            expired: json::bool_field(value, "expired"),
            created_at: json::str_field(value, "created_at"),
            expires_at: json::str_field(value, "expires_at"),
            updated_at: json::str_field(value, "updated_at"),
        })
    }
}

impl Artifact {
    pub fn created_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.created_at)
    }

    pub fn expires_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.expires_at)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactList {
    pub total_count: i64,
    pub artifacts: Vec<Artifact>,
}

impl FromJson for ArtifactList {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "ArtifactList")?;
        Ok(Self {
            total_count: json::i64_field(value, "total_count"),
            artifacts: json::list_of(value, "artifacts")?,
        })
    }
}

/// Cache usage of one repository. The byte count is reported as a float.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CacheUsage {
    pub full_name: String,
    pub active_caches_size_in_bytes: f64,
    pub active_caches_count: i64,
}

impl FromJson for CacheUsage {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "CacheUsage")?;
        Ok(Self {
            full_name: json::str_field(value, "full_name"),
            active_caches_size_in_bytes: json::f64_field(value, "active_caches_size_in_bytes"),
            active_caches_count: json::i64_field(value, "active_caches_count"),
        })
    }
}

impl CacheUsage {
    pub fn rounded_size_in_bytes(&self) -> u64 {
        json::round_bytes(self.active_caches_size_in_bytes)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Secret {
    pub name: String,
    /// Only present on organization secrets.
    pub visibility: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl FromJson for Secret {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "Secret")?;
        Ok(Self {
            name: json::required_str(value, "Secret", "name")?,
            visibility: json::opt_str(value, "visibility"),
            created_at: json::str_field(value, "created_at"),
            updated_at: json::str_field(value, "updated_at"),
        })
    }
}

impl Secret {
    pub fn updated_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.updated_at)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SecretList {
    pub total_count: i64,
    pub secrets: Vec<Secret>,
}

impl FromJson for SecretList {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "SecretList")?;
        Ok(Self {
            total_count: json::i64_field(value, "total_count"),
            secrets: json::list_of(value, "secrets")?,
        })
    }
}

/// Public key used to encrypt secret values before upload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PublicKey {
    pub key_id: String,
    /// Base64-encoded key.
    pub key: String,
}

impl FromJson for PublicKey {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "PublicKey")?;
        Ok(Self {
            key_id: json::required_str(value, "PublicKey", "key_id")?,
            key: json::required_str(value, "PublicKey", "key")?,
        })
    }
}
