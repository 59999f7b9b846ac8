//! ghr models - typed domain objects for REST API payloads.
//!
//! Every domain object is built from an already-fetched JSON tree through
//! [`FromJson`], tolerating absent optional fields, and can be turned back
//! into JSON through [`ToJson`]. Public fields allow local construction
//! without a network round trip.

pub mod json;
pub mod models;

// Re-export key types
pub use json::{FromJson, JsonEnum, ToJson};
pub use models::actions::{
    Artifact, ArtifactList, CacheUsage, PublicKey, RunConclusion, RunStatus, Secret, SecretList,
    Workflow, WorkflowList, WorkflowRun, WorkflowRunList, WorkflowState,
};
pub use models::gist::{Gist, GistFile};
pub use models::gitignore::GitignoreTemplate;
pub use models::issue::{Issue, IssueComment, IssueState, Label, Milestone};
pub use models::permissions::{ActionsPermissions, AllowedActions, EnabledScope};
pub use models::pull::{MergeResult, PullRequest, PullRequestRef};
pub use models::repository::{Repository, RepositoryPermissions, Visibility};
pub use models::user::{License, SimpleUser};
pub use models::webhook::{Webhook, WebhookConfig, WebhookResponse};
