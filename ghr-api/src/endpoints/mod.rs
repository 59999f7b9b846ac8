//! Endpoint managers organized by functional area.
//!
//! Each module adds an accessor on [`ApiClient`](crate::ApiClient) returning
//! a lightweight manager that borrows the client, e.g.
//! `client.repos().get("octocat", "Hello-World")`.

pub mod actions;
pub mod gists;
pub mod gitignore;
pub mod issues;
pub mod markdown;
pub mod pulls;
pub mod repos;
pub mod users;
pub mod webhooks;

pub use actions::ActionsManager;
pub use gists::GistsManager;
pub use gitignore::GitignoreManager;
pub use issues::{IssueQuery, IssuesManager};
pub use markdown::{MarkdownManager, RenderMode};
pub use pulls::PullsManager;
pub use repos::ReposManager;
pub use users::UsersManager;
pub use webhooks::WebhooksManager;

/// `/repos/{owner}/{repo}` prefix shared by repository-scoped endpoints.
pub(crate) fn repo_path(owner: &str, repo: &str) -> String {
    format!("/repos/{owner}/{repo}")
}
