//! Actions endpoints: workflows, runs, artifacts, caches, permissions, secrets.

use ghr_core::error::GhrResult;
use ghr_models::{
    ActionsPermissions, AllowedActions, ArtifactList, CacheUsage, JsonEnum, PublicKey, SecretList,
    Workflow, WorkflowList, WorkflowRun, WorkflowRunList,
};

use crate::client::ApiClient;
use crate::endpoints::repo_path;
use crate::params::Params;

pub struct ActionsManager<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn actions(&self) -> ActionsManager<'_> {
        ActionsManager { client: self }
    }
}

fn actions_path(owner: &str, repo: &str) -> String {
    format!("{}/actions", repo_path(owner, repo))
}

impl ActionsManager<'_> {
    // --- Workflows ---

    pub fn list_workflows(&self, owner: &str, repo: &str) -> GhrResult<WorkflowList> {
        self.client
            .get_typed(&format!("{}/workflows", actions_path(owner, repo)), &Params::new())
    }

    /// `workflow` is the numeric id or the workflow file name (`ci.yml`).
    pub fn get_workflow(&self, owner: &str, repo: &str, workflow: &str) -> GhrResult<Workflow> {
        self.client.get_typed(
            &format!("{}/workflows/{workflow}", actions_path(owner, repo)),
            &Params::new(),
        )
    }

    // --- Runs ---

    /// Workflow runs (`actor`, `branch`, `event`, `status`, `created`, `per_page`, `page`).
    pub fn list_runs(&self, owner: &str, repo: &str, params: &Params) -> GhrResult<WorkflowRunList> {
        self.client
            .get_typed(&format!("{}/runs", actions_path(owner, repo)), params)
    }

    pub fn get_run(&self, owner: &str, repo: &str, run_id: i64) -> GhrResult<WorkflowRun> {
        self.client.get_typed(
            &format!("{}/runs/{run_id}", actions_path(owner, repo)),
            &Params::new(),
        )
    }

    pub fn rerun(&self, owner: &str, repo: &str, run_id: i64) -> bool {
        let path = format!("{}/runs/{run_id}/rerun", actions_path(owner, repo));
        self.client.outcome_ok(&self.client.send_post_empty(&path))
    }

    pub fn cancel_run(&self, owner: &str, repo: &str, run_id: i64) -> bool {
        let path = format!("{}/runs/{run_id}/cancel", actions_path(owner, repo));
        self.client.outcome_ok(&self.client.send_post_empty(&path))
    }

    pub fn delete_run(&self, owner: &str, repo: &str, run_id: i64) -> bool {
        self.client
            .delete_ok(&format!("{}/runs/{run_id}", actions_path(owner, repo)))
    }

    // --- Artifacts and caches ---

    pub fn list_artifacts(&self, owner: &str, repo: &str, params: &Params) -> GhrResult<ArtifactList> {
        self.client
            .get_typed(&format!("{}/artifacts", actions_path(owner, repo)), params)
    }

    pub fn delete_artifact(&self, owner: &str, repo: &str, artifact_id: i64) -> bool {
        self.client
            .delete_ok(&format!("{}/artifacts/{artifact_id}", actions_path(owner, repo)))
    }

    pub fn cache_usage(&self, owner: &str, repo: &str) -> GhrResult<CacheUsage> {
        self.client
            .get_typed(&format!("{}/cache/usage", actions_path(owner, repo)), &Params::new())
    }

    // --- Permissions ---

    pub fn enterprise_permissions(&self, enterprise: &str) -> GhrResult<ActionsPermissions> {
        self.client.get_typed(
            &format!("/enterprises/{enterprise}/actions/permissions"),
            &Params::new(),
        )
    }

    pub fn organization_permissions(&self, org: &str) -> GhrResult<ActionsPermissions> {
        self.client
            .get_typed(&format!("/orgs/{org}/actions/permissions"), &Params::new())
    }

    pub fn repository_permissions(&self, owner: &str, repo: &str) -> GhrResult<ActionsPermissions> {
        self.client
            .get_typed(&format!("{}/permissions", actions_path(owner, repo)), &Params::new())
    }

    /// Enable or disable Actions for a repository. `allowed_actions` is only
    /// sent when given.
    pub fn set_repository_permissions(
        &self,
        owner: &str,
        repo: &str,
        enabled: bool,
        allowed_actions: Option<AllowedActions>,
    ) -> bool {
        let params = Params::new()
            .with("enabled", enabled)
            .with_opt("allowed_actions", allowed_actions.map(|a| a.as_wire()));
        let path = format!("{}/permissions", actions_path(owner, repo));
        self.client.outcome_ok(&self.client.send_put(&path, &params))
    }

    // --- Secrets ---

    pub fn list_secrets(&self, owner: &str, repo: &str) -> GhrResult<SecretList> {
        self.client
            .get_typed(&format!("{}/secrets", actions_path(owner, repo)), &Params::new())
    }

    /// Key for encrypting secret values before upload.
    pub fn public_key(&self, owner: &str, repo: &str) -> GhrResult<PublicKey> {
        self.client.get_typed(
            &format!("{}/secrets/public-key", actions_path(owner, repo)),
            &Params::new(),
        )
    }

    pub fn delete_secret(&self, owner: &str, repo: &str, name: &str) -> bool {
        self.client
            .delete_ok(&format!("{}/secrets/{name}", actions_path(owner, repo)))
    }
}
