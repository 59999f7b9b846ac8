//! Repository endpoints.

use ghr_core::error::GhrResult;
use ghr_models::Repository;

use crate::client::ApiClient;
use crate::endpoints::repo_path;
use crate::format::{Formatted, ReturnFormat};
use crate::params::Params;

pub struct ReposManager<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn repos(&self) -> ReposManager<'_> {
        ReposManager { client: self }
    }
}

impl ReposManager<'_> {
    pub fn get(&self, owner: &str, repo: &str) -> GhrResult<Repository> {
        self.client.get_typed(&repo_path(owner, repo), &Params::new())
    }

    /// Fetch a repository in the caller's chosen shape.
    pub fn fetch(
        &self,
        owner: &str,
        repo: &str,
        format: ReturnFormat,
    ) -> GhrResult<Formatted<Repository>> {
        self.client
            .get_formatted(&repo_path(owner, repo), &Params::new(), format)
    }

    /// Public repositories of a user (`type`, `sort`, `direction`, `per_page`, `page`).
    pub fn list_for_user(&self, username: &str, params: &Params) -> GhrResult<Vec<Repository>> {
        self.client
            .get_typed_list(&format!("/users/{username}/repos"), params)
    }

    /// Create a repository for the authenticated user (`name` is required).
    pub fn create(&self, params: &Params) -> GhrResult<Repository> {
        self.client.post_typed("/user/repos", params)
    }

    pub fn update(&self, owner: &str, repo: &str, params: &Params) -> GhrResult<Repository> {
        self.client.patch_typed(&repo_path(owner, repo), params)
    }

    pub fn delete(&self, owner: &str, repo: &str) -> bool {
        self.client.delete_ok(&repo_path(owner, repo))
    }
}
