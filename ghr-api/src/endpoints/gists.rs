//! Gist endpoints.

use serde_json::{Map, Value};

use ghr_core::error::GhrResult;
use ghr_models::Gist;

use crate::client::ApiClient;
use crate::params::Params;

pub struct GistsManager<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn gists(&self) -> GistsManager<'_> {
        GistsManager { client: self }
    }
}

/// Body for creating or updating a gist.
///
/// `files` is sent keyed by file name: `{"hello.rs": {"content": "..."}}`.
pub fn gist_params(description: Option<&str>, public: Option<bool>, files: &[(&str, &str)]) -> Params {
    let files: Map<String, Value> = files
        .iter()
        .map(|(name, content)| (name.to_string(), serde_json::json!({ "content": content })))
        .collect();
    Params::new()
        .with_opt("description", description)
        .with_opt("public", public)
        .with("files", Value::Object(files))
}

impl GistsManager<'_> {
    pub fn get(&self, gist_id: &str) -> GhrResult<Gist> {
        self.client
            .get_typed(&format!("/gists/{gist_id}"), &Params::new())
    }

    /// Gists of the authenticated user (`since`, `per_page`, `page`).
    pub fn list(&self, params: &Params) -> GhrResult<Vec<Gist>> {
        self.client.get_typed_list("/gists", params)
    }

    /// See [`gist_params`].
    pub fn create(&self, params: &Params) -> GhrResult<Gist> {
        self.client.post_typed("/gists", params)
    }

    pub fn update(&self, gist_id: &str, params: &Params) -> GhrResult<Gist> {
        self.client.patch_typed(&format!("/gists/{gist_id}"), params)
    }

    pub fn delete(&self, gist_id: &str) -> bool {
        self.client.delete_ok(&format!("/gists/{gist_id}"))
    }

    pub fn star(&self, gist_id: &str) -> bool {
        let outcome = self.client.send_put_empty(&format!("/gists/{gist_id}/star"));
        self.client.outcome_ok(&outcome)
    }

    pub fn unstar(&self, gist_id: &str) -> bool {
        self.client.delete_ok(&format!("/gists/{gist_id}/star"))
    }

    pub fn is_starred(&self, gist_id: &str) -> bool {
        self.client.status_flag(&format!("/gists/{gist_id}/star"))
    }
}
