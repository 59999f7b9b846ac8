//! Repository webhook endpoints.

use serde_json::json;

use ghr_core::error::GhrResult;
use ghr_models::Webhook;

use crate::client::ApiClient;
use crate::endpoints::repo_path;
use crate::params::Params;

pub struct WebhooksManager<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn webhooks(&self) -> WebhooksManager<'_> {
        WebhooksManager { client: self }
    }
}

/// Body for creating a `web` hook delivering JSON payloads to `url`.
pub fn hook_params(url: &str, events: &[&str], secret: Option<&str>) -> Params {
    let mut config = json!({ "url": url, "content_type": "json", "insecure_ssl": "0" });
    if let Some(secret) = secret {
        config["secret"] = json!(secret);
    }
    Params::new()
        .with("name", "web")
        .with("active", true)
        .with("events", json!(events))
        .with("config", config)
}

impl WebhooksManager<'_> {
    fn hooks_path(owner: &str, repo: &str) -> String {
        format!("{}/hooks", repo_path(owner, repo))
    }

    pub fn list(&self, owner: &str, repo: &str) -> GhrResult<Vec<Webhook>> {
        self.client
            .get_typed_list(&Self::hooks_path(owner, repo), &Params::new())
    }

    pub fn get(&self, owner: &str, repo: &str, hook_id: i64) -> GhrResult<Webhook> {
        self.client.get_typed(
            &format!("{}/{hook_id}", Self::hooks_path(owner, repo)),
            &Params::new(),
        )
    }

    /// See [`hook_params`].
    pub fn create(&self, owner: &str, repo: &str, params: &Params) -> GhrResult<Webhook> {
        self.client
            .post_typed(&Self::hooks_path(owner, repo), params)
    }

    pub fn update(&self, owner: &str, repo: &str, hook_id: i64, params: &Params) -> GhrResult<Webhook> {
        self.client.patch_typed(
            &format!("{}/{hook_id}", Self::hooks_path(owner, repo)),
            params,
        )
    }

    pub fn delete(&self, owner: &str, repo: &str, hook_id: i64) -> bool {
        self.client
            .delete_ok(&format!("{}/{hook_id}", Self::hooks_path(owner, repo)))
    }

    /// Trigger a `ping` delivery.
    pub fn ping(&self, owner: &str, repo: &str, hook_id: i64) -> bool {
        let path = format!("{}/{hook_id}/pings", Self::hooks_path(owner, repo));
        self.client.outcome_ok(&self.client.send_post_empty(&path))
    }
}
