//! Gitignore template endpoints.

use ghr_core::error::{GhrError, GhrResult};
use ghr_models::GitignoreTemplate;

use crate::client::ApiClient;
use crate::params::Params;

pub struct GitignoreManager<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn gitignore(&self) -> GitignoreManager<'_> {
        GitignoreManager { client: self }
    }
}

impl GitignoreManager<'_> {
    /// Names of all templates. The payload is a bare array of strings.
    pub fn templates(&self) -> GhrResult<Vec<String>> {
        let resp = ApiClient::check_status(self.client.send_get("/gitignore/templates")?)?;
        let tree = resp.json()?;
        let items = tree
            .as_array()
            .ok_or_else(|| GhrError::Serialization("expected a JSON array of template names".into()))?;
        items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    GhrError::Serialization(format!("template name is not a string: {item}"))
                })
            })
            .collect()
    }

    pub fn template(&self, name: &str) -> GhrResult<GitignoreTemplate> {
        self.client
            .get_typed(&format!("/gitignore/templates/{name}"), &Params::new())
    }
}
