//! User endpoints.

use ghr_core::error::GhrResult;
use ghr_models::SimpleUser;

use crate::client::ApiClient;
use crate::params::Params;

pub struct UsersManager<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn users(&self) -> UsersManager<'_> {
        UsersManager { client: self }
    }
}

impl UsersManager<'_> {
    /// The user the token belongs to.
    pub fn authenticated(&self) -> GhrResult<SimpleUser> {
        self.client.get_typed("/user", &Params::new())
    }

    pub fn get(&self, username: &str) -> GhrResult<SimpleUser> {
        self.client.get_typed(&format!("/users/{username}"), &Params::new())
    }

    /// One page of followers (`per_page`, `page`).
    pub fn followers(&self, username: &str, params: &Params) -> GhrResult<Vec<SimpleUser>> {
        self.client
            .get_typed_list(&format!("/users/{username}/followers"), params)
    }
}
