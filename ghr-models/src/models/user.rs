//! Account and license models shared by most other resources.

use serde::Serialize;
use serde_json::Value;

use ghr_core::error::GhrResult;

use crate::json::{self, FromJson};

/// The abbreviated account object embedded as `owner`, `user`, `actor`, etc.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SimpleUser {
    pub login: String,
    pub id: i64,
    pub node_id: String,
    pub avatar_url: String,
    pub html_url: String,
    /// "User", "Organization" or "Bot".
    #[serde(rename = "type")]
    pub user_type: String,
    pub site_admin: bool,
    pub name: Option<String>,
    pub email: Option<String>,
}

impl FromJson for SimpleUser {
    /// Fails when `login` is absent: an account without a login cannot be
    /// addressed by any other endpoint.
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "SimpleUser")?;
        Ok(Self {
            login: json::required_str(value, "SimpleUser", "login")?,
            id: json::i64_field(value, "id"),
            node_id: json::str_field(value, "node_id"),
            avatar_url: json::str_field(value, "avatar_url"),
            html_url: json::str_field(value, "html_url"),
            user_type: json::str_field(value, "type"),
            site_admin: json::bool_field(value, "site_admin"),
            name: json::opt_str(value, "name"),
            email: json::opt_str(value, "email"),
        })
    }
}

impl SimpleUser {
    /// Account type, `User` when upstream omitted it.
    pub fn account_type(&self) -> &str {
        if self.user_type.is_empty() {
            "User"
        } else {
            &self.user_type
        }
    }

    pub fn is_organization(&self) -> bool {
        self.user_type == "Organization"
    }

    pub fn is_bot(&self) -> bool {
        self.user_type == "Bot"
    }
}

/// License summary attached to repositories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct License {
    pub key: String,
    pub name: String,
    pub spdx_id: Option<String>,
    pub url: Option<String>,
    pub node_id: String,
}

impl FromJson for License {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "License")?;
        Ok(Self {
            key: json::str_field(value, "key"),
            name: json::str_field(value, "name"),
            spdx_id: json::opt_str(value, "spdx_id"),
            url: json::opt_str(value, "url"),
            node_id: json::str_field(value, "node_id"),
        })
    }
}
