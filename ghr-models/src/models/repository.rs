//! Repository entity model.

use serde::Serialize;
use serde_json::Value;

use ghr_core::error::GhrResult;

use super::user::{License, SimpleUser};
use crate::json::{self, FromJson};

crate::wire_enum! {
    /// Repository visibility. Absent on older payloads, where `private` decides.
    pub enum Visibility fallback Public {
        Public => "public",
        Private => "private",
        Internal => "internal",
    }
}

/// The authenticated caller's permissions on a repository.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryPermissions {
    pub admin: bool,
    pub maintain: bool,
    pub push: bool,
    pub triage: bool,
    pub pull: bool,
}

impl FromJson for RepositoryPermissions {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "RepositoryPermissions")?;
        Ok(Self {
            admin: json::bool_field(value, "admin"),
            maintain: json::bool_field(value, "maintain"),
            push: json::bool_field(value, "push"),
            triage: json::bool_field(value, "triage"),
            pull: json::bool_field(value, "pull"),
        })
    }
}

/// A repository as returned by `GET /repos/{owner}/{repo}` and the list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Repository {
    pub id: i64,
    pub node_id: String,
    pub name: String,
    pub full_name: String,
    pub owner: SimpleUser,
    pub private: bool,
    pub visibility: Visibility,
    pub html_url: String,
    pub url: String,
    pub clone_url: String,
    pub description: Option<String>,
    pub homepage: Option<String>,
    pub language: Option<String>,
    pub fork: bool,
    pub archived: bool,
    pub disabled: bool,
    pub default_branch: String,
    pub topics: Vec<String>,
    pub forks_count: i64,
    pub stargazers_count: i64,
    pub watchers_count: i64,
    pub open_issues_count: i64,
    /// Size in kilobytes.
    pub size: i64,
    pub license: Option<License>,
    pub permissions: RepositoryPermissions,
    pub created_at: String,
    pub updated_at: String,
    pub pushed_at: String,
}

impl FromJson for Repository {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "Repository")?;

        let private = json::bool_field(value, "private");
        let visibility = if json::has_field(value, "visibility") {
            json::enum_field(value, "visibility")
        } else if private {
            Visibility::Private
        } else {
            Visibility::Public
        };

        Ok(Self {
            id: json::i64_field(value, "id"),
            node_id: json::str_field(value, "node_id"),
            name: json::str_field(value, "name"),
            full_name: json::str_field(value, "full_name"),
            owner: SimpleUser::from_json(json::object_field(value, "owner"))?,
            private,
            visibility,
            html_url: json::str_field(value, "html_url"),
            url: json::str_field(value, "url"),
            clone_url: json::str_field(value, "clone_url"),
            description: json::opt_str(value, "description"),
            homepage: json::opt_str(value, "homepage"),
            language: json::opt_str(value, "language"),
            fork: json::bool_field(value, "fork"),
            archived: json::bool_field(value, "archived"),
            disabled: json::bool_field(value, "disabled"),
            default_branch: json::str_field(value, "default_branch"),
            topics: json::str_list(value, "topics"),
            forks_count: json::i64_field(value, "forks_count"),
            stargazers_count: json::i64_field(value, "stargazers_count"),
            watchers_count: json::i64_field(value, "watchers_count"),
            open_issues_count: json::i64_field(value, "open_issues_count"),
            size: json::i64_field(value, "size"),
            license: json::opt_object(value, "license")?,
            permissions: RepositoryPermissions::from_json(json::object_field(value, "permissions"))?,
            created_at: json::str_field(value, "created_at"),
            updated_at: json::str_field(value, "updated_at"),
            pushed_at: json::str_field(value, "pushed_at"),
        })
    }
}

impl Repository {
    pub fn created_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.created_at)
    }

    pub fn updated_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.updated_at)
    }

    pub fn pushed_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.pushed_at)
    }

    /// Default branch, `main` when upstream omitted it.
    pub fn default_branch_or_main(&self) -> &str {
        if self.default_branch.is_empty() {
            "main"
        } else {
            &self.default_branch
        }
    }

    /// `owner/name`, derived when `full_name` was not supplied.
    pub fn slug(&self) -> String {
        if self.full_name.is_empty() {
            format!("{}/{}", self.owner.login, self.name)
        } else {
            self.full_name.clone()
        }
    }
}
