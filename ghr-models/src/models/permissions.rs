//! Actions permission policies for enterprises, organizations, and repositories.
//!
//! The three scopes share `allowed_actions` and `selected_actions_url` and
//! differ in one discriminant field. The payload is decoded once into the
//! matching variant:
//!
//! | field present            | variant        |
//! |--------------------------|----------------|
//! | `enabled_organizations`  | `Enterprise`   |
//! | `enabled_repositories`   | `Organization` |
//! | `enabled`                | `Repository`   |

use serde::Serialize;
use serde_json::Value;

use ghr_core::error::{GhrError, GhrResult};

use crate::json::{self, FromJson};

crate::wire_enum! {
    pub enum AllowedActions fallback All {
        All => "all",
        LocalOnly => "local_only",
        Selected => "selected",
    }
}

crate::wire_enum! {
    /// Which organizations (or repositories) may run Actions.
    pub enum EnabledScope fallback All {
        All => "all",
        None => "none",
        Selected => "selected",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ActionsPermissions {
    Enterprise {
        enabled_organizations: EnabledScope,
        allowed_actions: AllowedActions,
        #[serde(skip_serializing_if = "Option::is_none")]
        selected_actions_url: Option<String>,
    },
    Organization {
        enabled_repositories: EnabledScope,
        allowed_actions: AllowedActions,
        #[serde(skip_serializing_if = "Option::is_none")]
        selected_actions_url: Option<String>,
    },
    Repository {
        enabled: bool,
        allowed_actions: AllowedActions,
        #[serde(skip_serializing_if = "Option::is_none")]
        selected_actions_url: Option<String>,
    },
}

impl FromJson for ActionsPermissions {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "ActionsPermissions")?;

        let allowed_actions = json::enum_field(value, "allowed_actions");
        let selected_actions_url = json::opt_str(value, "selected_actions_url");

        if json::has_field(value, "enabled_organizations") {
            Ok(Self::Enterprise {
                enabled_organizations: json::enum_field(value, "enabled_organizations"),
                allowed_actions,
                selected_actions_url,
            })
        } else if json::has_field(value, "enabled_repositories") {
            Ok(Self::Organization {
                enabled_repositories: json::enum_field(value, "enabled_repositories"),
                allowed_actions,
                selected_actions_url,
            })
        } else if json::has_field(value, "enabled") {
            Ok(Self::Repository {
                enabled: json::bool_field(value, "enabled"),
                allowed_actions,
                selected_actions_url,
            })
        } else {
            Err(GhrError::MissingField {
                object: "ActionsPermissions",
                field: "enabled",
            })
        }
    }
}

impl ActionsPermissions {
    pub fn allowed_actions(&self) -> AllowedActions {
        match self {
            Self::Enterprise { allowed_actions, .. }
            | Self::Organization { allowed_actions, .. }
            | Self::Repository { allowed_actions, .. } => *allowed_actions,
        }
    }

    pub fn selected_actions_url(&self) -> Option<&str> {
        match self {
            Self::Enterprise { selected_actions_url, .. }
            | Self::Organization { selected_actions_url, .. }
            | Self::Repository { selected_actions_url, .. } => selected_actions_url.as_deref(),
        }
    }

    /// "enterprise", "organization" or "repository".
    pub fn scope(&self) -> &'static str {
        match self {
            Self::Enterprise { .. } => "enterprise",
            Self::Organization { .. } => "organization",
            Self::Repository { .. } => "repository",
        }
    }

    /// Whether Actions can run at all under this policy.
    pub fn is_enabled(&self) -> bool {
        match self {
            Self::Enterprise { enabled_organizations, .. } => *enabled_organizations != EnabledScope::None,
            Self::Organization { enabled_repositories, .. } => *enabled_repositories != EnabledScope::None,
            Self::Repository { enabled, .. } => *enabled,
        }
    }
}
