//! Repository webhook models.

use serde::Serialize;
use serde_json::Value;

use ghr_core::error::GhrResult;

use crate::json::{self, FromJson};

/// Delivery configuration of a webhook.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookConfig {
    pub url: String,
    /// "json" or "form"; upstream treats empty as "form".
    pub content_type: String,
    /// Masked by the service on reads.
    pub secret: Option<String>,
    /// "1" skips certificate verification; "0" or empty verifies.
    pub insecure_ssl: String,
}

impl FromJson for WebhookConfig {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "WebhookConfig")?;
        Ok(Self {
            url: json::str_field(value, "url"),
            content_type: json::str_field(value, "content_type"),
            secret: json::opt_str(value, "secret"),
            insecure_ssl: json::str_or_number(value, "insecure_ssl"),
        })
    }
}

impl WebhookConfig {
    pub fn verifies_tls(&self) -> bool {
        self.insecure_ssl != "1"
    }

    pub fn sends_json(&self) -> bool {
        self.content_type == "json"
    }
}

/// Outcome of the most recent delivery.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookResponse {
    pub code: Option<i64>,
    pub status: String,
    pub message: Option<String>,
}

impl FromJson for WebhookResponse {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "WebhookResponse")?;
        Ok(Self {
            code: json::opt_i64(value, "code"),
            status: json::str_field(value, "status"),
            message: json::opt_str(value, "message"),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Webhook {
    pub id: i64,
    /// "web" for repository hooks.
    pub name: String,
    pub active: bool,
    pub events: Vec<String>,
    pub config: WebhookConfig,
    pub url: String,
    pub test_url: String,
    pub ping_url: String,
    pub last_response: WebhookResponse,
    pub created_at: String,
    pub updated_at: String,
}

impl FromJson for Webhook {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "Webhook")?;
        Ok(Self {
            id: json::required_i64(value, "Webhook", "id")?,
            name: json::str_field(value, "name"),
            active: json::bool_field(value, "active"),
            events: json::str_list(value, "events"),
            config: WebhookConfig::from_json(json::object_field(value, "config"))?,
            url: json::str_field(value, "url"),
            test_url: json::str_field(value, "test_url"),
            ping_url: json::str_field(value, "ping_url"),
            last_response: WebhookResponse::from_json(json::object_field(value, "last_response"))?,
            created_at: json::str_field(value, "created_at"),
            updated_at: json::str_field(value, "updated_at"),
        })
    }
}

impl Webhook {
    pub fn created_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.created_at)
    }

    pub fn updated_timestamp(&self) -> Option<i64> {
        json::timestamp_of(&self.updated_at)
    }

    pub fn subscribes_to(&self, event: &str) -> bool {
        self.events.iter().any(|e| e == event || e == "*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_webhook_from_json() {
        let v = json!({
            "type": "Repository",
            "id": 12345678,
            "name": "web",
            "active": true,
            "events": ["push", "pull_request"],
            "config": {"content_type": "json", "insecure_ssl": "0", "url": "https://example.com/webhook"},
            "updated_at": "2019-06-03T00:57:16Z",
            "created_at": "2019-06-03T00:57:16Z",
            "last_response": {"code": null, "status": "unused", "message": null}
        });
        let hook = Webhook::from_json(&v).unwrap();
        assert_eq!(hook.id, 12345678);
        assert!(hook.subscribes_to("push"));
        assert!(!hook.subscribes_to("issues"));
        assert!(hook.config.verifies_tls());
        assert_eq!(hook.last_response.code, None);
        assert_eq!(hook.created_timestamp(), hook.updated_timestamp());
    }

    #[test]
    fn test_numeric_insecure_ssl() {
        let config = WebhookConfig::from_json(&json!({"url": "u", "insecure_ssl": 1})).unwrap();
        assert_eq!(config.insecure_ssl, "1");
        assert!(!config.verifies_tls());
    }

    #[test]
    fn test_missing_nested_objects_default() {
        let hook = Webhook::from_json(&json!({"id": 1, "events": ["*"]})).unwrap();
        assert_eq!(hook.name, "");
        assert_eq!(hook.config, WebhookConfig::default());
        assert!(hook.config.verifies_tls());
        assert!(!hook.config.sends_json());
        assert_eq!(hook.last_response, WebhookResponse::default());
        assert!(hook.subscribes_to("anything"));
    }
}
