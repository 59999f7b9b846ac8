//! Gitignore template model.

use serde::Serialize;
use serde_json::Value;

use ghr_core::error::GhrResult;

use crate::json::{self, FromJson};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GitignoreTemplate {
    pub name: String,
    pub source: String,
}

impl FromJson for GitignoreTemplate {
    fn from_json(value: &Value) -> GhrResult<Self> {
        json::ensure_object(value, "GitignoreTemplate")?;
        Ok(Self {
            name: json::required_str(value, "GitignoreTemplate", "name")?,
            source: json::str_field(value, "source"),
        })
    }
}

impl GitignoreTemplate {
    /// Non-empty, non-comment lines of the template.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.source
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_template_patterns() {
        let t = GitignoreTemplate::from_json(&json!({
            "name": "C",
            "source": "# Object files\n*.o\n\n# Libraries\n*.lib\n*.a\n"
        }))
        .unwrap();
        assert_eq!(t.patterns().collect::<Vec<_>>(), vec!["*.o", "*.lib", "*.a"]);
    }

    #[test]
    fn test_template_requires_name() {
        assert!(GitignoreTemplate::from_json(&json!({"source": ""})).is_err());
    }
}
