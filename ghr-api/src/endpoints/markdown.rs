//! Markdown rendering. The response is HTML, not JSON.

use ghr_core::error::GhrResult;

use crate::client::ApiClient;
use crate::params::Params;

/// Rendering flavour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    #[default]
    Markdown,
    /// GitHub Flavored Markdown; links issues and mentions relative to `context`.
    Gfm,
}

impl RenderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RenderMode::Markdown => "markdown",
            RenderMode::Gfm => "gfm",
        }
    }
}

pub struct MarkdownManager<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn markdown(&self) -> MarkdownManager<'_> {
        MarkdownManager { client: self }
    }
}

impl MarkdownManager<'_> {
    /// Render `text` to HTML. `context` (`owner/repo`) only applies in
    /// [`RenderMode::Gfm`].
    pub fn render(&self, text: &str, mode: RenderMode, context: Option<&str>) -> GhrResult<String> {
        let params = Params::new()
            .with("text", text)
            .with("mode", mode.as_str())
            .with_opt("context", context.filter(|_| mode == RenderMode::Gfm));
        self.client.post_raw("/markdown", &params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_support::{client_with, ScriptedTransport};

    #[test]
    fn test_render_returns_html_text() {
        let html = "<p>Hello <strong>world</strong> <a href=\"https://github.com/octo-org/octo-repo/issues/2\">#2</a></p>\n";
        let transport = ScriptedTransport::with(vec![(200, html)]);
        let out = client_with(&transport)
            .markdown()
            .render("Hello **world** #2", RenderMode::Gfm, Some("octo-org/octo-repo"))
            .unwrap();
        assert_eq!(out, html);

        let req = transport.last();
        assert!(req.url.ends_with("/markdown"));
        assert_eq!(
            req.body.as_deref(),
            Some(r#"{"text":"Hello **world** #2","mode":"gfm","context":"octo-org/octo-repo"}"#)
        );
    }

    #[test]
    fn test_context_dropped_outside_gfm() {
        let transport = ScriptedTransport::with(vec![(200, "<p>x</p>")]);
        client_with(&transport)
            .markdown()
            .render("x", RenderMode::Markdown, Some("octo-org/octo-repo"))
            .unwrap();
        assert_eq!(
            transport.last().body.as_deref(),
            Some(r#"{"text":"x","mode":"markdown"}"#)
        );
    }
}
