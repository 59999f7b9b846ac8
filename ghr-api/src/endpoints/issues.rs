//! Issue and issue comment endpoints.

use serde::Serialize;

use ghr_core::error::GhrResult;
use ghr_models::{Issue, IssueComment};

use crate::client::ApiClient;
use crate::endpoints::repo_path;
use crate::params::Params;

/// Filters for listing repository issues.
#[derive(Debug, Clone, Default, Serialize)]
pub struct IssueQuery {
    /// "open", "closed" or "all".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Comma-separated label names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
    /// "created", "updated" or "comments".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub since: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl IssueQuery {
    pub fn to_params(&self) -> GhrResult<Params> {
        Params::from_serialize(self)
    }
}

pub struct IssuesManager<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn issues(&self) -> IssuesManager<'_> {
        IssuesManager { client: self }
    }
}

impl IssuesManager<'_> {
    pub fn get(&self, owner: &str, repo: &str, number: i64) -> GhrResult<Issue> {
        self.client.get_typed(
            &format!("{}/issues/{number}", repo_path(owner, repo)),
            &Params::new(),
        )
    }

    /// Issues of a repository. Pull requests are included upstream;
    /// see [`Issue::is_pull_request`].
    pub fn list(&self, owner: &str, repo: &str, params: &Params) -> GhrResult<Vec<Issue>> {
        self.client
            .get_typed_list(&format!("{}/issues", repo_path(owner, repo)), params)
    }

    /// Create an issue (`title` is required).
    pub fn create(&self, owner: &str, repo: &str, params: &Params) -> GhrResult<Issue> {
        self.client
            .post_typed(&format!("{}/issues", repo_path(owner, repo)), params)
    }

    pub fn update(&self, owner: &str, repo: &str, number: i64, params: &Params) -> GhrResult<Issue> {
        self.client.patch_typed(
            &format!("{}/issues/{number}", repo_path(owner, repo)),
            params,
        )
    }

    pub fn list_comments(
        &self,
        owner: &str,
        repo: &str,
        number: i64,
        params: &Params,
    ) -> GhrResult<Vec<IssueComment>> {
        self.client.get_typed_list(
            &format!("{}/issues/{number}/comments", repo_path(owner, repo)),
            params,
        )
    }

    pub fn create_comment(
        &self,
        owner: &str,
        repo: &str,
        number: i64,
        body: &str,
    ) -> GhrResult<IssueComment> {
        self.client.post_typed(
            &format!("{}/issues/{number}/comments", repo_path(owner, repo)),
            &Params::new().with("body", body),
        )
    }

    pub fn delete_comment(&self, owner: &str, repo: &str, comment_id: i64) -> bool {
        self.client
            .delete_ok(&format!("{}/issues/comments/{comment_id}", repo_path(owner, repo)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghr_models::IssueState;
    use reqwest::Method;

    use crate::test_support::{client_with, ScriptedTransport};

    const ISSUE: &str = r#"{
        "id": 1,
        "number": 1347,
        "title": "Found a bug",
        "state": "open",
        "user": {"login": "octocat"},
        "labels": [{"id": 208045946, "name": "bug", "color": "f29513"}],
        "comments": 0
    }"#;

    #[test]
    fn test_issue_query_params() {
        let query = IssueQuery {
            state: Some("all".into()),
            labels: vec!["bug".into(), "ui".into()],
            per_page: Some(100),
            ..Default::default()
        };
        assert_eq!(
            query.to_params().unwrap().to_query_string(),
            "?state=all&labels=bug,ui&per_page=100"
        );
        assert!(IssueQuery::default().to_params().unwrap().is_empty());
    }

    #[test]
    fn test_get_issue() {
        let transport = ScriptedTransport::with(vec![(200, ISSUE)]);
        let issue = client_with(&transport)
            .issues()
            .get("octocat", "Hello-World", 1347)
            .unwrap();
        assert_eq!(issue.state, IssueState::Open);
        assert!(issue.has_label("bug"));
        assert!(transport.last().url.ends_with("/repos/octocat/Hello-World/issues/1347"));
    }

    #[test]
    fn test_list_with_filters() {
        let page = format!("[{ISSUE}]");
        let transport = ScriptedTransport::with(vec![(200, page.as_str())]);
        let params = IssueQuery {
            state: Some("open".into()),
            page: Some(2),
            ..Default::default()
        }
        .to_params()
        .unwrap();
        let issues = client_with(&transport)
            .issues()
            .list("octocat", "Hello-World", &params)
            .unwrap();
        assert_eq!(issues.len(), 1);
        assert!(transport.last().url.ends_with("/issues?state=open&page=2"));
    }

    #[test]
    fn test_create_and_close() {
        let closed = ISSUE.replace(r#""state": "open""#, r#""state": "closed""#);
        let transport = ScriptedTransport::with(vec![(201, ISSUE), (200, closed.as_str())]);
        let client = client_with(&transport);

        let params = Params::new()
            .with("title", "Found a bug")
            .with("labels", serde_json::json!(["bug"]));
        let issue = client.issues().create("octocat", "Hello-World", &params).unwrap();
        assert_eq!(issue.number, 1347);
        assert_eq!(
            transport.last().body.as_deref(),
            Some(r#"{"title":"Found a bug","labels":["bug"]}"#)
        );

        let issue = client
            .issues()
            .update("octocat", "Hello-World", 1347, &Params::new().with("state", "closed"))
            .unwrap();
        assert_eq!(issue.state, IssueState::Closed);
        assert_eq!(transport.last().method, Method::PATCH);
    }

    #[test]
    fn test_comments() {
        let comment = r#"{"id": 1, "body": "Me too", "user": {"login": "octocat"}, "created_at": "2011-04-14T16:00:49Z"}"#;
        let page = format!("[{comment}]");
        let transport = ScriptedTransport::with(vec![(200, page.as_str()), (201, comment), (204, "")]);
        let client = client_with(&transport);

        let comments = client
            .issues()
            .list_comments("octocat", "Hello-World", 1347, &Params::new())
            .unwrap();
        assert_eq!(comments[0].body, "Me too");
        assert_eq!(comments[0].association(), "NONE");

        let created = client
            .issues()
            .create_comment("octocat", "Hello-World", 1347, "Me too")
            .unwrap();
        assert_eq!(created.id, 1);
        assert_eq!(transport.last().body.as_deref(), Some(r#"{"body":"Me too"}"#));

        assert!(client.issues().delete_comment("octocat", "Hello-World", 1));
        assert!(transport
            .last()
            .url
            .ends_with("/repos/octocat/Hello-World/issues/comments/1"));
    }
}
