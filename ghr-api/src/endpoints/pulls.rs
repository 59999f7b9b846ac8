//! Pull request endpoints.

use ghr_core::error::GhrResult;
use ghr_models::{MergeResult, PullRequest};

use crate::client::ApiClient;
use crate::endpoints::repo_path;
use crate::params::Params;

pub struct PullsManager<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn pulls(&self) -> PullsManager<'_> {
        PullsManager { client: self }
    }
}

impl PullsManager<'_> {
    fn path(owner: &str, repo: &str, number: i64) -> String {
        format!("{}/pulls/{number}", repo_path(owner, repo))
    }

    pub fn get(&self, owner: &str, repo: &str, number: i64) -> GhrResult<PullRequest> {
        self.client
            .get_typed(&Self::path(owner, repo, number), &Params::new())
    }

    /// Pull requests of a repository (`state`, `head`, `base`, `sort`, `direction`).
    pub fn list(&self, owner: &str, repo: &str, params: &Params) -> GhrResult<Vec<PullRequest>> {
        self.client
            .get_typed_list(&format!("{}/pulls", repo_path(owner, repo)), params)
    }

    /// Open a pull request (`title`, `head` and `base` are required).
    pub fn create(&self, owner: &str, repo: &str, params: &Params) -> GhrResult<PullRequest> {
        self.client
            .post_typed(&format!("{}/pulls", repo_path(owner, repo)), params)
    }

    /// Merge a pull request (`commit_title`, `commit_message`, `sha`, `merge_method`).
    ///
    /// An unmergeable pull request comes back as `Api { status: 405, .. }`.
    pub fn merge(
        &self,
        owner: &str,
        repo: &str,
        number: i64,
        params: &Params,
    ) -> GhrResult<MergeResult> {
        self.client
            .put_typed(&format!("{}/merge", Self::path(owner, repo, number)), params)
    }

    pub fn is_merged(&self, owner: &str, repo: &str, number: i64) -> bool {
        self.client
            .status_flag(&format!("{}/merge", Self::path(owner, repo, number)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ghr_core::error::GhrError;
    use reqwest::Method;

    use crate::test_support::{client_with, ScriptedTransport};

    const PULL: &str = r#"{
        "id": 1,
        "number": 1347,
        "state": "open",
        "title": "Amazing new feature",
        "user": {"login": "octocat"},
        "head": {"label": "octocat:new-topic", "ref": "new-topic", "sha": "6dcb09b"},
        "base": {"label": "octocat:main", "ref": "main", "sha": "6dcb09b"},
        "merged_at": null
    }"#;

    #[test]
    fn test_get_pull() {
        let transport = ScriptedTransport::with(vec![(200, PULL)]);
        let pull = client_with(&transport)
            .pulls()
            .get("octocat", "Hello-World", 1347)
            .unwrap();
        assert_eq!(pull.head.ref_name, "new-topic");
        assert!(!pull.merged);
        assert_eq!(pull.mergeable_state, "");
    }

    #[test]
    fn test_list_and_create() {
        let page = format!("[{PULL}]");
        let transport = ScriptedTransport::with(vec![(200, page.as_str()), (201, PULL)]);
        let client = client_with(&transport);

        let pulls = client
            .pulls()
            .list("octocat", "Hello-World", &Params::new().with("state", "open"))
            .unwrap();
        assert_eq!(pulls.len(), 1);
        assert!(transport.last().url.ends_with("/pulls?state=open"));

        let params = Params::new()
            .with("title", "Amazing new feature")
            .with("head", "octocat:new-topic")
            .with("base", "main");
        client.pulls().create("octocat", "Hello-World", &params).unwrap();
        assert_eq!(transport.last().method, Method::POST);
    }

    #[test]
    fn test_merge() {
        let transport = ScriptedTransport::with(vec![
            (
                200,
                r#"{"sha":"6dcb09b5b57875f334f61aebed695e2e4193db5e","merged":true,"message":"Pull Request successfully merged"}"#,
            ),
            (405, r#"{"message":"Pull Request is not mergeable"}"#),
        ]);
        let client = client_with(&transport);
        let params = Params::new().with("merge_method", "squash");

        let result = client.pulls().merge("octocat", "Hello-World", 1347, &params).unwrap();
        assert!(result.merged);
        let req = transport.last();
        assert_eq!(req.method, Method::PUT);
        assert!(req.url.ends_with("/pulls/1347/merge"));

        let err = client
            .pulls()
            .merge("octocat", "Hello-World", 1347, &params)
            .unwrap_err();
        assert!(matches!(err, GhrError::Api { status: 405, ref message } if message == "Pull Request is not mergeable"));
    }

    #[test]
    fn test_is_merged() {
        let transport = ScriptedTransport::with(vec![(204, ""), (404, "")]);
        let client = client_with(&transport);
        assert!(client.pulls().is_merged("octocat", "Hello-World", 1));
        assert!(!client.pulls().is_merged("octocat", "Hello-World", 2));
    }
}
