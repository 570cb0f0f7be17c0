//! Content-repository adapter — reads and commits the portfolio JSON file
//! through the GitHub contents API.
//!
//! There is no transaction across fetch and commit. The commit carries the
//! sha obtained at fetch time; if the file changed in between, GitHub
//! rejects the write and the conflict is surfaced to the caller. That
//! revision check is the only consistency guarantee in the pipeline.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::Deserialize;
use serde_json::Value;

use crate::error::RepoError;

/// Committer identity stamped on portfolio commits.
const COMMITTER_NAME: &str = "Deck Masters Portfolio Bot";
const COMMITTER_EMAIL: &str = "bot@deckmasters.com";

/// Raw contents-API response for a file read.
#[derive(Debug, Deserialize)]
struct ContentsResponse {
    #[serde(default)]
    content: Option<String>,
    sha: String,
}

/// The portfolio file's decoded content plus the sha revision marker the
/// hosting API requires to permit a write. Re-fetched before every commit.
///
/// `content` is `None` when the contents API returned nothing inline (empty
/// file, or too large to retrieve). Full-array replacement only needs the
/// sha, so that is not an error here.
#[derive(Debug)]
pub struct FileState {
    pub content: Option<String>,
    pub sha: String,
}

/// GitHub contents API client scoped to one repository file.
#[derive(Clone)]
pub struct RepoClient {
    client: reqwest::Client,
    base_url: String,
    owner: String,
    repo: String,
    path: String,
}

impl RepoClient {
    pub fn new(
        client: reqwest::Client,
        base_url: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            owner: owner.into(),
            repo: repo.into(),
            path: path.into(),
        }
    }

    /// `owner/name` slug, surfaced in operator-facing error bodies.
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    fn contents_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.base_url, self.owner, self.repo, self.path
        )
    }

    /// Fetch the current file content and its sha revision marker.
    pub async fn fetch_portfolio(&self, token: &str) -> Result<FileState, RepoError> {
        let response = self
            .client
            .get(self.contents_url())
            .bearer_auth(token)
            .header(reqwest::header::USER_AGENT, "deckmasters-api")
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| RepoError::Fetch {
                status: None,
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(RepoError::Fetch {
                status: Some(status.as_u16()),
                detail,
            });
        }

        let body: ContentsResponse = response.json().await.map_err(|e| RepoError::Fetch {
            status: None,
            detail: e.to_string(),
        })?;

        let content = match body.content.filter(|c| !c.is_empty()) {
            Some(encoded) => {
                // The contents API wraps base64 at 60 columns; strip the
                // newlines before decoding.
                let cleaned: String = encoded.split_whitespace().collect();
                let bytes = BASE64.decode(cleaned)?;
                Some(String::from_utf8_lossy(&bytes).into_owned())
            }
            None => None,
        };

        tracing::info!(sha = %body.sha, repo = %self.slug(), "fetched portfolio file");

        Ok(FileState {
            content,
            sha: body.sha,
        })
    }

    /// Commit a replacement portfolio array under the given sha.
    ///
    /// The array is serialized exactly as given; no shape validation happens
    /// here. A stale sha comes back as a `commit` error carrying GitHub's
    /// conflict payload.
    pub async fn commit_portfolio(
        &self,
        projects: &[Value],
        sha: &str,
        message: &str,
        token: &str,
    ) -> Result<(), RepoError> {
        // A serialization failure here belongs to the commit step, not the
        // parse step `RepoError::Parse` reports.
        let pretty = serde_json::to_string_pretty(projects).map_err(|e| RepoError::Commit {
            status: None,
            detail: e.to_string(),
        })?;
        let payload = serde_json::json!({
            "message": message,
            "content": BASE64.encode(pretty.as_bytes()),
            "sha": sha,
            "committer": {
                "name": COMMITTER_NAME,
                "email": COMMITTER_EMAIL,
            },
        });

        let response = self
            .client
            .put(self.contents_url())
            .bearer_auth(token)
            .header(reqwest::header::USER_AGENT, "deckmasters-api")
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| RepoError::Commit {
                status: None,
                detail: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(RepoError::Commit {
                status: Some(status.as_u16()),
                detail,
            });
        }

        tracing::info!(%message, repo = %self.slug(), "committed portfolio file");
        Ok(())
    }
}
