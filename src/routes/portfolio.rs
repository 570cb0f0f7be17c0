//! Portfolio-save endpoint — fetch the portfolio file, mutate, commit.
//!
//! Operated by trusted admins, so failures come back verbose: the failing
//! step, the repository slug, and the upstream payload when available.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use secrecy::ExposeSecret;
use serde::Deserialize;
use serde_json::Value;

use crate::error::RepoError;
use crate::model::Project;
use crate::routes::AppState;

/// Admin UI payload: either one new project to prepend, or a full
/// replacement array (the UI computes the desired end state client-side for
/// delete and reorder). `projects` wins when both are present.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    pub project: Option<Project>,
    pub projects: Option<Vec<Value>>,
    pub action: Option<String>,
}

#[derive(Debug, thiserror::Error)]
enum SaveError {
    #[error("Invalid request: Provide 'project' (to add) or 'projects' (to update).")]
    InvalidRequest,
    #[error(transparent)]
    Repo(#[from] RepoError),
}

impl SaveError {
    fn step(&self) -> &'static str {
        match self {
            SaveError::InvalidRequest => "validate",
            SaveError::Repo(e) => e.step(),
        }
    }

    fn details(&self) -> String {
        match self {
            SaveError::InvalidRequest => "No response data".to_string(),
            SaveError::Repo(e) => e.details(),
        }
    }
}

/// POST /api/save-project
pub async fn save_project(State(state): State<AppState>, Json(req): Json<SaveRequest>) -> Response {
    let Some(token) = state.config.github_token.as_ref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({
                "error": "Missing GITHUB_TOKEN environment variable",
            })),
        )
            .into_response();
    };

    match apply(&state, req, token.expose_secret()).await {
        Ok(()) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "message": "Changes saved to GitHub! Build triggered.",
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, step = e.step(), "portfolio save failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "error": e.to_string(),
                    "step": e.step(),
                    "repo": state.repo.slug(),
                    "details": e.details(),
                })),
            )
                .into_response()
        }
    }
}

/// Fetch, compute the new array, commit under the fetched sha.
///
/// No transaction across those steps: a concurrent edit between fetch and
/// commit makes GitHub reject the sha, and that rejection is surfaced to the
/// admin rather than retried.
async fn apply(state: &AppState, req: SaveRequest, token: &str) -> Result<(), SaveError> {
    let file = state.repo.fetch_portfolio(token).await?;

    let (updated, message) = match (req.projects, req.project) {
        // Full replacement: the given array is committed verbatim.
        (Some(projects), _) => {
            let message = if req.action.as_deref() == Some("delete") {
                "fix(portfolio): remove project via Admin UI".to_string()
            } else {
                "chore(portfolio): update project list via Admin UI".to_string()
            };
            (projects, message)
        }
        // Single add: prepend, most-recent-first.
        (None, Some(project)) => {
            let raw = file.content.ok_or(RepoError::EmptyContent)?;
            let current: Vec<Value> =
                serde_json::from_str(&raw).map_err(RepoError::from)?;
            let message = format!(
                "feat(portfolio): add new project \"{}\" via Admin UI",
                project.title
            );
            let mut updated =
                vec![serde_json::to_value(&project).map_err(RepoError::from)?];
            updated.extend(current);
            (updated, message)
        }
        (None, None) => return Err(SaveError::InvalidRequest),
    };

    state
        .repo
        .commit_portfolio(&updated, &file.sha, &message, token)
        .await?;
    Ok(())
}
