//! HTTP surface — router assembly and shared handler state.

use std::sync::Arc;

use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{Any, CorsLayer};

use crate::adapters::{CrmClient, MediaClient, RepoClient, TurnstileVerifier};
use crate::config::{Config, PORTFOLIO_FILE_PATH};

pub mod lead;
pub mod media;
pub mod portfolio;

/// Shared state for all handlers: the injected config plus one adapter per
/// upstream, all sharing a single HTTP client.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub verifier: TurnstileVerifier,
    pub crm: CrmClient,
    pub media: MediaClient,
    pub repo: RepoClient,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Self {
        let client = reqwest::Client::new();
        Self {
            verifier: TurnstileVerifier::new(client.clone(), config.turnstile_base_url.clone()),
            crm: CrmClient::new(client.clone(), config.crm_base_url.clone()),
            media: MediaClient::new(client.clone(), config.crm_base_url.clone()),
            repo: RepoClient::new(
                client,
                config.github_base_url.clone(),
                config.repo_owner.clone(),
                config.repo_name.clone(),
                PORTFOLIO_FILE_PATH,
            ),
            config,
        }
    }
}

/// Build the application router.
///
/// The media-upload route carries a permissive CORS layer (the admin UI may
/// be served from another origin); the preflight OPTIONS is answered by the
/// layer itself.
pub fn app(config: Arc<Config>) -> Router {
    let state = AppState::new(config);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let media_routes = Router::new()
        .route("/api/upload-portfolio", post(media::upload))
        .layer(cors);

    Router::new()
        .route("/health", get(health))
        .route("/api/lead", post(lead::submit_lead))
        .route("/api/save-project", post(portfolio::save_project))
        .merge(media_routes)
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Short `{error}` body used for every 4xx/5xx on the public endpoints.
pub(crate) fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
