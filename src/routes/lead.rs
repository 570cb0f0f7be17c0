//! Lead-intake endpoint — Turnstile verification, then CRM forwarding.
//!
//! This is the public pipeline: every upstream failure collapses to a short
//! generic message (at most the CRM status text), with the real reason going
//! to the server log. No retries and no queuing; a transient CRM outage is a
//! lost lead from the server's perspective.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::error::CrmError;
use crate::model::Lead;
use crate::routes::{error_response, AppState};

/// Browser form payload: the lead fields plus the Turnstile widget's token.
#[derive(Debug, Deserialize)]
pub struct LeadRequest {
    #[serde(flatten)]
    pub lead: Lead,
    #[serde(rename = "cf-turnstile-response")]
    pub turnstile_token: Option<String>,
}

/// POST /api/lead
pub async fn submit_lead(
    State(state): State<AppState>,
    Json(req): Json<LeadRequest>,
) -> Response {
    let Some(token) = req.turnstile_token.as_deref().filter(|t| !t.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing Turnstile token");
    };

    let Some(secret) = state.config.turnstile_secret.as_ref() else {
        tracing::error!("configuration error: TURNSTILE_SECRET_KEY is missing");
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error",
        );
    };

    if let Err(reason) = state.verifier.verify(token, secret.expose_secret()).await {
        let token_prefix: String = token.chars().take(10).collect();
        tracing::warn!(%reason, %token_prefix, "Turnstile verification failed");
        return error_response(
            StatusCode::FORBIDDEN,
            "Security verification failed. Please try again.",
        );
    }

    let (Some(crm_token), Some(location_id)) = (
        state.config.crm_token.as_ref(),
        state.config.crm_location_id.as_ref(),
    ) else {
        tracing::error!("configuration error: HIGHLEVEL_TOKEN or HIGHLEVEL_LOCATION_ID is missing");
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error",
        );
    };

    match state
        .crm
        .create_contact(&req.lead, crm_token.expose_secret(), location_id)
        .await
    {
        Ok(()) => {
            tracing::info!("lead processed");
            (
                StatusCode::OK,
                Json(serde_json::json!({
                    "success": true,
                    "message": "Lead processed successfully",
                })),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "CRM forwarding failed");
            // Surface the CRM status text for diagnostics, but keep
            // transport errors generic for the public caller.
            let message = match &e {
                CrmError::Upstream { .. } => e.to_string(),
                CrmError::Http(_) => "Failed to process lead.".to_string(),
            };
            error_response(StatusCode::INTERNAL_SERVER_ERROR, &message)
        }
    }
}
