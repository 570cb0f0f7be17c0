//! Media-upload endpoint — base64 payload in, hosted URL out.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::routes::{error_response, AppState};

/// Admin UI payload: one file, base64-encoded.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadRequest {
    pub file_data: Option<String>,
    pub file_name: Option<String>,
    pub mime_type: Option<String>,
}

/// POST /api/upload-portfolio
///
/// Multi-file uploads arrive as sequential per-file calls from the browser;
/// nothing is batched here.
pub async fn upload(State(state): State<AppState>, Json(req): Json<UploadRequest>) -> Response {
    let (Some(file_data), Some(file_name), Some(mime_type)) = (
        req.file_data.as_deref().filter(|v| !v.is_empty()),
        req.file_name.as_deref().filter(|v| !v.is_empty()),
        req.mime_type.as_deref().filter(|v| !v.is_empty()),
    ) else {
        return error_response(StatusCode::BAD_REQUEST, "Missing file data, name, or type");
    };

    let Some(token) = state.config.crm_token.as_ref() else {
        tracing::error!("configuration error: HIGHLEVEL_TOKEN is missing");
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Server configuration error: Missing GHL credentials",
        );
    };

    let bytes = match BASE64.decode(file_data) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, file_name, "rejected upload with invalid base64 payload");
            return error_response(StatusCode::BAD_REQUEST, "Invalid base64 file data");
        }
    };

    match state
        .media
        .upload(bytes, file_name, mime_type, token.expose_secret())
        .await
    {
        Ok(asset) => (
            StatusCode::OK,
            Json(serde_json::json!({
                "success": true,
                "url": asset.url,
                "meta": asset.meta,
            })),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(error = %e, file_name, "media upload failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "success": false,
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
