//! GoHighLevel media-host adapter — uploads files via multipart POST.

use std::sync::Arc;

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::error::MediaError;

const GHL_API_VERSION: &str = "2021-07-28";

/// Builds the multipart form for an upload, keeping the choice of HTTP
/// client's form machinery out of [`MediaClient`]'s contract.
pub trait MultipartEncoder: Send + Sync {
    fn encode(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        mime_type: &str,
    ) -> Result<Form, MediaError>;
}

/// Default encoder backed by `reqwest::multipart`.
pub struct ReqwestEncoder;

impl MultipartEncoder for ReqwestEncoder {
    fn encode(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        mime_type: &str,
    ) -> Result<Form, MediaError> {
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type)
            .map_err(|e| MediaError::Encode(e.to_string()))?;
        Ok(Form::new().part("file", part))
    }
}

/// The upload result: the hosted URL plus the raw upstream response, which
/// the endpoint echoes back to the admin UI as `meta`.
#[derive(Debug)]
pub struct UploadedAsset {
    pub url: String,
    pub meta: Value,
}

/// Uploads files to the GoHighLevel media host.
#[derive(Clone)]
pub struct MediaClient {
    client: reqwest::Client,
    base_url: String,
    encoder: Arc<dyn MultipartEncoder>,
}

impl MediaClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self::with_encoder(client, base_url, Arc::new(ReqwestEncoder))
    }

    pub fn with_encoder(
        client: reqwest::Client,
        base_url: impl Into<String>,
        encoder: Arc<dyn MultipartEncoder>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            encoder,
        }
    }

    /// Upload a file and return the hosted URL.
    ///
    /// The media host has shipped the URL under both `url` and `fileUrl`
    /// depending on API revision; both are accepted.
    pub async fn upload(
        &self,
        bytes: Vec<u8>,
        file_name: &str,
        mime_type: &str,
        token: &str,
    ) -> Result<UploadedAsset, MediaError> {
        let form = self.encoder.encode(bytes, file_name, mime_type)?;

        tracing::info!(file_name, mime_type, "uploading file to media host");

        let response = self
            .client
            .post(format!("{}/medias/upload-file", self.base_url))
            .bearer_auth(token)
            .header("Version", GHL_API_VERSION)
            .multipart(form)
            .send()
            .await
            .map_err(|e| MediaError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(MediaError::Upstream {
                status: status.as_u16(),
                detail,
            });
        }

        let meta: Value = response
            .json()
            .await
            .map_err(|e| MediaError::Http(e.to_string()))?;

        let url = meta["url"]
            .as_str()
            .or_else(|| meta["fileUrl"].as_str())
            .ok_or(MediaError::MissingUrl)?
            .to_string();

        Ok(UploadedAsset { url, meta })
    }
}
