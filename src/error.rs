//! Error types for the site backend.

/// Configuration-related errors.
///
/// Missing credentials are not in here: they are logged at startup and
/// reported per-request as 500s, so only malformed values are fatal.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

/// Bot-verification failures.
///
/// The public lead endpoint collapses every variant to the same generic 403;
/// the variants exist so logs and tests can tell a bad token apart from an
/// unreachable verifier.
#[derive(Debug, thiserror::Error)]
pub enum VerifyError {
    #[error("Missing verification token")]
    MissingToken,

    #[error("Missing verification secret")]
    MissingSecret,

    #[error("Verifier unreachable: {0}")]
    Http(String),

    #[error("Verifier returned status {0}")]
    BadStatus(u16),

    #[error("Verification rejected: {error_codes:?}")]
    Rejected { error_codes: Vec<String> },
}

/// CRM contact-creation failures.
#[derive(Debug, thiserror::Error)]
pub enum CrmError {
    #[error("CRM request failed: {0}")]
    Http(String),

    #[error("Failed to forward lead to CRM: {status_text}")]
    Upstream { status: u16, status_text: String },
}

/// Media-upload failures.
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("Multipart encoding failed: {0}")]
    Encode(String),

    #[error("Media host unreachable: {0}")]
    Http(String),

    #[error("Upload failed: {status} - {detail}")]
    Upstream { status: u16, detail: String },

    #[error("Upload response contained no asset URL")]
    MissingUrl,
}

/// Content-repository failures, tagged by the pipeline step that failed.
///
/// The portfolio-save endpoint is operated by trusted admins, so these carry
/// the upstream payload for manual diagnosis.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error("Failed to fetch portfolio file: {detail}")]
    Fetch { status: Option<u16>, detail: String },

    #[error("File content is empty or too large to retrieve via API")]
    EmptyContent,

    #[error("Portfolio file content is not valid base64: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("Portfolio file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to commit portfolio file: {detail}")]
    Commit { status: Option<u16>, detail: String },
}

impl RepoError {
    /// Name of the failing pipeline step, surfaced in the error body.
    pub fn step(&self) -> &'static str {
        match self {
            RepoError::Fetch { .. } => "fetch",
            RepoError::EmptyContent | RepoError::Decode(_) | RepoError::Parse(_) => "parse",
            RepoError::Commit { .. } => "commit",
        }
    }

    /// Upstream payload, when the hosting API returned one.
    pub fn details(&self) -> String {
        match self {
            RepoError::Fetch { detail, .. } | RepoError::Commit { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}
