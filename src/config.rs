//! Configuration types.
//!
//! All secrets and upstream locations live in one `Config` built from the
//! environment at startup and injected into the router. Handlers check for
//! the credentials they need and answer 500 when one is absent, so a
//! misconfigured deploy fails per-request with a logged variable name
//! instead of crashing the whole service.

use secrecy::SecretString;

use crate::error::ConfigError;

/// Relative path of the portfolio JSON file within the content repository.
pub const PORTFOLIO_FILE_PATH: &str = "src/data/projects.json";

/// Runtime configuration for the backend.
#[derive(Debug, Clone)]
pub struct Config {
    /// Cloudflare Turnstile secret key (`TURNSTILE_SECRET_KEY`).
    pub turnstile_secret: Option<SecretString>,
    /// GoHighLevel bearer token (`HIGHLEVEL_TOKEN`, falling back to
    /// `VITE_HIGHLEVEL_TOKEN` as deployed alongside the frontend).
    pub crm_token: Option<SecretString>,
    /// GoHighLevel location id (`HIGHLEVEL_LOCATION_ID`).
    pub crm_location_id: Option<String>,
    /// GitHub token with write access to the content repository (`GITHUB_TOKEN`).
    pub github_token: Option<SecretString>,
    /// Content repository owner (`REPO_OWNER`).
    pub repo_owner: String,
    /// Content repository name (`REPO_NAME`).
    pub repo_name: String,
    /// Base URL of the Turnstile verifier.
    pub turnstile_base_url: String,
    /// Base URL of the GoHighLevel API (contacts and media upload).
    pub crm_base_url: String,
    /// Base URL of the GitHub API.
    pub github_base_url: String,
    /// Port the server binds on (`PORT`).
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            turnstile_secret: None,
            crm_token: None,
            crm_location_id: None,
            github_token: None,
            repo_owner: "mvalencia464".to_string(),
            repo_name: "deckmasters".to_string(),
            turnstile_base_url: "https://challenges.cloudflare.com".to_string(),
            crm_base_url: "https://services.leadconnectorhq.com".to_string(),
            github_base_url: "https://api.github.com".to_string(),
            port: 8787,
        }
    }
}

impl Config {
    /// Build a config from the environment.
    ///
    /// Missing credentials are logged and left unset rather than treated as
    /// fatal; the endpoints that need them return 500 per request. A
    /// malformed `PORT` is the only hard startup error.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let turnstile_secret = read_secret(&["TURNSTILE_SECRET_KEY"]);
        let crm_token = read_secret(&["HIGHLEVEL_TOKEN", "VITE_HIGHLEVEL_TOKEN"]);
        let crm_location_id = read_var("HIGHLEVEL_LOCATION_ID")
            .or_else(|| read_var("VITE_HIGHLEVEL_LOCATION_ID"));
        let github_token = read_secret(&["GITHUB_TOKEN"]);

        let port = match std::env::var("PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "PORT".to_string(),
                message: format!("not a valid port number: {raw}"),
            })?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            turnstile_secret,
            crm_token,
            crm_location_id,
            github_token,
            repo_owner: read_var("REPO_OWNER").unwrap_or(defaults.repo_owner),
            repo_name: read_var("REPO_NAME").unwrap_or(defaults.repo_name),
            turnstile_base_url: read_var("TURNSTILE_BASE_URL")
                .unwrap_or(defaults.turnstile_base_url),
            crm_base_url: read_var("HIGHLEVEL_BASE_URL").unwrap_or(defaults.crm_base_url),
            github_base_url: read_var("GITHUB_BASE_URL").unwrap_or(defaults.github_base_url),
            port,
        })
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

/// Read a secret from the first set variable in `names`, warning when none is.
fn read_secret(names: &[&str]) -> Option<SecretString> {
    match names.iter().find_map(|name| read_var(name)) {
        Some(value) => Some(SecretString::from(value)),
        None => {
            tracing::warn!(var = names[0], "environment variable not set");
            None
        }
    }
}
