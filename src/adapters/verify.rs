//! Cloudflare Turnstile verification adapter.

use serde::Deserialize;

use crate::error::VerifyError;

/// Response body from the siteverify endpoint.
#[derive(Debug, Deserialize)]
struct SiteverifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

/// Calls the Turnstile siteverify endpoint.
///
/// Verification passes only when the transport succeeds and the verifier
/// reports `success: true`. No retry; a flaky verifier fails the request.
#[derive(Clone)]
pub struct TurnstileVerifier {
    client: reqwest::Client,
    base_url: String,
}

impl TurnstileVerifier {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Verify a client-supplied token against the server secret.
    ///
    /// Every failure mode comes back as a typed [`VerifyError`]; nothing
    /// panics and no transport error escapes this boundary.
    pub async fn verify(&self, token: &str, secret: &str) -> Result<(), VerifyError> {
        if token.is_empty() {
            return Err(VerifyError::MissingToken);
        }
        if secret.is_empty() {
            return Err(VerifyError::MissingSecret);
        }

        let response = self
            .client
            .post(format!("{}/turnstile/v0/siteverify", self.base_url))
            .form(&[("secret", secret), ("response", token)])
            .send()
            .await
            .map_err(|e| VerifyError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(VerifyError::BadStatus(status.as_u16()));
        }

        let body: SiteverifyResponse = response
            .json()
            .await
            .map_err(|e| VerifyError::Http(e.to_string()))?;

        if body.success {
            Ok(())
        } else {
            Err(VerifyError::Rejected {
                error_codes: body.error_codes,
            })
        }
    }
}
