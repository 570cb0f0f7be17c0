//! GoHighLevel CRM adapter — forwards leads as contact records.

use crate::error::CrmError;
use crate::model::Lead;

/// API version header required by the GoHighLevel v2 API.
const GHL_API_VERSION: &str = "2021-07-28";

/// Creates contacts in the GoHighLevel CRM.
#[derive(Clone)]
pub struct CrmClient {
    client: reqwest::Client,
    base_url: String,
}

impl CrmClient {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Map a lead into the CRM's contact schema.
    ///
    /// Missing fields are forwarded as empty strings (the CRM treats them as
    /// unset); a free-text message becomes a single custom-field entry.
    fn contact_payload(lead: &Lead, location_id: &str) -> serde_json::Value {
        let custom_fields = match &lead.message {
            Some(message) if !message.is_empty() => {
                serde_json::json!([{"id": "message", "value": message}])
            }
            _ => serde_json::json!([]),
        };

        serde_json::json!({
            "firstName": lead.first_name.as_deref().unwrap_or(""),
            "lastName": lead.last_name.as_deref().unwrap_or(""),
            "email": lead.email.as_deref().unwrap_or(""),
            "phone": lead.phone.as_deref().unwrap_or(""),
            "address1": lead.address.as_deref().unwrap_or(""),
            "locationId": location_id,
            "customFields": custom_fields,
        })
    }

    /// Create a contact for the lead. No retry; a transient CRM outage is a
    /// lost lead from the server's perspective.
    pub async fn create_contact(
        &self,
        lead: &Lead,
        token: &str,
        location_id: &str,
    ) -> Result<(), CrmError> {
        let payload = Self::contact_payload(lead, location_id);

        let response = self
            .client
            .post(format!("{}/contacts/", self.base_url))
            .bearer_auth(token)
            .header("Version", GHL_API_VERSION)
            .json(&payload)
            .send()
            .await
            .map_err(|e| CrmError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), %error_text, "CRM rejected contact");
            return Err(CrmError::Upstream {
                status: status.as_u16(),
                status_text: status
                    .canonical_reason()
                    .unwrap_or("Unknown Error")
                    .to_string(),
            });
        }

        Ok(())
    }
}
