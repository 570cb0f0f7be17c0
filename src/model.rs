//! Data types shared across endpoints.
//!
//! Field names are serialized camelCase to match the browser-side form
//! payloads and the portfolio JSON file checked into the content repository.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A prospective customer's contact submission from a website form.
///
/// Every field is optional: required-field validation lives in the browser
/// form, and the CRM accepts partial contacts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub message: Option<String>,
}

/// One image in a project gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A before/after case-study record shown in the site's project gallery.
///
/// `id` is assigned by the admin UI; uniqueness is a caller convention, not
/// enforced here. Unknown fields are carried through `extra` so a commit
/// round-trips whatever the admin UI sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub niche: String,
    pub location: String,
    pub description: String,
    pub before_image: String,
    pub after_image: String,
    #[serde(default)]
    pub gallery: Vec<ProjectImage>,
    pub date: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub testimonial: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}
