//! Wire models for the Webflow Data API v2.
//!
//! Only the fields the server renders are modeled; everything else in the
//! API payload is ignored on deserialization.

use serde::Deserialize;

/// A Webflow site.
///
/// The optional fields are genuinely absent for sites that were never
/// published or captured; callers render their own placeholder.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    pub id: String,
    pub display_name: String,
    pub short_name: String,
    pub workspace_id: String,
    pub created_on: Option<String>,
    pub last_published: Option<String>,
    pub preview_url: Option<String>,
}

/// A CMS collection belonging to a site.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub display_name: String,
    pub slug: String,
    pub created_on: Option<String>,
    pub last_updated: Option<String>,
}
