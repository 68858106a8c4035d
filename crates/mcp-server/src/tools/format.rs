//! Text rendering for tool responses.
//!
//! Every function here is pure: the same records produce the same text, and
//! record order is preserved exactly as the API returned it. Absent optional
//! fields render as the `N/A` sentinel rather than being omitted, so the
//! block layout is identical for every record.

use webflow_client::{Collection, Site};

use super::schemas::test_connection::TestConnectionRequest;

const NOT_AVAILABLE: &str = "N/A";

pub(super) const NO_SITES: &str = "No sites found for this account.";
pub(super) const NO_COLLECTIONS: &str = "No collections found for this site.";

pub(super) fn site_details(site: &Site) -> String {
    format!(
        "Site: {}\nID: {}\nShort Name: {}\nWorkspace ID: {}\nCreated On: {}\nLast Published: {}\nPreview URL: {}",
        site.display_name,
        site.id,
        site.short_name,
        site.workspace_id,
        site.created_on.as_deref().unwrap_or(NOT_AVAILABLE),
        site.last_published.as_deref().unwrap_or(NOT_AVAILABLE),
        site.preview_url.as_deref().unwrap_or(NOT_AVAILABLE),
    )
}

pub(super) fn site_list(sites: &[Site]) -> String {
    if sites.is_empty() {
        return NO_SITES.to_string();
    }
    let blocks: Vec<String> = sites.iter().map(site_details).collect();
    format!("Found {} sites:\n\n{}", sites.len(), blocks.join("\n\n"))
}

fn collection_details(collection: &Collection) -> String {
    format!(
        "Collection: {}\nID: {}\nSlug: {}\nCreated On: {}\nLast Updated: {}",
        collection.display_name,
        collection.id,
        collection.slug,
        collection.created_on.as_deref().unwrap_or(NOT_AVAILABLE),
        collection.last_updated.as_deref().unwrap_or(NOT_AVAILABLE),
    )
}

pub(super) fn collection_list(collections: &[Collection]) -> String {
    if collections.is_empty() {
        return NO_COLLECTIONS.to_string();
    }
    let blocks: Vec<String> = collections.iter().map(collection_details).collect();
    format!(
        "Found {} collections:\n\n{}",
        collections.len(),
        blocks.join("\n\n")
    )
}

pub(super) fn connection_echo(request: &TestConnectionRequest) -> String {
    let arguments = serde_json::to_string(request).unwrap_or_else(|_| "{}".to_string());
    format!("Connection test successful. Received arguments: {arguments}")
}
