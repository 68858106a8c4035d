//! Static tool catalog.
//!
//! Declaration order here is the order tools appear in `tools/list`. The
//! name constants are shared with the dispatch match so the advertised set
//! and the routable set cannot drift.

use std::sync::Arc;

use once_cell::sync::Lazy;
use rmcp::model::{JsonObject, Tool};
use rmcp::schemars;
use serde_json::json;

use super::schemas::get_collections::GetCollectionsRequest;
use super::schemas::get_site::GetSiteRequest;
use super::schemas::get_sites::GetSitesRequest;
use super::schemas::test_connection::TestConnectionRequest;

pub(crate) const GET_SITE: &str = "get_site";
pub(crate) const GET_SITES: &str = "get_sites";
pub(crate) const TEST_CONNECTION: &str = "test_connection";
pub(crate) const GET_COLLECTIONS: &str = "get_collections";

static TOOLS: Lazy<Vec<Tool>> = Lazy::new(|| {
    vec![
        tool::<GetSiteRequest>(GET_SITE, "Get details of a specific Webflow site by ID"),
        tool::<GetSitesRequest>(
            GET_SITES,
            "List all Webflow sites available to the authenticated account",
        ),
        tool::<TestConnectionRequest>(
            TEST_CONNECTION,
            "Verify the server is responding; echoes the supplied arguments",
        ),
        tool::<GetCollectionsRequest>(
            GET_COLLECTIONS,
            "List the CMS collections of a Webflow site",
        ),
    ]
});

/// The full tool inventory, fixed at process start.
pub(crate) fn tools() -> Vec<Tool> {
    TOOLS.clone()
}

fn tool<T: schemars::JsonSchema>(name: &'static str, description: &'static str) -> Tool {
    Tool::new(name, description, input_schema::<T>())
}

fn input_schema<T: schemars::JsonSchema>() -> Arc<JsonObject> {
    match schemars::schema_for!(T).to_value() {
        serde_json::Value::Object(object) => Arc::new(object),
        // schema_for! on a struct always yields an object
        _ => Arc::new(JsonObject::new()),
    }
}

/// Pretty-printed inventory for `--print-tools`.
pub(crate) fn tool_inventory_json(version: &str) -> String {
    let tools: Vec<serde_json::Value> = tools()
        .iter()
        .map(|tool| {
            json!({
                "name": tool.name,
                "description": tool.description,
                "inputSchema": tool.input_schema,
            })
        })
        .collect();
    let inventory = json!({
        "name": "webflow-mcp",
        "version": version,
        "tools": tools,
    });
    serde_json::to_string_pretty(&inventory).unwrap_or_default()
}
