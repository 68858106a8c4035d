//! Tool dispatch for the Webflow MCP service.
//!
//! [`WebflowService`] owns the provider handle and routes `tools/call`
//! through a closed match on the catalog's name constants. Handlers raise
//! [`ToolError`]; this module converts for the transport: an unknown tool is
//! a JSON-RPC invalid-params error, everything else becomes an error result
//! carrying a structured `{ error: { code, message } }` envelope.

mod router;

use std::sync::Arc;

use rmcp::model::{
    CallToolRequestParam, CallToolResult, Content, Implementation, JsonObject, ListToolsResult,
    PaginatedRequestParam, ServerCapabilities, ServerInfo,
};
use rmcp::service::{RequestContext, RoleServer};
use rmcp::{ErrorData, ServerHandler};
use serde_json::json;
use webflow_client::WebflowApi;

use super::catalog;
use super::error::ToolError;

/// MCP service exposing read-only Webflow account tools.
#[derive(Clone)]
pub struct WebflowService {
    api: Arc<dyn WebflowApi>,
}

impl WebflowService {
    /// The provider handle is injected once here and shared by every call;
    /// nothing else in the service is stateful.
    pub fn new(api: Arc<dyn WebflowApi>) -> Self {
        Self { api }
    }

    pub(super) fn api(&self) -> &dyn WebflowApi {
        self.api.as_ref()
    }

    /// Closed name → handler map. No validation happens here; each handler
    /// validates its own arguments before touching the provider.
    async fn call(&self, name: &str, arguments: JsonObject) -> Result<CallToolResult, ToolError> {
        match name {
            catalog::GET_SITE => router::get_site(self, arguments).await,
            catalog::GET_SITES => router::get_sites(self, arguments).await,
            catalog::TEST_CONNECTION => router::test_connection(self, arguments).await,
            catalog::GET_COLLECTIONS => router::get_collections(self, arguments).await,
            other => Err(ToolError::UnknownTool(other.to_string())),
        }
    }
}

fn error_result(error: &ToolError) -> CallToolResult {
    let mut result = CallToolResult::error(vec![Content::text(error.to_string())]);
    result.structured_content = Some(json!({
        "error": { "code": error.code(), "message": error.to_string() }
    }));
    result
}

impl ServerHandler for WebflowService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: env!("CARGO_PKG_NAME").to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(
                "Read-only Webflow account tools: look up a site, list sites, list a site's CMS collections, and verify connectivity."
                    .to_string(),
            ),
            ..Default::default()
        }
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, ErrorData> {
        Ok(ListToolsResult {
            tools: catalog::tools(),
            next_cursor: None,
        })
    }

    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, ErrorData> {
        let arguments = request.arguments.unwrap_or_default();
        log::debug!("tools/call: {}", request.name);
        match self.call(request.name.as_ref(), arguments).await {
            Ok(result) => Ok(result),
            Err(ToolError::UnknownTool(name)) => {
                log::warn!("rejected call to unknown tool '{name}'");
                Err(ErrorData::invalid_params(
                    format!("Unknown tool: {name}"),
                    None,
                ))
            }
            Err(err) => {
                log::warn!("{} failed: {err}", request.name);
                Ok(error_result(&err))
            }
        }
    }
}
