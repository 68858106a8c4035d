use super::super::{ToolError, WebflowService};
use super::text_result;
use crate::tools::{format, validate};
use rmcp::model::{CallToolResult, JsonObject};

/// List every site the token can see. Zero sites is a successful result
/// with a fixed message.
pub(in crate::tools::dispatch) async fn get_sites(
    service: &WebflowService,
    arguments: JsonObject,
) -> Result<CallToolResult, ToolError> {
    validate::get_sites(arguments)?;
    let sites = service.api().sites().await?;
    log::debug!("get_sites: provider returned {} sites", sites.len());
    Ok(text_result(format::site_list(&sites)))
}
