use super::super::{ToolError, WebflowService};
use super::text_result;
use crate::tools::{format, validate};
use rmcp::model::{CallToolResult, JsonObject};

/// Look up one site by id. An absent site is a not-found error, never an
/// empty success.
pub(in crate::tools::dispatch) async fn get_site(
    service: &WebflowService,
    arguments: JsonObject,
) -> Result<CallToolResult, ToolError> {
    let request = validate::get_site(arguments)?;
    let Some(site) = service.api().site(&request.site_id).await? else {
        return Err(ToolError::NotFound("Site not found".to_string()));
    };
    Ok(text_result(format::site_details(&site)))
}
