use super::super::{ToolError, WebflowService};
use super::text_result;
use crate::tools::{format, validate};
use rmcp::model::{CallToolResult, JsonObject};

/// List a site's CMS collections. Zero collections is a successful result
/// with a fixed message.
pub(in crate::tools::dispatch) async fn get_collections(
    service: &WebflowService,
    arguments: JsonObject,
) -> Result<CallToolResult, ToolError> {
    let request = validate::get_collections(arguments)?;
    let collections = service.api().collections(&request.site_id).await?;
    log::debug!(
        "get_collections: provider returned {} collections for {}",
        collections.len(),
        request.site_id
    );
    Ok(text_result(format::collection_list(&collections)))
}
