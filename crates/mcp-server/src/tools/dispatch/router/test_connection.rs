use super::super::{ToolError, WebflowService};
use super::text_result;
use crate::tools::{format, validate};
use rmcp::model::{CallToolResult, JsonObject};

/// Pure echo: never touches the provider, always succeeds once the
/// arguments validate.
pub(in crate::tools::dispatch) async fn test_connection(
    _service: &WebflowService,
    arguments: JsonObject,
) -> Result<CallToolResult, ToolError> {
    let request = validate::test_connection(arguments)?;
    Ok(text_result(format::connection_echo(&request)))
}
