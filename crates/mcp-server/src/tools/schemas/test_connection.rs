use rmcp::schemars;
use serde::{Deserialize, Serialize};

/// Connectivity self-check. Serialized back to the caller verbatim, so the
/// struct also derives `Serialize`.
#[derive(Debug, Default, Deserialize, Serialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct TestConnectionRequest {
    /// Message echoed back in the response
    #[schemars(description = "Optional message to include in the echo response")]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
