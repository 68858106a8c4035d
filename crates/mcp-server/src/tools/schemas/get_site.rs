use rmcp::schemars;
use serde::Deserialize;

#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct GetSiteRequest {
    /// Site to look up
    #[schemars(description = "Unique identifier of the Webflow site")]
    pub site_id: String,
}
