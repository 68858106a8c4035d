use rmcp::schemars;
use serde::Deserialize;

/// `get_sites` takes no arguments; any supplied field is a validation error.
#[derive(Debug, Default, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GetSitesRequest {}
