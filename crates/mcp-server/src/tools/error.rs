//! Error taxonomy for tool calls.
//!
//! Handlers raise these; the dispatch layer converts them into the MCP
//! transport representation. Empty result lists are never errors.

use thiserror::Error;
use webflow_client::WebflowError;

#[derive(Error, Debug)]
pub(crate) enum ToolError {
    /// The requested tool name is not in the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// Arguments failed the tool's declared shape.
    #[error("Invalid arguments for {tool}: {}", .violations.join("; "))]
    InvalidArguments {
        tool: &'static str,
        violations: Vec<String>,
    },

    /// A single-entity lookup matched nothing.
    #[error("{0}")]
    NotFound(String),

    /// The Webflow API call itself failed; status and message pass through
    /// as the provider supplied them.
    #[error(transparent)]
    Provider(#[from] WebflowError),
}

impl ToolError {
    /// Stable machine-readable code for the structured error envelope.
    pub(crate) fn code(&self) -> &'static str {
        match self {
            Self::UnknownTool(_) => "unknown_tool",
            Self::InvalidArguments { .. } => "invalid_request",
            Self::NotFound(_) => "not_found",
            Self::Provider(_) => "provider_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_arguments_lists_every_violation() {
        let err = ToolError::InvalidArguments {
            tool: "get_site",
            violations: vec![
                "missing field `siteId`".to_string(),
                "unknown field `extra`".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Invalid arguments for get_site: missing field `siteId`; unknown field `extra`"
        );
        assert_eq!(err.code(), "invalid_request");
    }

    #[test]
    fn provider_errors_display_transparently() {
        let err = ToolError::Provider(WebflowError::Api {
            status: 429,
            message: "Rate limit hit".to_string(),
        });
        assert_eq!(err.to_string(), "Webflow API returned 429: Rate limit hit");
        assert_eq!(err.code(), "provider_error");
    }

    #[test]
    fn not_found_carries_the_exact_message() {
        let err = ToolError::NotFound("Site not found".to_string());
        assert_eq!(err.to_string(), "Site not found");
        assert_eq!(err.code(), "not_found");
    }
}
