//! Argument validation for tool calls.
//!
//! One function per tool: raw call arguments are deserialized into the
//! tool's typed request (wrong types, missing fields, and unknown fields all
//! fail there), then constraints serde cannot express are checked. Handlers
//! never see unvalidated input, and validation never performs I/O.

use rmcp::model::JsonObject;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::catalog;
use super::error::ToolError;
use super::schemas::get_collections::GetCollectionsRequest;
use super::schemas::get_site::GetSiteRequest;
use super::schemas::get_sites::GetSitesRequest;
use super::schemas::test_connection::TestConnectionRequest;

pub(super) fn get_site(arguments: JsonObject) -> Result<GetSiteRequest, ToolError> {
    let request: GetSiteRequest = typed(catalog::GET_SITE, arguments)?;
    non_empty(catalog::GET_SITE, "siteId", &request.site_id)?;
    Ok(request)
}

pub(super) fn get_sites(arguments: JsonObject) -> Result<GetSitesRequest, ToolError> {
    typed(catalog::GET_SITES, arguments)
}

pub(super) fn test_connection(arguments: JsonObject) -> Result<TestConnectionRequest, ToolError> {
    typed(catalog::TEST_CONNECTION, arguments)
}

pub(super) fn get_collections(arguments: JsonObject) -> Result<GetCollectionsRequest, ToolError> {
    let request: GetCollectionsRequest = typed(catalog::GET_COLLECTIONS, arguments)?;
    non_empty(catalog::GET_COLLECTIONS, "siteId", &request.site_id)?;
    Ok(request)
}

fn typed<T: DeserializeOwned>(tool: &'static str, arguments: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments)).map_err(|err| ToolError::InvalidArguments {
        tool,
        violations: vec![err.to_string()],
    })
}

fn non_empty(tool: &'static str, field: &str, value: &str) -> Result<(), ToolError> {
    if value.is_empty() {
        return Err(ToolError::InvalidArguments {
            tool,
            violations: vec![format!("'{field}' must be a non-empty string")],
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn arguments(value: Value) -> JsonObject {
        value.as_object().cloned().expect("object literal")
    }

    fn violations(err: ToolError) -> String {
        match err {
            ToolError::InvalidArguments { violations, .. } => violations.join("; "),
            other => panic!("expected InvalidArguments, got: {other:?}"),
        }
    }

    #[test]
    fn get_site_accepts_a_plain_site_id() {
        let request = get_site(arguments(json!({ "siteId": "abc123" }))).expect("valid");
        assert_eq!(request.site_id, "abc123");
    }

    #[test]
    fn get_site_rejects_missing_site_id() {
        let err = get_site(arguments(json!({}))).expect_err("missing field");
        assert!(violations(err).contains("siteId"));
    }

    #[test]
    fn get_site_rejects_empty_site_id() {
        let err = get_site(arguments(json!({ "siteId": "" }))).expect_err("empty field");
        assert!(violations(err).contains("non-empty"));
    }

    #[test]
    fn get_site_rejects_non_string_site_id() {
        let err = get_site(arguments(json!({ "siteId": 7 }))).expect_err("wrong type");
        assert!(violations(err).contains("string"));
    }

    #[test]
    fn unknown_fields_are_rejected_on_every_tool() {
        get_site(arguments(json!({ "siteId": "abc", "extra": 1 }))).expect_err("get_site");
        get_sites(arguments(json!({ "extra": 1 }))).expect_err("get_sites");
        test_connection(arguments(json!({ "message": "hi", "extra": true })))
            .expect_err("test_connection");
        get_collections(arguments(json!({ "siteId": "abc", "extra": null })))
            .expect_err("get_collections");
    }

    #[test]
    fn get_sites_accepts_exactly_no_fields() {
        get_sites(arguments(json!({}))).expect("no fields is the only valid shape");
    }

    #[test]
    fn test_connection_message_is_optional_but_typed() {
        let empty = test_connection(arguments(json!({}))).expect("no message");
        assert_eq!(empty.message, None);

        let with_message =
            test_connection(arguments(json!({ "message": "hi" }))).expect("with message");
        assert_eq!(with_message.message.as_deref(), Some("hi"));

        let err = test_connection(arguments(json!({ "message": 5 }))).expect_err("wrong type");
        assert!(violations(err).contains("string"));
    }

    #[test]
    fn get_collections_mirrors_get_site_constraints() {
        get_collections(arguments(json!({ "siteId": "abc123" }))).expect("valid");
        get_collections(arguments(json!({}))).expect_err("missing field");
        let err = get_collections(arguments(json!({ "siteId": "" }))).expect_err("empty field");
        assert!(violations(err).contains("non-empty"));
    }
}
