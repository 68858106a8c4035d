//! One handler per tool. Every handler follows the same shape: validate the
//! raw arguments, fetch from the provider, format the outcome.

mod get_collections;
mod get_site;
mod get_sites;
mod test_connection;

pub(super) use get_collections::get_collections;
pub(super) use get_site::get_site;
pub(super) use get_sites::get_sites;
pub(super) use test_connection::test_connection;

use super::{CallToolResult, Content};

/// Wrap formatted text as a successful single-block result.
fn text_result(text: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text)])
}
