//! Per-tool argument shapes.
//!
//! Every struct doubles as the wire schema (`schemars` derives the JSON
//! Schema advertised in `tools/list`) and the validated form handlers work
//! with. `deny_unknown_fields` makes stray argument fields a validation
//! failure instead of silently dropping them.

pub mod get_collections;
pub mod get_site;
pub mod get_sites;
pub mod test_connection;
