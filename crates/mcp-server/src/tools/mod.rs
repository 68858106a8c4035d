//! Webflow MCP tool surface.
//!
//! This module is intentionally split into submodules to keep the catalog,
//! schemas, validation, formatting, and dispatch reviewable on their own.

pub(crate) mod catalog;
mod dispatch;
mod error;
mod format;
mod schemas;
mod validate;

pub use dispatch::WebflowService;
