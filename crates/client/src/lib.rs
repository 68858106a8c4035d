//! Typed, read-only client for the Webflow Data API v2.
//!
//! The MCP server consumes this crate through the [`WebflowApi`] trait so its
//! tool handlers stay testable against canned account data; [`WebflowClient`]
//! is the production implementation.

mod client;
mod error;
mod models;

pub use client::{WebflowApi, WebflowClient, DEFAULT_API_HOST};
pub use error::{Result, WebflowError};
pub use models::{Collection, Site};
