//! Webflow MCP Server
//!
//! Exposes read-only Webflow account data to AI agents via the MCP protocol.
//!
//! ## Tools
//!
//! - `get_site` - Details of one site by ID
//! - `get_sites` - List all sites the API token can access
//! - `test_connection` - Connectivity check that echoes its arguments
//! - `get_collections` - List the CMS collections of a site
//!
//! ## Usage
//!
//! Add to your MCP client configuration:
//! ```json
//! {
//!   "mcpServers": {
//!     "webflow": {
//!       "command": "webflow-mcp",
//!       "env": { "WEBFLOW_API_TOKEN": "..." }
//!     }
//!   }
//! }
//! ```

use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use rmcp::{transport::stdio, ServiceExt};
use webflow_client::WebflowClient;

mod config;
mod tools;

use config::WebflowConfig;
use tools::catalog;
use tools::WebflowService;

fn print_help() {
    println!("Webflow MCP server");
    println!();
    println!("Usage: webflow-mcp [--print-tools|--version|--help]");
    println!();
    println!("Flags:");
    println!("  --print-tools  Print tool inventory as JSON and exit");
    println!("  --version      Print version and exit");
    println!("  --help         Print this help and exit");
    println!();
    println!("Environment:");
    println!("  WEBFLOW_API_TOKEN  Webflow Data API token (required)");
    println!("  WEBFLOW_API_HOST   Override the API host (optional)");
}

fn handle_cli_args() -> Option<i32> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        return None;
    }

    if args.len() == 1 {
        match args[0].as_str() {
            "--print-tools" => {
                let payload = catalog::tool_inventory_json(env!("CARGO_PKG_VERSION"));
                println!("{}", payload);
                return Some(0);
            }
            "--version" | "-V" => {
                println!("webflow-mcp {}", env!("CARGO_PKG_VERSION"));
                return Some(0);
            }
            "--help" | "-h" => {
                print_help();
                return Some(0);
            }
            _ => {}
        }
    }

    eprintln!("Unknown arguments: {}", args.join(" "));
    print_help();
    Some(2)
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Some(exit_code) = handle_cli_args() {
        std::process::exit(exit_code);
    }

    // Configure logging to stderr only (stdout is for MCP protocol)
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let WebflowConfig { api_token, api_host } = WebflowConfig::from_env()?;
    let client = match api_host {
        Some(host) => WebflowClient::with_base_url(api_token, host),
        None => WebflowClient::new(api_token),
    }
    .context("failed to construct Webflow API client")?;

    log::info!("Starting Webflow MCP server");

    // Create and start the MCP server
    let service = WebflowService::new(Arc::new(client));
    let server = service.serve(stdio()).await?;

    // Wait for shutdown
    server.waiting().await?;

    log::info!("Webflow MCP server stopped");
    Ok(())
}
