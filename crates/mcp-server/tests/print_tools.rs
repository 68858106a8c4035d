use anyhow::{Context, Result};
use serde_json::Value;
use std::path::PathBuf;
use std::process::Command;

fn locate_webflow_mcp_bin() -> Result<PathBuf> {
    if let Some(path) = option_env!("CARGO_BIN_EXE_webflow-mcp") {
        return Ok(PathBuf::from(path));
    }

    if let Ok(exe) = std::env::current_exe() {
        if let Some(target_profile_dir) = exe.parent().and_then(|p| p.parent()) {
            let candidate = target_profile_dir.join("webflow-mcp");
            if candidate.exists() {
                return Ok(candidate);
            }
        }
    }

    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let repo_root = manifest_dir
        .ancestors()
        .nth(2)
        .context("failed to resolve repo root from CARGO_MANIFEST_DIR")?;
    for rel in ["target/debug/webflow-mcp", "target/release/webflow-mcp"] {
        let candidate = repo_root.join(rel);
        if candidate.exists() {
            return Ok(candidate);
        }
    }

    anyhow::bail!("failed to locate webflow-mcp binary")
}

#[test]
fn print_tools_emits_the_catalog_as_json() -> Result<()> {
    let bin = locate_webflow_mcp_bin()?;
    let output = Command::new(&bin)
        .arg("--print-tools")
        .output()
        .context("run --print-tools")?;
    assert!(output.status.success(), "--print-tools must exit 0");

    let payload: Value = serde_json::from_slice(&output.stdout)
        .context("--print-tools output is not valid JSON")?;
    assert_eq!(payload["name"], "webflow-mcp");
    let tools = payload["tools"]
        .as_array()
        .context("tools is not an array")?;
    let names: Vec<&str> = tools.iter().filter_map(|t| t["name"].as_str()).collect();
    assert_eq!(
        names,
        ["get_site", "get_sites", "test_connection", "get_collections"]
    );
    for tool in tools {
        let description = tool["description"].as_str().unwrap_or_default();
        assert!(!description.is_empty(), "every tool needs a description");
        assert_eq!(tool["inputSchema"]["type"], "object");
    }
    Ok(())
}

#[test]
fn version_flag_prints_the_crate_version() -> Result<()> {
    let bin = locate_webflow_mcp_bin()?;
    let output = Command::new(&bin)
        .arg("--version")
        .output()
        .context("run --version")?;
    assert!(output.status.success(), "--version must exit 0");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.starts_with("webflow-mcp "),
        "unexpected version line: {stdout}"
    );
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn unknown_flags_exit_nonzero_with_help() -> Result<()> {
    let bin = locate_webflow_mcp_bin()?;
    let output = Command::new(&bin)
        .arg("--definitely-not-a-flag")
        .output()
        .context("run with an unknown flag")?;
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown arguments"),
        "unexpected stderr: {stderr}"
    );
    Ok(())
}
