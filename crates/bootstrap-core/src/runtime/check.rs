//! Host tool detection for git, Node.js and npm

use anyhow::Result;
use semver::Version;
use std::process::Command;

/// Tool detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn check_tool(name: &'static str, binary: &str, arg: &str) -> RuntimeInfo {
    let output = Command::new(binary).arg(arg).output();

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if git is available
pub fn check_git() -> RuntimeInfo {
    check_tool("Git", "git", "--version")
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    check_tool("Node.js", "node", "--version")
}

/// Check if npm is available
pub fn check_npm() -> RuntimeInfo {
    check_tool("npm", "npm", "--version")
}

/// Parse version string, handling various formats
pub fn parse_version(version_str: &str) -> Result<Version> {
    // Remove leading 'v' if present (node reports "v20.11.1")
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

/// Tool versions observed on the host, captured once per run
#[derive(Debug, Clone)]
pub struct EnvironmentSnapshot {
    pub version_control_present: bool,
    pub runtime_version: Option<Version>,
    pub package_manager_version: Option<Version>,
}

/// Capability seam for probing host tool versions, so validation can run
/// against fakes in tests without invoking real processes
pub trait VersionProbe: Send + Sync {
    fn capture(&self) -> EnvironmentSnapshot;
}

/// Probe backed by the real host tools
#[derive(Debug, Clone, Default)]
pub struct HostProbe;

impl VersionProbe for HostProbe {
    fn capture(&self) -> EnvironmentSnapshot {
        let git = check_git();
        let node = check_node();
        let npm = check_npm();

        EnvironmentSnapshot {
            version_control_present: git.available,
            runtime_version: node
                .version
                .as_deref()
                .and_then(|v| parse_version(v).ok()),
            package_manager_version: npm
                .version
                .as_deref()
                .and_then(|v| parse_version(v).ok()),
        }
    }
}
