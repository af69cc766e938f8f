//! Environment validation ahead of any side effect
//!
//! Four checks run in a fixed order and short-circuit at the first failure:
//! target directory collision, staging directory collision, version-control
//! presence, minimum tool versions. Nothing is retried and nothing later in
//! the pipeline re-checks.

use std::path::Path;

use crate::error::BootstrapError;
use crate::pipeline::ProjectRequest;
use crate::product::ProductConfig;
use crate::runtime::check::{EnvironmentSnapshot, VersionProbe};

/// Validate the host environment for a run rooted at `root`.
///
/// The directory checks run before any tool probe, so a name collision is
/// reported without spawning a single process.
pub fn validate<C: ProductConfig>(
    root: &Path,
    request: &ProjectRequest,
    config: &C,
    probe: &dyn VersionProbe,
) -> Result<EnvironmentSnapshot, BootstrapError> {
    let target = root.join(request.name());
    if target.exists() {
        return Err(BootstrapError::NameCollision(request.name().to_string()));
    }

    let staging = root.join(config.staging_dir());
    if staging.exists() {
        return Err(BootstrapError::StagingCollision(
            config.staging_dir().to_string(),
        ));
    }

    let snapshot = probe.capture();

    if !snapshot.version_control_present {
        return Err(BootstrapError::MissingDependencyTool { tool: "git" });
    }

    let runtime = snapshot
        .runtime_version
        .as_ref()
        .ok_or(BootstrapError::MissingDependencyTool { tool: "node" })?;
    if runtime.major < config.min_runtime_major() {
        return Err(BootstrapError::UnsupportedToolVersion {
            tool: "node",
            found: runtime.to_string(),
            minimum: config.min_runtime_major(),
        });
    }

    let package_manager = snapshot
        .package_manager_version
        .as_ref()
        .ok_or(BootstrapError::MissingDependencyTool { tool: "npm" })?;
    if package_manager.major < config.min_package_manager_major() {
        return Err(BootstrapError::UnsupportedToolVersion {
            tool: "npm",
            found: package_manager.to_string(),
            minimum: config.min_package_manager_major(),
        });
    }

    Ok(snapshot)
}
