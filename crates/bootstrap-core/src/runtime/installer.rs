//! Dependency installation via the package manager

use std::path::Path;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::BootstrapError;

/// Capability seam for installing the dependency table declared by the
/// manifest, so pipeline tests can substitute a fake
#[async_trait]
pub trait PackageInstaller: Send + Sync {
    async fn install(&self, project_dir: &Path) -> Result<(), BootstrapError>;
}

/// Installer backed by the real npm binary
///
/// Lifecycle scripts are disabled: the manifest just written has not been
/// reviewed by the user yet, so nothing from it may execute during install.
#[derive(Debug, Clone, Default)]
pub struct NpmInstaller;

#[async_trait]
impl PackageInstaller for NpmInstaller {
    async fn install(&self, project_dir: &Path) -> Result<(), BootstrapError> {
        let status = Command::new("npm")
            .arg("install")
            .arg("--ignore-scripts")
            .current_dir(project_dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| BootstrapError::InstallError {
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(BootstrapError::InstallError {
                reason: format!("npm exited with status {}", status.code().unwrap_or(-1)),
            })
        }
    }
}
