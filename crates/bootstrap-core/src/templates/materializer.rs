//! Turning a fetched template checkout into the project directory
//!
//! The staging directory is renamed to the project name, the example
//! environment file becomes the active one, and template-only artifacts are
//! stripped. These mutations are irreversible; no backup is kept.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::error::BootstrapError;

/// Example environment file shipped by the template
const ENV_EXAMPLE: &str = ".env.example";

/// Active environment file of the generated project
const ENV_FILE: &str = ".env";

/// Template-only artifacts stripped from every fresh checkout. The template
/// manifest and lockfile go too; a fresh manifest is written afterwards.
const TEMPLATE_ARTIFACTS: &[&str] = &[".git", "init", "docs", "package.json", "package-lock.json"];

/// Materialize the staged checkout under `root` into `<root>/<project_name>`.
///
/// Returns the target directory. This is the only place in a run that
/// creates the top-level project directory.
pub async fn materialize(
    root: &Path,
    staging_dir: &str,
    project_name: &str,
) -> Result<PathBuf, BootstrapError> {
    let staging = root.join(staging_dir);
    let target = root.join(project_name);

    fs::rename(&staging, &target)
        .await
        .map_err(|source| BootstrapError::RenameError {
            from: staging.clone(),
            to: target.clone(),
            source,
        })?;

    let example = target.join(ENV_EXAMPLE);
    let env_file = target.join(ENV_FILE);
    fs::copy(&example, &env_file)
        .await
        .map_err(|source| BootstrapError::EnvCopyError {
            from: example,
            to: env_file,
            source,
        })?;

    for artifact in TEMPLATE_ARTIFACTS {
        let path = target.join(artifact);
        let removal = match fs::metadata(&path).await {
            Ok(meta) if meta.is_dir() => fs::remove_dir_all(&path).await,
            Ok(_) => fs::remove_file(&path).await,
            // Already absent, nothing to strip
            Err(_) => continue,
        };
        removal.map_err(|source| BootstrapError::CleanupError { path, source })?;
    }

    Ok(target)
}
