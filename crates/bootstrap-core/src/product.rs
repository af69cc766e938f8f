//! Product configuration trait for bootstrap binaries
//!
//! Each binary implements this trait to define which template it bootstraps
//! from and what the generated project looks like.

use crate::manifest::ManifestTemplate;

/// Configuration trait for different bootstrap products
///
/// A product defines:
/// - Product identity (name, display name)
/// - The pinned template repository (URL, tag, staging directory)
/// - Minimum tool versions for the generated project
/// - The constant portion of the generated manifest
/// - Documentation and community links printed on success
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// Fixed remote URL of the template repository
    fn template_url(&self) -> &'static str;

    /// Pinned release tag cloned from the template repository
    fn template_tag(&self) -> &'static str;

    /// Directory name the clone lands in before being renamed to the
    /// project name. Must not exist when a run starts.
    fn staging_dir(&self) -> &'static str;

    /// Minimum supported runtime major version
    fn min_runtime_major(&self) -> u64;

    /// Minimum supported package manager major version
    fn min_package_manager_major(&self) -> u64;

    /// Constant portion of the manifest written into the new project
    fn manifest_template(&self) -> ManifestTemplate;

    /// URL for product documentation
    fn docs_url(&self) -> &'static str;

    /// URL for the product community
    fn community_url(&self) -> &'static str;

    /// Sponsoring/support links shown after a successful run
    fn support_urls(&self) -> Vec<&'static str>;
}
