//! Bootstrap Core - Shared library for project bootstrap CLIs
//!
//! This library turns an empty working directory into a ready-to-develop
//! project: it validates the host environment, clones a pinned template
//! repository, materializes it under the chosen project name, writes a
//! fresh manifest, and installs dependencies. It is designed to be used by
//! CLI binaries that share the pipeline but bootstrap different products.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Capabilities** - host probes, template fetching, dependency install,
//!   each behind a narrow trait so tests run without real processes
//! - **Pipeline** - the `Bootstrap` driver sequencing the stages and
//!   recording a [`pipeline::RunReport`] audit trail, halting on the first
//!   failure
//! - **CLI front-end** - optional cliclack-based progress and outcome
//!   reporting (feature-gated)
//!
//! # Feature Flags
//!
//! - `cli` (default): Enables the cliclack front-end module
//!
//! # Example Usage (without the front-end)
//!
//! ```ignore
//! use bootstrap_core::{Bootstrap, ProductConfig};
//! use bootstrap_core::runtime::{HostProbe, NpmInstaller};
//! use bootstrap_core::templates::GitFetcher;
//!
//! let probe = HostProbe;
//! let fetcher = GitFetcher::from_config(&config)?;
//! let installer = NpmInstaller;
//! let pipeline = Bootstrap::new(&config, &probe, &fetcher, &installer);
//! let report = pipeline.run(Some("myapp"), &root, |_| {}).await;
//! ```

pub mod enums;
pub mod error;
pub mod manifest;
pub mod pipeline;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export main types for convenience
pub use error::BootstrapError;
pub use manifest::{ManifestConfig, ManifestTemplate};
pub use pipeline::{Bootstrap, ProjectRequest, RunReport, Stage, StageOutcome, StageResult};
pub use product::ProductConfig;
pub use runtime::{EnvironmentSnapshot, HostProbe, NpmInstaller, VersionProbe};
pub use templates::{GitFetcher, TemplateFetcher};

#[cfg(feature = "cli")]
pub use cli::run;
