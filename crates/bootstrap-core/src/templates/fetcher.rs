//! Template retrieval from the pinned remote repository
//!
//! The template is fetched with a shallow, single-commit clone of one
//! release tag. Network failures, auth failures and unknown tags are not
//! distinguished: any non-zero exit from the underlying command is one
//! fetch failure.

use std::ffi::OsString;
use std::path::Path;
use std::process::Stdio;

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::process::Command;
use url::Url;

use crate::error::BootstrapError;
use crate::product::ProductConfig;

/// Capability seam for retrieving the template into the staging directory,
/// so pipeline tests can substitute a fake
#[async_trait]
pub trait TemplateFetcher: Send + Sync {
    async fn fetch(&self, staging: &Path) -> Result<(), BootstrapError>;
}

/// Fetcher backed by the real git binary
#[derive(Debug, Clone)]
pub struct GitFetcher {
    url: Url,
    tag: String,
}

impl GitFetcher {
    pub fn new(url: Url, tag: impl Into<String>) -> Self {
        Self {
            url,
            tag: tag.into(),
        }
    }

    /// Create a fetcher from a product config
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        let url = Url::parse(config.template_url())
            .with_context(|| format!("Invalid template URL: {}", config.template_url()))?;
        Ok(Self::new(url, config.template_tag()))
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn clone_args(&self, staging: &Path) -> Vec<OsString> {
        vec![
            OsString::from("clone"),
            OsString::from("--depth"),
            OsString::from("1"),
            OsString::from("--branch"),
            OsString::from(&self.tag),
            OsString::from(self.url.as_str()),
            staging.as_os_str().to_os_string(),
        ]
    }
}

#[async_trait]
impl TemplateFetcher for GitFetcher {
    async fn fetch(&self, staging: &Path) -> Result<(), BootstrapError> {
        let status = Command::new("git")
            .args(self.clone_args(staging))
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| BootstrapError::FetchError {
                reason: e.to_string(),
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(BootstrapError::FetchError {
                reason: format!("git exited with status {}", status.code().unwrap_or(-1)),
            })
        }
    }
}
