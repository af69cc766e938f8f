//! Shared fakes and fixtures for unit tests

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use semver::Version;

use crate::error::BootstrapError;
use crate::manifest::{Engines, ManifestTemplate, ScriptTable};
use crate::product::ProductConfig;
use crate::runtime::check::{EnvironmentSnapshot, VersionProbe};
use crate::runtime::installer::PackageInstaller;
use crate::templates::fetcher::TemplateFetcher;

/// Minimal product used across the test modules
#[derive(Clone)]
pub struct TestConfig;

impl ProductConfig for TestConfig {
    fn name(&self) -> &'static str {
        "typescript"
    }

    fn display_name(&self) -> &'static str {
        "TypeScript"
    }

    fn template_url(&self) -> &'static str {
        "https://github.com/matriarx/typescript.git"
    }

    fn template_tag(&self) -> &'static str {
        "v0.0.4"
    }

    fn staging_dir(&self) -> &'static str {
        "typescript"
    }

    fn min_runtime_major(&self) -> u64 {
        18
    }

    fn min_package_manager_major(&self) -> u64 {
        8
    }

    fn manifest_template(&self) -> ManifestTemplate {
        ManifestTemplate {
            version_seed: "0.0.1",
            domain_keywords: &["javascript", "typescript"],
            license: "MIT",
            engines: Engines {
                node: ">= 18",
                npm: ">= 8",
            },
            module_type: "module",
            entry_point: "lib/index.js",
            scripts: ScriptTable {
                start: "node lib/index.js",
                compile: "swc src -d lib",
                build: "npm run compile",
                dev: "swc src -d lib -w",
                review: "tsc --emitDeclarationOnly",
                lint: "eslint --fix",
                style: "prettier --write",
                test: "jest",
                qa: "npm run lint && npm test",
                compose: "docker compose up -d",
                recompose: "docker compose up --build -d",
                release: "docker build .",
                deploy: "docker run",
                prepare: "husky install",
            },
            dependencies: &[("dotenv", "^16.0.1")],
            dev_dependencies: &[("typescript", "^4.7.4")],
        }
    }

    fn docs_url(&self) -> &'static str {
        "https://example.com/docs"
    }

    fn community_url(&self) -> &'static str {
        "https://example.com/community"
    }

    fn support_urls(&self) -> Vec<&'static str> {
        vec!["https://example.com/sponsor"]
    }
}

/// Build a snapshot from plain version triples
pub fn snapshot(
    version_control_present: bool,
    runtime: Option<(u64, u64, u64)>,
    package_manager: Option<(u64, u64, u64)>,
) -> EnvironmentSnapshot {
    let to_version = |(major, minor, patch)| Version::new(major, minor, patch);
    EnvironmentSnapshot {
        version_control_present,
        runtime_version: runtime.map(to_version),
        package_manager_version: package_manager.map(to_version),
    }
}

/// Probe returning a canned snapshot, counting captures
pub struct FakeProbe {
    snapshot: EnvironmentSnapshot,
    captures: AtomicUsize,
}

impl FakeProbe {
    pub fn new(snapshot: EnvironmentSnapshot) -> Self {
        Self {
            snapshot,
            captures: AtomicUsize::new(0),
        }
    }

    /// git present, node 20, npm 10
    pub fn healthy() -> Self {
        Self::new(snapshot(true, Some((20, 11, 1)), Some((10, 2, 4))))
    }

    pub fn captures(&self) -> usize {
        self.captures.load(Ordering::SeqCst)
    }
}

impl VersionProbe for FakeProbe {
    fn capture(&self) -> EnvironmentSnapshot {
        self.captures.fetch_add(1, Ordering::SeqCst);
        self.snapshot.clone()
    }
}

/// Lay out a minimal template checkout at `path`, shaped like the real one
pub fn stage_template_checkout(path: &Path) {
    std::fs::create_dir_all(path.join(".git")).unwrap();
    std::fs::write(path.join(".git/HEAD"), "ref: refs/heads/main\n").unwrap();
    std::fs::create_dir_all(path.join("init")).unwrap();
    std::fs::write(path.join("init/init.js"), "// template init\n").unwrap();
    std::fs::create_dir_all(path.join("docs")).unwrap();
    std::fs::write(path.join("docs/index.md"), "# docs\n").unwrap();
    std::fs::create_dir_all(path.join("src")).unwrap();
    std::fs::write(path.join("src/index.ts"), "export {}\n").unwrap();
    std::fs::write(path.join(".env.example"), "PORT=80\n").unwrap();
    std::fs::write(path.join("package.json"), "{\"name\":\"template\"}\n").unwrap();
    std::fs::write(path.join("package-lock.json"), "{}\n").unwrap();
}

/// Fetcher that materializes a canned checkout instead of cloning
pub struct FakeFetcher {
    calls: AtomicUsize,
    fail: bool,
}

impl FakeFetcher {
    pub fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TemplateFetcher for FakeFetcher {
    async fn fetch(&self, staging: &Path) -> Result<(), BootstrapError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(BootstrapError::FetchError {
                reason: "git exited with status 128".to_string(),
            });
        }
        stage_template_checkout(staging);
        Ok(())
    }
}

/// Installer that records its invocations
pub struct FakeInstaller {
    calls: AtomicUsize,
    fail: bool,
    last_dir: Mutex<Option<PathBuf>>,
}

impl FakeInstaller {
    pub fn ok() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
            last_dir: Mutex::new(None),
        }
    }

    pub fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
            last_dir: Mutex::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_dir(&self) -> Option<PathBuf> {
        self.last_dir.lock().unwrap().clone()
    }
}

#[async_trait]
impl PackageInstaller for FakeInstaller {
    async fn install(&self, project_dir: &Path) -> Result<(), BootstrapError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_dir.lock().unwrap() = Some(project_dir.to_path_buf());
        if self.fail {
            return Err(BootstrapError::InstallError {
                reason: "npm exited with status 1".to_string(),
            });
        }
        Ok(())
    }
}
