//! The bootstrap pipeline
//!
//! A run is a strict sequence of stages; the first failing stage terminates
//! it. Outcomes are recorded as values in a [`RunReport`] so the fail-fast
//! contract and the failure taxonomy are testable without observing process
//! exits. External capabilities (version probe, template fetch, dependency
//! install) are injected, which keeps the driver free of real network and
//! package-manager processes in tests.

mod request;

pub use request::ProjectRequest;

use std::fmt;
use std::path::Path;

use crate::error::BootstrapError;
use crate::manifest::{write_manifest, ManifestConfig};
use crate::product::ProductConfig;
use crate::runtime::check::VersionProbe;
use crate::runtime::installer::PackageInstaller;
use crate::runtime::validate::validate;
use crate::templates::fetcher::TemplateFetcher;
use crate::templates::materializer::materialize;

/// One discrete, ordered step of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Parse,
    Validate,
    Fetch,
    Materialize,
    WriteManifest,
    Install,
}

impl Stage {
    pub fn display_name(&self) -> &'static str {
        match self {
            Stage::Parse => "parse",
            Stage::Validate => "validate",
            Stage::Fetch => "fetch",
            Stage::Materialize => "materialize",
            Stage::WriteManifest => "write manifest",
            Stage::Install => "install",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Outcome of a single stage
#[derive(Debug)]
pub enum StageOutcome {
    Success,
    Failure(BootstrapError),
}

/// One entry of the run's audit trail
#[derive(Debug)]
pub struct StageResult {
    pub stage: Stage,
    pub outcome: StageOutcome,
}

/// Ordered audit trail of a run. Ends at the first failure.
#[derive(Debug, Default)]
pub struct RunReport {
    results: Vec<StageResult>,
}

impl RunReport {
    pub fn results(&self) -> &[StageResult] {
        &self.results
    }

    /// True when every recorded stage succeeded
    pub fn succeeded(&self) -> bool {
        self.failure().is_none()
    }

    /// The failing stage result, if the run failed
    pub fn failure(&self) -> Option<&StageResult> {
        self.results
            .iter()
            .find(|r| matches!(r.outcome, StageOutcome::Failure(_)))
    }

    fn record<T>(&mut self, stage: Stage, outcome: Result<T, BootstrapError>) -> Option<T> {
        match outcome {
            Ok(value) => {
                self.results.push(StageResult {
                    stage,
                    outcome: StageOutcome::Success,
                });
                Some(value)
            }
            Err(error) => {
                self.results.push(StageResult {
                    stage,
                    outcome: StageOutcome::Failure(error),
                });
                None
            }
        }
    }
}

/// The pipeline driver
pub struct Bootstrap<'a, C: ProductConfig> {
    config: &'a C,
    probe: &'a dyn VersionProbe,
    fetcher: &'a dyn TemplateFetcher,
    installer: &'a dyn PackageInstaller,
}

impl<'a, C: ProductConfig> Bootstrap<'a, C> {
    pub fn new(
        config: &'a C,
        probe: &'a dyn VersionProbe,
        fetcher: &'a dyn TemplateFetcher,
        installer: &'a dyn PackageInstaller,
    ) -> Self {
        Self {
            config,
            probe,
            fetcher,
            installer,
        }
    }

    /// Run the pipeline for `project` with all paths rooted at `root`.
    ///
    /// `on_stage` fires when a stage starts, for progress reporting. The
    /// returned report ends at the first failure; committed side effects
    /// are deliberately left in place for the operator.
    pub async fn run(
        &self,
        project: Option<&str>,
        root: &Path,
        mut on_stage: impl FnMut(Stage),
    ) -> RunReport {
        let mut report = RunReport::default();

        on_stage(Stage::Parse);
        let Some(request) = report.record(Stage::Parse, ProjectRequest::parse(project)) else {
            return report;
        };

        on_stage(Stage::Validate);
        let validated = validate(root, &request, self.config, self.probe);
        if report.record(Stage::Validate, validated).is_none() {
            return report;
        }

        on_stage(Stage::Fetch);
        let staging = root.join(self.config.staging_dir());
        if report
            .record(Stage::Fetch, self.fetcher.fetch(&staging).await)
            .is_none()
        {
            return report;
        }

        on_stage(Stage::Materialize);
        let materialized = materialize(root, self.config.staging_dir(), request.name()).await;
        let Some(target) = report.record(Stage::Materialize, materialized) else {
            return report;
        };

        on_stage(Stage::WriteManifest);
        let manifest = ManifestConfig::new(request.name(), &self.config.manifest_template());
        if report
            .record(Stage::WriteManifest, write_manifest(&manifest, &target).await)
            .is_none()
        {
            return report;
        }

        on_stage(Stage::Install);
        report.record(Stage::Install, self.installer.install(&target).await);

        report
    }
}
