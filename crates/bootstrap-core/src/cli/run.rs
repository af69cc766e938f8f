//! cliclack-driven front-end for the bootstrap pipeline

use anyhow::Result;
use colored::Colorize;

use crate::pipeline::{Bootstrap, RunReport, Stage, StageOutcome};
use crate::product::ProductConfig;
use crate::runtime::check::HostProbe;
use crate::runtime::installer::NpmInstaller;
use crate::templates::fetcher::GitFetcher;

/// Run the full pipeline against the current directory, with progress and
/// outcome reporting. The returned report carries the audit trail; mapping a
/// failed report to the process exit code is the binary's job.
pub async fn run<C: ProductConfig>(config: &C, project: Option<&str>) -> Result<RunReport> {
    cliclack::intro(config.display_name())?;

    let probe = HostProbe;
    let fetcher = GitFetcher::from_config(config)?;
    let installer = NpmInstaller;
    let pipeline = Bootstrap::new(config, &probe, &fetcher, &installer);

    let root = std::env::current_dir()?;

    let report = pipeline
        .run(project, &root, |stage| announce(config, stage))
        .await;

    match report.failure() {
        None => print_success(config)?,
        Some(result) => print_failure(result)?,
    }

    Ok(report)
}

fn announce<C: ProductConfig>(config: &C, stage: Stage) {
    let line = match stage {
        Stage::Fetch => format!(
            "Cloning {} ({})...",
            config.template_url().cyan(),
            config.template_tag()
        ),
        Stage::Materialize => "Initializing...".to_string(),
        Stage::Install => "Installing dependencies...".to_string(),
        _ => return,
    };
    let _ = cliclack::log::info(line);
}

fn print_success<C: ProductConfig>(config: &C) -> Result<()> {
    cliclack::log::success("Setup successful")?;

    println!();
    println!("  Documentation can be found at {}", config.docs_url().cyan());
    println!(
        "  You can join the community at {}",
        config.community_url().cyan()
    );
    println!("  If you need any help you can ask in the community");
    for url in config.support_urls() {
        println!("  You can support the project at {}", url.cyan());
    }
    println!();

    cliclack::outro("Happy coding!")?;
    Ok(())
}

fn print_failure(result: &crate::pipeline::StageResult) -> Result<()> {
    if let StageOutcome::Failure(error) = &result.outcome {
        cliclack::log::error(format!("Setup failed: {}", error))?;
    }
    cliclack::outro("Setup aborted")?;
    Ok(())
}
