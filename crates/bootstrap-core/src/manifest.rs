//! Manifest synthesis for the generated project
//!
//! The manifest is fully determined by the project name plus the constant
//! template carried by the product config. It is built once, written once,
//! and never re-read within a run.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tokio::fs;

use crate::error::BootstrapError;

/// Fixed manifest filename inside the target directory
pub const MANIFEST_FILE: &str = "package.json";

/// Author or contributor placeholder
#[derive(Debug, Clone, Default, Serialize)]
pub struct Author {
    pub name: String,
    pub url: String,
    pub email: String,
}

/// Source repository reference
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Repository {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub url: &'static str,
}

/// Engine constraints for the generated project
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Engines {
    pub node: &'static str,
    pub npm: &'static str,
}

/// Named command strings, serialized in declaration order
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScriptTable {
    pub start: &'static str,
    pub compile: &'static str,
    pub build: &'static str,
    pub dev: &'static str,
    pub review: &'static str,
    pub lint: &'static str,
    pub style: &'static str,
    pub test: &'static str,
    pub qa: &'static str,
    pub compose: &'static str,
    pub recompose: &'static str,
    pub release: &'static str,
    pub deploy: &'static str,
    pub prepare: &'static str,
}

/// Constant portion of the manifest, supplied by the product config
#[derive(Debug, Clone)]
pub struct ManifestTemplate {
    pub version_seed: &'static str,
    pub domain_keywords: &'static [&'static str],
    pub license: &'static str,
    pub engines: Engines,
    pub module_type: &'static str,
    pub entry_point: &'static str,
    pub scripts: ScriptTable,
    pub dependencies: &'static [(&'static str, &'static str)],
    pub dev_dependencies: &'static [(&'static str, &'static str)],
}

/// The structured project descriptor written to [`MANIFEST_FILE`]
///
/// Field order is serialization order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestConfig {
    pub name: String,
    pub version: &'static str,
    pub description: String,
    pub keywords: Vec<String>,
    pub author: Author,
    pub contributors: Vec<Author>,
    pub homepage: &'static str,
    pub repository: Repository,
    pub bugs: &'static str,
    pub license: &'static str,
    pub funding: Vec<String>,
    pub private: bool,
    pub publish_config: Map<String, Value>,
    pub config: Map<String, Value>,
    pub engines: Engines,
    #[serde(rename = "type")]
    pub module_type: &'static str,
    pub main: &'static str,
    pub scripts: ScriptTable,
    pub bin: Map<String, Value>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
    pub bundle_dependencies: Vec<String>,
}

impl ManifestConfig {
    /// Build the descriptor for a project name. Pure: no input besides the
    /// name and the constant template influences the result.
    pub fn new(name: &str, template: &ManifestTemplate) -> Self {
        let mut keywords = vec![name.to_string()];
        keywords.extend(template.domain_keywords.iter().map(|k| k.to_string()));

        Self {
            name: name.to_string(),
            version: template.version_seed,
            description: format!("{} app", capitalize(name)),
            keywords,
            author: Author::default(),
            contributors: Vec::new(),
            homepage: "",
            repository: Repository {
                kind: "git",
                url: "",
            },
            bugs: "",
            license: template.license,
            funding: Vec::new(),
            private: true,
            publish_config: Map::new(),
            config: Map::new(),
            engines: template.engines,
            module_type: template.module_type,
            main: template.entry_point,
            scripts: template.scripts,
            bin: Map::new(),
            dependencies: to_table(template.dependencies),
            dev_dependencies: to_table(template.dev_dependencies),
            bundle_dependencies: Vec::new(),
        }
    }
}

fn to_table(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Serialize the descriptor as pretty-printed (2-space) UTF-8 JSON into the
/// target directory. The single manifest write of the run.
pub async fn write_manifest(
    config: &ManifestConfig,
    target_dir: &Path,
) -> Result<PathBuf, BootstrapError> {
    let path = target_dir.join(MANIFEST_FILE);

    let body = serde_json::to_string_pretty(config).map_err(|e| {
        BootstrapError::ManifestWriteError {
            path: path.clone(),
            reason: e.to_string(),
        }
    })?;

    fs::write(&path, body)
        .await
        .map_err(|e| BootstrapError::ManifestWriteError {
            path: path.clone(),
            reason: e.to_string(),
        })?;

    Ok(path)
}
