//! create-typescript - Bootstrap a new project from the TypeScript starter template

use anyhow::Result;
use bootstrap_core::manifest::{Engines, ManifestTemplate, ScriptTable};
use bootstrap_core::ProductConfig;
use clap::Parser;

/// TypeScript starter product configuration
#[derive(Clone)]
pub struct TypeScriptConfig;

impl ProductConfig for TypeScriptConfig {
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
        // git names the checkout after the repository
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
                start: "NODE_ENV=production node --es-module-specifier-resolution=node --no-warnings lib/index.js",
                compile: "swc src -d lib --copy-files",
                build: "NODE_ENV=production npm run compile",
                dev: "swc src -d lib --copy-files -w",
                review: "tsc --emitDeclarationOnly",
                lint: "eslint --fix '{src,tests}/**/*.ts' --color --debug --no-error-on-unmatched-pattern",
                style: "prettier --write '{src,tests}/**/*.ts' --loglevel log --no-error-on-unmatched-pattern",
                test: "jest --config .jestrc.json --colors --passWithNoTests",
                qa: "npm run review && npm run lint && npm run style && npm test",
                compose: "docker compose up -d",
                recompose: "docker compose up --build --force-recreate -d",
                release: "docker build -f dockerfile.release -t typescript --build-arg TAG=18-alpine --build-arg PORT=80 . --no-cache --force-rm --pull",
                deploy: "docker run -d -p 80:80 --restart always --name typescript typescript",
                prepare: "husky install bin && git add bin/pre-commit && git add bin/pre-push",
            },
            dependencies: &[
                ("@swc/cli", "^0.1.57"),
                ("@swc/core", "^1.2.204"),
                ("dotenv", "^16.0.1"),
            ],
            dev_dependencies: &[
                ("@swc/jest", "^0.2.21"),
                ("@types/jest", "^28.1.4"),
                ("@types/node", "^18.0.3"),
                ("@typescript-eslint/eslint-plugin", "^5.30.4"),
                ("@typescript-eslint/parser", "^5.30.4"),
                ("chokidar", "^3.5.3"),
                ("eslint", "^8.17.0"),
                ("eslint-config-prettier", "^8.5.0"),
                ("husky", "^8.0.1"),
                ("jest", "^28.1.1"),
                ("lint-staged", "^13.0.2"),
                ("prettier", "^2.7.1"),
                ("typescript", "^4.7.4"),
            ],
        }
    }

    fn docs_url(&self) -> &'static str {
        "https://github.com/matriarx/typescript"
    }

    fn community_url(&self) -> &'static str {
        "https://discord.gg/matriarx"
    }

    fn support_urls(&self) -> Vec<&'static str> {
        vec![
            "https://github.com/sponsors/matriarx",
            "https://patreon.com/miamatriarx",
        ]
    }
}

#[derive(Parser, Debug)]
#[command(name = "create-typescript")]
#[command(about = "Bootstrap a new TypeScript project from the starter template")]
#[command(version)]
pub struct Args {
    /// Name of the project directory to create
    pub name: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    let config = TypeScriptConfig;

    let result = bootstrap_core::run(&config, args.name.as_deref()).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    match result {
        Ok(report) if report.succeeded() => Ok(()),
        Ok(_) => std::process::exit(1),
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bootstrap_core::ManifestConfig;

    #[test]
    fn test_manifest_template_carries_the_full_tables() {
        let template = TypeScriptConfig.manifest_template();
        assert_eq!(template.dependencies.len(), 3);
        assert_eq!(template.dev_dependencies.len(), 13);
        assert_eq!(template.entry_point, "lib/index.js");
    }

    #[test]
    fn test_generated_manifest_round_trips_the_project_name() {
        let template = TypeScriptConfig.manifest_template();
        let manifest = ManifestConfig::new("foo", &template);
        assert_eq!(manifest.name, "foo");
        assert_eq!(manifest.description, "Foo app");
        assert_eq!(
            manifest.keywords,
            vec!["foo", "javascript", "typescript"]
        );
    }

    #[test]
    fn test_template_is_pinned() {
        assert_eq!(TypeScriptConfig.template_tag(), "v0.0.4");
        assert!(TypeScriptConfig.template_url().ends_with(".git"));
    }
}
