//! Host tool detection, environment validation and dependency installation

pub mod check;
pub mod installer;
pub mod validate;

pub use check::{
    check_git, check_node, check_npm, parse_version, EnvironmentSnapshot, HostProbe, RuntimeInfo,
    VersionProbe,
};
pub use installer::{NpmInstaller, PackageInstaller};
pub use validate::validate;
