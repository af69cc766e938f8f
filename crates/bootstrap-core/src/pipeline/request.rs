//! Project request parsing

use crate::error::BootstrapError;

/// The validated project name, parsed from the single positional argument.
/// Immutable once parsed; performs no filesystem or network access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    name: String,
}

impl ProjectRequest {
    /// Parse the positional argument into a request. An absent or blank
    /// argument is a missing argument, not an empty project.
    pub fn parse(arg: Option<&str>) -> Result<Self, BootstrapError> {
        match arg {
            Some(name) if !name.trim().is_empty() => Ok(Self {
                name: name.to_string(),
            }),
            _ => Err(BootstrapError::MissingArgument),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
