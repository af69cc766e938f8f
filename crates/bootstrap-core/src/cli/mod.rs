//! Terminal front-end using cliclack (Charm-style inline log lines)
//!
//! This module is optional and only available when the `cli` feature is
//! enabled.

#[cfg(feature = "cli")]
mod run;

#[cfg(feature = "cli")]
pub use run::run;
