//! Template retrieval and materialization

pub mod fetcher;
pub mod materializer;

pub use fetcher::{GitFetcher, TemplateFetcher};
pub use materializer::materialize;
