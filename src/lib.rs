//! Sitepack - static web bundle builder
//!
//! Sitepack assembles a deployable bundle from a fixed project layout:
//! it compiles the stylesheet through an external CSS toolchain, minifies
//! the HTML document, copies the favicon when present, optionally writes
//! gzip variants of the outputs, and reports artifact sizes.

pub mod compress;
pub mod config;
pub mod error;
pub mod markup;
pub mod pipeline;
pub mod report;
pub mod styles;

// Re-exports for convenience
pub use compress::{gzip_bytes, gzip_file};
pub use config::BuildConfig;
pub use error::{BuildError, BuildResult};
pub use markup::{minify_markup, MinifyOptions};
pub use pipeline::{BuildEvent, BundlePipeline};
pub use report::{ArtifactReport, BundleReport};
pub use styles::{StyleCompiler, TailwindCli};
