//! Error types for Sitepack
//!
//! Uses `thiserror` for library errors; the binary surfaces them through
//! `anyhow` and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Sitepack operations
pub type BuildResult<T> = Result<T, BuildError>;

/// Main error type for Sitepack operations
///
/// The taxonomy is deliberately flat: every variant aborts the build.
/// The only non-fatal condition (a missing favicon) never becomes an
/// error at all - the pipeline reports it as a warning event instead.
#[derive(Error, Debug)]
pub enum BuildError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A required source file is missing
    #[error("missing input file: {path} - expected it at the project root layout")]
    MissingInput { path: PathBuf },

    /// The external CSS compiler failed or could not be launched
    #[error("style compilation failed: {message}")]
    StyleCompiler { message: String },
}
