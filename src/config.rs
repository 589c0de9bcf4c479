//! Build configuration
//!
//! The source and output layout is fixed; only the project root and the
//! gzip flag vary. The flag is carried here explicitly (not read from a
//! global) so each stage stays unit-testable.

use std::path::{Path, PathBuf};

/// Configuration for a single bundle build.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    project_root: PathBuf,
    gzip: bool,
}

impl BuildConfig {
    /// Create a configuration rooted at `project_root` with gzip disabled.
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
            gzip: false,
        }
    }

    /// Enable or disable gzip variants of the outputs.
    pub fn with_gzip(mut self, gzip: bool) -> Self {
        self.gzip = gzip;
        self
    }

    pub fn gzip(&self) -> bool {
        self.gzip
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Source stylesheet: `src/styles.css`
    pub fn styles_src(&self) -> PathBuf {
        self.project_root.join("src").join("styles.css")
    }

    /// Source document: `src/index.html`
    pub fn markup_src(&self) -> PathBuf {
        self.project_root.join("src").join("index.html")
    }

    /// Optional favicon at the project root.
    pub fn favicon_src(&self) -> PathBuf {
        self.project_root.join("favicon.ico")
    }

    /// Output directory, fully rebuilt each run.
    pub fn dist_dir(&self) -> PathBuf {
        self.project_root.join("dist")
    }

    /// Compiled stylesheet: `dist/index.css`
    pub fn styles_out(&self) -> PathBuf {
        self.dist_dir().join("index.css")
    }

    /// Minified document: `dist/index.html`
    pub fn markup_out(&self) -> PathBuf {
        self.dist_dir().join("index.html")
    }

    pub fn favicon_out(&self) -> PathBuf {
        self.dist_dir().join("favicon.ico")
    }
}
