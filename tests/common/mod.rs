//! Common test utilities for Sitepack integration tests.
//!
//! Provides:
//! - `TestProject`: an isolated project layout in a temp directory
//! - `FakeStyleCompiler`: a deterministic stand-in for the Tailwind CLI
//!   so the suite never shells out to a real toolchain

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use sitepack::{BuildConfig, BuildResult, BundlePipeline, StyleCompiler};

/// Source fixtures matching the spec's end-to-end scenario.
pub const SIMPLE_CSS: &str = "body { color: red; }";
pub const SIMPLE_HTML: &str = "<!DOCTYPE html><html><body>   <p>Hi</p>   </body></html>";

/// Deterministic fake CSS compiler.
///
/// Collapses whitespace and strips the separators a real minifier would,
/// without invoking any subprocess.
pub struct FakeStyleCompiler;

impl StyleCompiler for FakeStyleCompiler {
    fn name(&self) -> &'static str {
        "fake-css"
    }

    fn compile(&self, input: &Path, output: &Path) -> BuildResult<()> {
        let css = fs::read_to_string(input)?;
        fs::write(output, fake_minify_css(&css))?;
        Ok(())
    }
}

pub fn fake_minify_css(css: &str) -> String {
    let collapsed = css.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .replace(" {", "{")
        .replace("{ ", "{")
        .replace(" }", "}")
        .replace("} ", "}")
        .replace(": ", ":")
        .replace("; ", ";")
        .replace(";}", "}")
}

/// Isolated project directory with the fixed source layout.
pub struct TestProject {
    root: TempDir,
}

impl TestProject {
    /// Create a project containing the default stylesheet and document.
    pub fn new() -> Self {
        Self::with_sources(SIMPLE_CSS, SIMPLE_HTML)
    }

    /// Create a project with specific source contents.
    pub fn with_sources(css: &str, html: &str) -> Self {
        let root = TempDir::new().expect("failed to create temp project");
        fs::create_dir_all(root.path().join("src")).expect("failed to create src/");
        fs::write(root.path().join("src/styles.css"), css).expect("failed to write styles.css");
        fs::write(root.path().join("src/index.html"), html).expect("failed to write index.html");
        Self { root }
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path relative to the project root.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Drop a favicon at the project root.
    pub fn write_favicon(&self, bytes: &[u8]) {
        fs::write(self.path("favicon.ico"), bytes).expect("failed to write favicon");
    }

    /// Build a pipeline over this project using the fake compiler.
    pub fn pipeline(&self, gzip: bool) -> BundlePipeline<FakeStyleCompiler> {
        let config = BuildConfig::new(self.root()).with_gzip(gzip);
        BundlePipeline::new(config, FakeStyleCompiler)
    }

    /// Read a produced artifact as bytes.
    pub fn read_dist(&self, name: &str) -> Vec<u8> {
        let path = self.path("dist").join(name);
        fs::read(&path).unwrap_or_else(|e| panic!("failed to read dist/{}: {}", name, e))
    }
}
