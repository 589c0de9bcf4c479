//! Bundle pipeline
//!
//! Six ordered stages, each depending on the previous stage's filesystem
//! output: workspace reset, style compilation, markup minification,
//! asset copy, optional compression, reporting. Strictly sequential; the
//! first failing stage aborts the run, since a partial bundle is not a
//! valid deliverable.

use std::fs;

use crate::compress::gzip_file;
use crate::config::BuildConfig;
use crate::error::{BuildError, BuildResult};
use crate::markup::{minify_markup, MinifyOptions};
use crate::report::{ArtifactReport, BundleReport};
use crate::styles::StyleCompiler;

/// Progress events emitted as the pipeline advances.
///
/// The pipeline never prints; callers decide how to render these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    /// Stage 1: the output directory is being reset.
    SetupDist,
    /// Stage 2: the external CSS compiler is running.
    CompileStyles,
    /// Stage 3: the source document is being minified.
    MinifyMarkup,
    /// Stage 4: static assets are being copied.
    CopyAssets,
    /// The favicon was not found; the build continues without it.
    FaviconMissing,
    /// Stage 5: gzip variants are being written.
    Compress,
}

/// Unified pipeline for resetting, compiling, minifying, and packaging
/// the bundle.
pub struct BundlePipeline<C: StyleCompiler> {
    config: BuildConfig,
    compiler: C,
    minify_options: MinifyOptions,
}

impl<C: StyleCompiler> BundlePipeline<C> {
    pub fn new(config: BuildConfig, compiler: C) -> Self {
        Self {
            config,
            compiler,
            minify_options: MinifyOptions::default(),
        }
    }

    pub fn with_minify_options(mut self, options: MinifyOptions) -> Self {
        self.minify_options = options;
        self
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Run all stages in order, reporting progress through `on_event`.
    ///
    /// Returns the final size report on success.
    pub fn run(&self, mut on_event: impl FnMut(BuildEvent)) -> BuildResult<BundleReport> {
        on_event(BuildEvent::SetupDist);
        self.reset_dist()?;

        on_event(BuildEvent::CompileStyles);
        self.compile_styles()?;

        on_event(BuildEvent::MinifyMarkup);
        self.minify_document()?;

        on_event(BuildEvent::CopyAssets);
        if !self.copy_favicon()? {
            on_event(BuildEvent::FaviconMissing);
        }

        if self.config.gzip() {
            on_event(BuildEvent::Compress);
            self.compress_outputs()?;
        }

        self.measure()
    }

    /// Stage 1: remove and recreate the output directory.
    fn reset_dist(&self) -> BuildResult<()> {
        let dist = self.config.dist_dir();
        if dist.exists() {
            fs::remove_dir_all(&dist)?;
        }
        fs::create_dir_all(&dist)?;
        Ok(())
    }

    /// Stage 2: delegate to the external CSS compiler.
    fn compile_styles(&self) -> BuildResult<()> {
        let input = self.config.styles_src();
        if !input.exists() {
            return Err(BuildError::MissingInput { path: input });
        }
        self.compiler.compile(&input, &self.config.styles_out())
    }

    /// Stage 3: minify the source document.
    fn minify_document(&self) -> BuildResult<()> {
        let input = self.config.markup_src();
        if !input.exists() {
            return Err(BuildError::MissingInput { path: input });
        }
        let html = fs::read_to_string(&input)?;
        let minified = minify_markup(&html, &self.minify_options);
        fs::write(self.config.markup_out(), minified)?;
        Ok(())
    }

    /// Stage 4: copy the favicon if present.
    ///
    /// Returns `false` (without failing) when the favicon is absent; this
    /// is the only non-fatal branch in the pipeline.
    fn copy_favicon(&self) -> BuildResult<bool> {
        let favicon = self.config.favicon_src();
        if !favicon.exists() {
            return Ok(false);
        }
        fs::copy(&favicon, self.config.favicon_out())?;
        Ok(true)
    }

    /// Stage 5: write gzip variants of both outputs.
    fn compress_outputs(&self) -> BuildResult<()> {
        gzip_file(&self.config.styles_out())?;
        gzip_file(&self.config.markup_out())?;
        Ok(())
    }

    /// Stage 6: measure the produced artifacts.
    fn measure(&self) -> BuildResult<BundleReport> {
        let gzip = self.config.gzip();
        let artifacts = vec![
            ArtifactReport::measure("index.html", &self.config.markup_out(), gzip)?,
            ArtifactReport::measure("index.css", &self.config.styles_out(), gzip)?,
        ];
        Ok(BundleReport { artifacts })
    }
}
