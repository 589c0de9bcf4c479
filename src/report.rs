//! Bundle size reporting
//!
//! Sizes are reported in kilobytes with two decimals; compression
//! reduction as `(original - compressed) / original * 100`, one decimal.

use std::fs;
use std::path::Path;

use crate::error::BuildResult;

/// Size figures for one produced artifact.
#[derive(Debug, Clone)]
pub struct ArtifactReport {
    name: String,
    size: u64,
    gzip_size: Option<u64>,
}

impl ArtifactReport {
    /// Measure an output file, and its `.gz` sibling when `gzipped` is set.
    pub fn measure(name: impl Into<String>, path: &Path, gzipped: bool) -> BuildResult<Self> {
        let size = fs::metadata(path)?.len();
        let gzip_size = if gzipped {
            let mut gz_path = path.as_os_str().to_owned();
            gz_path.push(".gz");
            Some(fs::metadata(Path::new(&gz_path))?.len())
        } else {
            None
        };
        Ok(Self {
            name: name.into(),
            size,
            gzip_size,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn gzip_size(&self) -> Option<u64> {
        self.gzip_size
    }

    /// Uncompressed size in KB, two decimals.
    pub fn size_kb(&self) -> String {
        format_kb(self.size)
    }

    /// Compressed size in KB, two decimals.
    pub fn gzip_kb(&self) -> Option<String> {
        self.gzip_size.map(format_kb)
    }

    /// Percentage size reduction from gzip, one decimal.
    pub fn reduction(&self) -> Option<String> {
        self.gzip_size
            .map(|gz| format!("{:.1}", reduction_percent(self.size, gz)))
    }

    /// Render the report line for this artifact.
    pub fn render(&self) -> String {
        match (self.gzip_kb(), self.reduction()) {
            (Some(gz), Some(pct)) => format!(
                "   - {}: {} KB ({} KB gzipped, {}% smaller)",
                self.name,
                self.size_kb(),
                gz,
                pct
            ),
            _ => format!("   - {}: {} KB", self.name, self.size_kb()),
        }
    }
}

/// The final size report for a completed build.
#[derive(Debug, Clone)]
pub struct BundleReport {
    pub artifacts: Vec<ArtifactReport>,
}

/// Bytes to KB with two decimals.
pub fn format_kb(bytes: u64) -> String {
    format!("{:.2}", bytes as f64 / 1024.0)
}

/// Percentage reduction of `compressed` relative to `original`.
pub fn reduction_percent(original: u64, compressed: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    (original as f64 - compressed as f64) / original as f64 * 100.0
}
