//! Gzip compression for bundle outputs
//!
//! Whole-buffer compression at the default level. Bundle assets are
//! small, so nothing here streams.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::BuildResult;

/// Gzip a byte buffer at the default compression level.
pub fn gzip_bytes(data: &[u8]) -> BuildResult<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Gzip a file in place, writing a `.gz` sibling.
///
/// Returns the path of the compressed file.
pub fn gzip_file(path: &Path) -> BuildResult<PathBuf> {
    let content = fs::read(path)?;
    let compressed = gzip_bytes(&content)?;

    let mut gz_path = path.as_os_str().to_owned();
    gz_path.push(".gz");
    let gz_path = PathBuf::from(gz_path);

    fs::write(&gz_path, compressed)?;
    Ok(gz_path)
}
