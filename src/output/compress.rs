//! Gzip compression of sitemap documents

use crate::output::types::OutputResult;
use flate2::write::GzEncoder;
use flate2::Compression;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Compresses `data` into a gzip stream
pub fn gzip_bytes(data: &[u8]) -> OutputResult<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Writes the gzip of `data` next to `xml_path` as `<xml_path>.gz`
///
/// Returns the path written.
pub fn write_gzip_sibling(xml_path: &Path, data: &[u8]) -> OutputResult<PathBuf> {
    let mut gz_path = xml_path.as_os_str().to_owned();
    gz_path.push(".gz");
    let gz_path = PathBuf::from(gz_path);

    fs::write(&gz_path, gzip_bytes(data)?)?;
    Ok(gz_path)
}
