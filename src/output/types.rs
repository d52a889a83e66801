//! Output error and summary types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while writing sitemap artifacts
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Failed to write output: {0}")]
    Write(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// What `write_sitemaps` produced
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SitemapSummary {
    /// Total page records written
    pub url_count: usize,

    /// Number of urlset documents
    pub chunk_count: usize,

    /// Whether `sitemap.xml` is a sitemap index
    pub index_written: bool,

    /// Every file written, in write order
    pub files: Vec<PathBuf>,
}

impl SitemapSummary {
    /// Creates a new empty summary
    pub fn new() -> Self {
        Self::default()
    }
}
