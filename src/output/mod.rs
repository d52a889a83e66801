//! Output module for encoding crawl results as sitemaps
//!
//! This module handles:
//! - Sorting and chunking page records
//! - Writing sitemap-protocol XML (urlset and sitemap index)
//! - Gzip-compressing every urlset document to a sibling `.gz`
//! - Writing the browsable HTML table
//! - Recording crawl statistics

mod compress;
mod html;
pub mod stats;
mod types;
mod xml;

pub use compress::{gzip_bytes, write_gzip_sibling};
pub use html::{format_html_sitemap, write_html_sitemap};
pub use stats::{format_statistics, print_statistics, CrawlStatistics};
pub use types::{OutputError, OutputResult, SitemapSummary};
pub use xml::{render_sitemap_index, render_urlset, SITEMAP_NAMESPACE};

use crate::state::PageRecord;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Top-level sitemap file name
pub const SITEMAP_FILE: &str = "sitemap.xml";

/// HTML sitemap file name
pub const HTML_SITEMAP_FILE: &str = "sitemap.html";

/// Writes every sitemap artifact for `records` into `output_dir`
///
/// Records are sorted by `loc` and split into chunks of at most
/// `max_urls_per_sitemap`. One chunk is written as `sitemap.xml`; several
/// are written as `sitemap-{n}.xml` (1-based) with `sitemap.xml` as their
/// index. Each urlset document gets a `.gz` sibling (the index does not),
/// and `sitemap.html` is always written.
///
/// # Arguments
///
/// * `records` - Every recorded page
/// * `site_url` - The seed URL as entered, used to build index `loc`s
/// * `output_dir` - Directory to write into (created if missing)
/// * `max_urls_per_sitemap` - Chunk size, at least 1
/// * `generated` - Date stamped on sitemap index entries
///
/// # Returns
///
/// * `Ok(SitemapSummary)` - Everything was written
/// * `Err(OutputError)` - A file could not be written
pub fn write_sitemaps(
    mut records: Vec<PageRecord>,
    site_url: &str,
    output_dir: &Path,
    max_urls_per_sitemap: usize,
    generated: NaiveDate,
) -> OutputResult<SitemapSummary> {
    if max_urls_per_sitemap == 0 {
        return Err(OutputError::Write(
            "max_urls_per_sitemap must be at least 1".to_string(),
        ));
    }

    fs::create_dir_all(output_dir)?;
    records.sort_by(|a, b| a.loc.cmp(&b.loc));

    let mut summary = SitemapSummary::new();
    summary.url_count = records.len();

    let chunks: Vec<&[PageRecord]> = records.chunks(max_urls_per_sitemap).collect();
    summary.chunk_count = chunks.len();

    if chunks.len() > 1 {
        let site_url = site_url.trim_end_matches('/');
        let mut index_locs = Vec::with_capacity(chunks.len());

        for (i, chunk) in chunks.iter().enumerate() {
            let file_name = format!("sitemap-{}.xml", i + 1);
            write_xml_with_gzip(&output_dir.join(&file_name), &render_urlset(chunk)?, &mut summary)?;
            index_locs.push(format!("{}/{}.gz", site_url, file_name));
        }

        // The index itself stays uncompressed
        let index_path = output_dir.join(SITEMAP_FILE);
        fs::write(&index_path, render_sitemap_index(&index_locs, generated)?)?;
        summary.files.push(index_path);
        summary.index_written = true;

        tracing::info!(
            "Sitemap index generated with {} sitemaps containing {} URLs in {}",
            summary.chunk_count,
            summary.url_count,
            output_dir.display()
        );
    } else {
        write_xml_with_gzip(
            &output_dir.join(SITEMAP_FILE),
            &render_urlset(&records)?,
            &mut summary,
        )?;

        tracing::info!(
            "Sitemap generated with {} URLs in {}",
            summary.url_count,
            output_dir.display()
        );
    }

    let html_path = output_dir.join(HTML_SITEMAP_FILE);
    write_html_sitemap(&records, &html_path)?;
    summary.files.push(html_path);

    Ok(summary)
}

fn write_xml_with_gzip(path: &Path, xml: &[u8], summary: &mut SitemapSummary) -> OutputResult<()> {
    fs::write(path, xml)?;
    let gz_path = write_gzip_sibling(path, xml)?;

    tracing::debug!("Wrote {} and {}", path.display(), gz_path.display());
    summary.files.push(path.to_path_buf());
    summary.files.push(gz_path);
    Ok(())
}
