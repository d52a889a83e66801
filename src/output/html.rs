//! Browsable HTML sitemap

use crate::output::types::OutputResult;
use crate::state::PageRecord;
use std::fs::File;
use std::io::Write;
use std::path::Path;

const STYLE: &str = "\
        body { font-family: Arial, sans-serif; margin: 20px; }
        h1 { text-align: center; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
        tr:nth-child(even) { background-color: #f9f9f9; }
        a { color: #0066cc; text-decoration: none; }
        a:hover { text-decoration: underline; }
        @media (max-width: 600px) { table, th, td { font-size: 14px; } }
";

/// Writes the HTML sitemap to `output_path`
///
/// # Arguments
///
/// * `records` - Records to list, already sorted by `loc`
/// * `output_path` - Path where the HTML file should be written
pub fn write_html_sitemap(records: &[PageRecord], output_path: &Path) -> OutputResult<()> {
    let html = format_html_sitemap(records);

    let mut file = File::create(output_path)?;
    file.write_all(html.as_bytes())?;

    tracing::info!("HTML sitemap generated at {}", output_path.display());
    Ok(())
}

/// Formats records as a table: loc (as a link), lastmod, changefreq, priority
pub fn format_html_sitemap(records: &[PageRecord]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("    <meta charset=\"UTF-8\">\n");
    html.push_str(
        "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str("    <title>Sitemap</title>\n");
    html.push_str("    <style>\n");
    html.push_str(STYLE);
    html.push_str("    </style>\n</head>\n<body>\n");
    html.push_str("    <h1>Sitemap</h1>\n    <table>\n");
    html.push_str("        <tr>\n");
    html.push_str("            <th>URL</th>\n");
    html.push_str("            <th>Last Modified</th>\n");
    html.push_str("            <th>Change Frequency</th>\n");
    html.push_str("            <th>Priority</th>\n");
    html.push_str("        </tr>\n");

    for record in records {
        let href = html_escape::encode_double_quoted_attribute(&record.loc);
        let text = html_escape::encode_text(&record.loc);

        html.push_str("        <tr>\n");
        html.push_str(&format!(
            "            <td><a href=\"{}\">{}</a></td>\n",
            href, text
        ));
        html.push_str(&format!("            <td>{}</td>\n", record.lastmod_string()));
        html.push_str(&format!("            <td>{}</td>\n", record.changefreq));
        html.push_str(&format!(
            "            <td>{}</td>\n",
            html_escape::encode_text(&record.priority)
        ));
        html.push_str("        </tr>\n");
    }

    html.push_str("    </table>\n</body>\n</html>\n");
    html
}
