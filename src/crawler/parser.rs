//! HTML parser for extracting the canonical link and anchors
//!
//! Only two queries are made of a page: the `href` of its
//! `<link rel="canonical">` element, and the `href` of every `<a>`.

use scraper::{Html, Selector};

/// Extracted information from an HTML page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedPage {
    /// Raw `href` of the first canonical link element, if any
    pub canonical: Option<String>,

    /// Raw `href` of every anchor, in document order
    pub links: Vec<String>,
}

/// Parses HTML content and extracts the canonical href and anchor hrefs
///
/// Hrefs are returned as written; resolving them is left to
/// [`canonicalize`](crate::url::canonicalize).
///
/// # Example
///
/// ```
/// use sitemap_ripple::crawler::parse_html;
///
/// let html = r#"<html><head><link rel="canonical" href="/home"></head>
///               <body><a href="/page">Link</a></body></html>"#;
/// let parsed = parse_html(html);
/// assert_eq!(parsed.canonical.as_deref(), Some("/home"));
/// assert_eq!(parsed.links, vec!["/page".to_string()]);
/// ```
pub fn parse_html(html: &str) -> ParsedPage {
    let document = Html::parse_document(html);

    ParsedPage {
        canonical: extract_canonical(&document),
        links: extract_links(&document),
    }
}

/// Extracts the canonical link `href`
fn extract_canonical(document: &Html) -> Option<String> {
    let selector = Selector::parse(r#"link[rel~="canonical"][href]"#).ok()?;

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .map(|href| href.trim().to_string())
        .find(|href| !href.is_empty())
}

/// Extracts the `href` of every anchor
fn extract_links(document: &Html) -> Vec<String> {
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                links.push(href.to_string());
            }
        }
    }

    links
}
