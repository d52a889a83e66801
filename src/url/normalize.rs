use crate::UrlError;
use url::Url;

/// Href prefixes that never point at a crawlable page
const SKIPPED_PREFIXES: &[&str] = &["javascript:", "mailto:", "tel:", "data:"];

/// A validated seed URL
///
/// Keeps the user's input (trailing slash stripped) for building sitemap
/// locations, alongside the parsed form the crawl starts from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedUrl {
    raw: String,
    url: Url,
    host: String,
}

impl SeedUrl {
    /// The seed as given, without trailing slashes
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The crawl start URL, query and fragment removed
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The seed's `host[:port]`, also used as the output directory name
    pub fn host_key(&self) -> &str {
        &self.host
    }
}

/// Validates a seed URL supplied by the user
///
/// The input must be an absolute http(s) URL with a host. Trailing slashes
/// are stripped.
///
/// # Examples
///
/// ```
/// use sitemap_ripple::url::validate_seed_url;
///
/// let seed = validate_seed_url("https://example.com/").unwrap();
/// assert_eq!(seed.as_str(), "https://example.com");
/// assert_eq!(seed.host_key(), "example.com");
///
/// assert!(validate_seed_url("example.com").is_err());
/// ```
pub fn validate_seed_url(input: &str) -> Result<SeedUrl, UrlError> {
    let raw = input.trim().trim_end_matches('/').to_string();

    let mut url = Url::parse(&raw).map_err(|e| {
        UrlError::Parse(format!(
            "{} (please include protocol, http:// or https://)",
            e
        ))
    })?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            url.scheme()
        )));
    }

    let host = host_key(&url).ok_or(UrlError::MissingHost)?;

    url.set_query(None);
    url.set_fragment(None);

    Ok(SeedUrl { raw, url, host })
}

/// Returns the lowercase `host[:port]` of a URL
///
/// Default ports are omitted, so `https://example.com:443/` and
/// `https://example.com/` share a key.
pub fn host_key(url: &Url) -> Option<String> {
    let host = url.host_str()?;
    if host.is_empty() {
        return None;
    }

    let host = host.to_lowercase();
    Some(match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host,
    })
}

/// Resolves a link found on `page_url` to its canonical absolute form
///
/// # Canonicalization Steps
///
/// 1. Skip empty, fragment-only and non-navigational (`javascript:`,
///    `mailto:`, `tel:`, `data:`) hrefs
/// 2. Resolve against the page URL
/// 3. Keep only http(s) results
/// 4. Remove the query string and fragment
/// 5. Drop the link if its host differs from the page's host
///
/// Exclusion patterns and extensions are not checked here; see
/// [`LinkFilter`](crate::url::LinkFilter).
///
/// # Examples
///
/// ```
/// use url::Url;
/// use sitemap_ripple::url::canonicalize;
///
/// let page = Url::parse("https://example.com/docs/").unwrap();
/// let url = canonicalize("intro.html?x=1#top", &page).unwrap();
/// assert_eq!(url.as_str(), "https://example.com/docs/intro.html");
///
/// assert!(canonicalize("https://external.com/page", &page).is_none());
/// ```
pub fn canonicalize(href: &str, page_url: &Url) -> Option<Url> {
    let href = href.trim();

    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let lowered = href.to_ascii_lowercase();
    if SKIPPED_PREFIXES.iter().any(|p| lowered.starts_with(p)) {
        return None;
    }

    let mut url = page_url.join(href).ok()?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return None;
    }

    url.set_query(None);
    url.set_fragment(None);

    if host_key(&url)? != host_key(page_url)? {
        return None;
    }

    Some(url)
}
