//! Integration tests for the crawler and sitemap writer
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl-and-write cycle end-to-end.

use flate2::read::GzDecoder;
use sitemap_ripple::config::CrawlConfig;
use sitemap_ripple::crawler::crawl;
use sitemap_ripple::url::validate_seed_url;
use sitemap_ripple::{generate_sitemap, RunOutcome, SeedUrl};
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

/// Creates a test configuration fast enough for mock servers
fn create_test_config() -> CrawlConfig {
    CrawlConfig {
        max_concurrent_requests: 5,
        requests_per_second: 100,
        request_timeout_secs: 5,
        ..Default::default()
    }
}

fn html(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/html")
}

async fn mount_page(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html(body))
        .mount(server)
        .await;
}

/// Mounts a page that must never be requested
async fn mount_forbidden(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(html("<html><body>should not be fetched</body></html>"))
        .expect(0)
        .mount(server)
        .await;
}

async fn mount_robots(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path("/robots.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "text/plain"))
        .mount(server)
        .await;
}

/// Serves a page and remembers when it was first requested
struct ArrivalRecorder {
    arrived_at: Arc<Mutex<Option<Instant>>>,
}

impl Respond for ArrivalRecorder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        self.arrived_at
            .lock()
            .unwrap()
            .get_or_insert_with(Instant::now);
        html("<html><body>deep</body></html>")
    }
}

fn seed_for(server: &MockServer) -> SeedUrl {
    validate_seed_url(&server.uri()).expect("Failed to validate mock server URL")
}

fn gunzip(path: &Path) -> Vec<u8> {
    let mut out = Vec::new();
    GzDecoder::new(fs::File::open(path).expect("Failed to open gzip file"))
        .read_to_end(&mut out)
        .expect("Failed to decompress");
    out
}

#[tokio::test]
async fn test_full_crawl_writes_sitemap() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><head><title>Home</title></head><body>
        <a href="/page1">Page 1</a>
        <a href="/page2?utm=nav#top">Page 2</a>
        <a href="http://external.example/elsewhere">External</a>
        <a href="/admin/panel">Admin</a>
        <a href="/brochure.pdf">Brochure</a>
        </body></html>"#,
    )
    .await;

    mount_page(
        &mock_server,
        "/page1",
        r#"<html><body><a href="/">Home</a><a href="page2">Page 2</a></body></html>"#,
    )
    .await;

    // Linked from two pages, fetched once
    Mock::given(method("GET"))
        .and(path("/page2"))
        .respond_with(html("<html><body>Content 2</body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_forbidden(&mock_server, "/admin/panel").await;
    mount_forbidden(&mock_server, "/brochure.pdf").await;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_dir = temp_dir.path().join("site");
    let seed = seed_for(&mock_server);

    let outcome = generate_sitemap(&seed, create_test_config(), &output_dir)
        .await
        .expect("Sitemap generation failed");

    let RunOutcome::Written { summary, stats } = outcome else {
        panic!("Expected sitemap to be written");
    };

    assert_eq!(summary.url_count, 3);
    assert_eq!(summary.chunk_count, 1);
    assert!(!summary.index_written);
    assert_eq!(stats.records, 3);
    assert_eq!(stats.depth_breakdown.get(&0), Some(&1));
    assert_eq!(stats.depth_breakdown.get(&1), Some(&2));

    let xml = fs::read_to_string(output_dir.join("sitemap.xml")).expect("sitemap.xml missing");
    assert!(xml.contains(&format!("<loc>{}/</loc>", base_url)));
    assert!(xml.contains(&format!("<loc>{}/page1</loc>", base_url)));
    assert!(xml.contains(&format!("<loc>{}/page2</loc>", base_url)));
    assert!(!xml.contains("external.example"));
    assert!(!xml.contains("utm="));

    // Home page at depth 0, links at depth 1
    assert!(xml.contains("<priority>0.8</priority>"));
    assert!(xml.contains("<priority>0.7</priority>"));
    assert!(xml.contains("<changefreq>daily</changefreq>"));

    assert_eq!(gunzip(&output_dir.join("sitemap.xml.gz")), xml.as_bytes());

    let html = fs::read_to_string(output_dir.join("sitemap.html")).expect("sitemap.html missing");
    assert!(html.contains(&format!(r#"<a href="{}/page1">"#, base_url)));
}

#[tokio::test]
async fn test_canonical_alias_is_not_recorded() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nAllow: /").await;

    // Self-referencing canonical is still recorded
    mount_page(
        &mock_server,
        "/",
        r#"<html><head><link rel="canonical" href="/"></head>
        <body><a href="/copy">Copy</a></body></html>"#,
    )
    .await;

    mount_page(
        &mock_server,
        "/copy",
        r#"<html><head><link rel="canonical" href="/original"></head>
        <body><a href="/from-copy">Only linked from the alias</a></body></html>"#,
    )
    .await;

    mount_forbidden(&mock_server, "/original").await;
    mount_forbidden(&mock_server, "/from-copy").await;

    let result = crawl(&seed_for(&mock_server), create_test_config())
        .await
        .expect("Crawl failed");

    let locs: Vec<&str> = result.records.iter().map(|r| r.loc.as_str()).collect();
    assert_eq!(locs, vec![format!("{}/", base_url)]);

    assert_eq!(result.stats.canonical_aliases, 1);
    assert!(result.visited.contains(&format!("{}/copy", base_url)));
    assert!(result.visited.contains(&format!("{}/original", base_url)));
}

#[tokio::test]
async fn test_seed_failure_yields_empty_outcome() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_dir = temp_dir.path().join("site");

    let outcome = generate_sitemap(&seed_for(&mock_server), create_test_config(), &output_dir)
        .await
        .expect("Sitemap generation failed");

    match outcome {
        RunOutcome::Empty { stats } => {
            assert_eq!(stats.dispatched, 1);
            assert_eq!(stats.skipped, 1);
        }
        RunOutcome::Written { .. } => panic!("Expected an empty outcome"),
    }

    assert!(!output_dir.exists());
}

#[tokio::test]
async fn test_robots_txt_respect() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_robots(&mock_server, "User-agent: *\nDisallow: /private\n").await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><body>
        <a href="/public">Public</a>
        <a href="/private/secret">Secret</a>
        </body></html>"#,
    )
    .await;
    mount_page(&mock_server, "/public", "<html><body>Public</body></html>").await;
    mount_forbidden(&mock_server, "/private/secret").await;

    let result = crawl(&seed_for(&mock_server), create_test_config())
        .await
        .expect("Crawl failed");

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.stats.robots_denied, 1);
    // Denied URLs still count as visited
    assert!(result
        .visited
        .contains(&format!("{}/private/secret", base_url)));
}

#[tokio::test]
async fn test_missing_robots_txt_allows_everything() {
    let mock_server = MockServer::start().await;

    // No robots.txt mock: the server answers 404
    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/private/page">Page</a></body></html>"#,
    )
    .await;
    mount_page(&mock_server, "/private/page", "<html><body>ok</body></html>").await;

    let result = crawl(&seed_for(&mock_server), create_test_config())
        .await
        .expect("Crawl failed");

    assert_eq!(result.records.len(), 2);
    assert_eq!(result.stats.robots_denied, 0);
}

#[tokio::test]
async fn test_crawl_with_depth_limit() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/level1">Level 1</a></body></html>"#,
    )
    .await;
    mount_page(
        &mock_server,
        "/level1",
        r#"<html><body><a href="/level2">Level 2</a></body></html>"#,
    )
    .await;
    mount_forbidden(&mock_server, "/level2").await;

    let config = CrawlConfig {
        max_depth: 1,
        ..create_test_config()
    };

    let result = crawl(&seed_for(&mock_server), config)
        .await
        .expect("Crawl failed");

    assert_eq!(result.records.len(), 2);
    assert!(result.records.iter().all(|r| r.depth <= 1));
    assert_eq!(result.stats.generations, 2);
}

#[tokio::test]
async fn test_depth_zero_records_only_seed() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/next">Next</a></body></html>"#,
    )
    .await;
    mount_forbidden(&mock_server, "/next").await;

    let config = CrawlConfig {
        max_depth: 0,
        ..create_test_config()
    };

    let result = crawl(&seed_for(&mock_server), config)
        .await
        .expect("Crawl failed");

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.records[0].priority, "0.8");
}

#[tokio::test]
async fn test_content_type_handling() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "/",
        r#"<html><body>
        <a href="/data.json">Data</a>
        <a href="/missing">Missing</a>
        </body></html>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(r#"{"a": 1}"#, "application/json"),
        )
        .mount(&mock_server)
        .await;

    let result = crawl(&seed_for(&mock_server), create_test_config())
        .await
        .expect("Crawl failed");

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.stats.skipped, 2);
    assert_eq!(result.stats.dispatched, 3);
}

#[tokio::test]
async fn test_large_site_is_chunked_with_index() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body>
        <a href="/a">A</a><a href="/b">B</a><a href="/c">C</a><a href="/d">D</a>
        </body></html>"#,
    )
    .await;
    for route in ["/a", "/b", "/c", "/d"] {
        mount_page(&mock_server, route, "<html><body>leaf</body></html>").await;
    }

    let config = CrawlConfig {
        max_urls_per_sitemap: 2,
        ..create_test_config()
    };

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let output_dir = temp_dir.path().join("site");

    let outcome = generate_sitemap(&seed_for(&mock_server), config, &output_dir)
        .await
        .expect("Sitemap generation failed");

    let RunOutcome::Written { summary, .. } = outcome else {
        panic!("Expected sitemap to be written");
    };
    assert_eq!(summary.url_count, 5);
    assert_eq!(summary.chunk_count, 3);
    assert!(summary.index_written);

    let index = fs::read_to_string(output_dir.join("sitemap.xml")).expect("index missing");
    assert!(index.contains("<sitemapindex"));
    assert!(!output_dir.join("sitemap.xml.gz").exists());
    for n in 1..=3 {
        assert!(index.contains(&format!("<loc>{}/sitemap-{}.xml.gz</loc>", base_url, n)));

        let chunk_path = output_dir.join(format!("sitemap-{}.xml", n));
        let chunk = fs::read(&chunk_path).expect("chunk missing");
        assert!(String::from_utf8_lossy(&chunk).matches("<url>").count() <= 2);
        assert_eq!(gunzip(&output_dir.join(format!("sitemap-{}.xml.gz", n))), chunk);
    }

    // Sorted by loc across chunks: the root sorts first
    let first = fs::read_to_string(output_dir.join("sitemap-1.xml")).expect("chunk missing");
    assert!(first.contains(&format!("<loc>{}/</loc>", base_url)));
    assert!(first.contains(&format!("<loc>{}/a</loc>", base_url)));
}

#[tokio::test]
async fn test_next_depth_waits_for_whole_generation() {
    let mock_server = MockServer::start().await;
    let slow_delay = Duration::from_millis(800);

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/slow">Slow</a><a href="/fast">Fast</a></body></html>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(html("<html><body>slow</body></html>").set_delay(slow_delay))
        .mount(&mock_server)
        .await;

    mount_page(
        &mock_server,
        "/fast",
        r#"<html><body><a href="/deep">Deep</a></body></html>"#,
    )
    .await;

    let arrived_at = Arc::new(Mutex::new(None));
    Mock::given(method("GET"))
        .and(path("/deep"))
        .respond_with(ArrivalRecorder {
            arrived_at: Arc::clone(&arrived_at),
        })
        .expect(1)
        .mount(&mock_server)
        .await;

    let start = Instant::now();
    let result = crawl(&seed_for(&mock_server), create_test_config())
        .await
        .expect("Crawl failed");

    let deep_at = *arrived_at.lock().unwrap();
    let deep_at = deep_at.expect("Depth 2 page was never requested");

    // /fast finishes early, but /deep must wait for /slow
    assert!(
        deep_at.duration_since(start) >= slow_delay,
        "depth 2 fetch started after {:?}",
        deep_at.duration_since(start)
    );
    assert_eq!(result.records.len(), 4);
    assert_eq!(result.stats.generations, 3);
}

#[tokio::test]
async fn test_link_shared_within_generation_is_fetched_once() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        r#"<html><body><a href="/a">A</a><a href="/b">B</a></body></html>"#,
    )
    .await;
    mount_page(
        &mock_server,
        "/a",
        r#"<html><body><a href="/x?q=1">X</a></body></html>"#,
    )
    .await;
    mount_page(
        &mock_server,
        "/b",
        r#"<html><body><a href="/x#f">X</a></body></html>"#,
    )
    .await;

    Mock::given(method("GET"))
        .and(path("/x"))
        .respond_with(html("<html><body>x</body></html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let result = crawl(&seed_for(&mock_server), create_test_config())
        .await
        .expect("Crawl failed");

    assert_eq!(result.records.len(), 4);
    assert_eq!(
        result
            .records
            .iter()
            .filter(|r| r.loc == format!("{}/x", base_url))
            .count(),
        1
    );
    assert_eq!(result.stats.dispatched, result.visited.len() as u64);
}
