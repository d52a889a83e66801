//! Crawler coordinator - main crawl orchestration logic
//!
//! The crawl advances in generations. Every URL at depth `d` is marked
//! visited, then fetched concurrently; the next generation is formed only
//! after the whole of generation `d` has finished. Fetch tasks never touch
//! shared state: the visited set and the record list are only updated
//! between generations, when the tasks' outcomes are merged.

use crate::config::CrawlConfig;
use crate::crawler::parser::parse_html;
use crate::crawler::scheduler::RateLimiter;
use crate::crawler::{build_http_client, fetch_url, FetchResult};
use crate::output::CrawlStatistics;
use crate::robots::{can_fetch, load_policy, RobotsPolicy};
use crate::state::{FrontierItem, PageRecord, VisitedSet};
use crate::url::{canonicalize, LinkFilter, SeedUrl};
use crate::SitemapError;
use chrono::NaiveDate;
use futures::future::join_all;
use reqwest::Client;
use std::time::Instant;
use url::Url;

/// What fetching one frontier URL produced
#[derive(Debug)]
pub enum PageOutcome {
    /// An HTML page was recorded, with the links it contributes
    Recorded {
        record: PageRecord,
        discovered: Vec<FrontierItem>,
    },

    /// The page declared a different canonical URL; nothing is recorded
    Alias { canonical: Url },

    /// Disallowed by robots.txt; never requested
    RobotsDenied,

    /// Non-200 status or non-HTML content
    Skipped,

    /// Transport error
    Failed,
}

/// Everything a finished crawl hands to the sitemap encoder
#[derive(Debug)]
pub struct CrawlResult {
    /// One record per crawled HTML page, in discovery order
    pub records: Vec<PageRecord>,

    /// Counters for the run
    pub stats: CrawlStatistics,

    /// Every URL scheduled or aliased during the run
    pub visited: VisitedSet,
}

/// Main crawler coordinator structure
///
/// Owns the visited set and the record accumulator for exactly one run.
pub struct Coordinator {
    config: CrawlConfig,
    client: Client,
    limiter: RateLimiter,
    filter: LinkFilter,
    seed: Url,
    crawl_date: NaiveDate,
    robots: Option<RobotsPolicy>,
    visited: VisitedSet,
    records: Vec<PageRecord>,
    stats: CrawlStatistics,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(SitemapError)` - The HTTP client could not be built
    pub fn new(seed: &SeedUrl, config: CrawlConfig) -> Result<Self, SitemapError> {
        let client = build_http_client(&config)?;
        let limiter = RateLimiter::new(config.max_concurrent_requests, config.requests_per_second);
        let filter = LinkFilter::new(&config);

        Ok(Self {
            config,
            client,
            limiter,
            filter,
            seed: seed.url().clone(),
            crawl_date: chrono::Local::now().date_naive(),
            robots: None,
            visited: VisitedSet::new(),
            records: Vec::new(),
            stats: CrawlStatistics::default(),
        })
    }

    /// Overrides the `lastmod` date stamped on records
    pub fn with_crawl_date(mut self, crawl_date: NaiveDate) -> Self {
        self.crawl_date = crawl_date;
        self
    }

    /// Runs the crawl to completion
    ///
    /// 1. Loads robots.txt for the seed host (fail-open)
    /// 2. Admits the current generation: drops items past `max_depth`,
    ///    marks the rest visited and removes duplicates
    /// 3. Fetches the whole generation concurrently and waits for all of it
    /// 4. Merges outcomes and forms the next generation
    /// 5. Stops when a generation is empty
    pub async fn run(mut self) -> CrawlResult {
        tracing::info!("Starting crawl of {}", self.seed);
        let start_time = Instant::now();

        self.robots = load_policy(&self.client, &self.seed).await;

        let mut frontier = vec![FrontierItem::new(self.seed.clone(), 0)];

        loop {
            let generation = self.admit_generation(frontier);
            let Some(depth) = generation.first().map(|item| item.depth) else {
                tracing::info!("Frontier is empty, crawl complete");
                break;
            };

            tracing::info!(
                "Generation {}: fetching {} URLs at depth {}",
                self.stats.generations,
                generation.len(),
                depth
            );
            self.stats.generations += 1;
            self.stats.dispatched += generation.len() as u64;

            // Barrier: no depth d+1 fetch starts before all of depth d is done.
            let outcomes = join_all(generation.iter().map(|item| self.process_url(item))).await;

            frontier = self.merge(outcomes);
        }

        tracing::info!(
            "Crawl completed: {} pages recorded, {} URLs visited in {:?}",
            self.records.len(),
            self.visited.len(),
            start_time.elapsed()
        );

        CrawlResult {
            records: self.records,
            stats: self.stats,
            visited: self.visited,
        }
    }

    /// Filters a candidate generation down to what will be fetched
    ///
    /// Items beyond `max_depth` are dropped. The rest are marked visited
    /// here, before any fetch starts; an item whose URL was already visited
    /// (including earlier in this same generation) is dropped.
    fn admit_generation(&mut self, frontier: Vec<FrontierItem>) -> Vec<FrontierItem> {
        let max_depth = self.config.max_depth;

        frontier
            .into_iter()
            .filter(|item| {
                if item.depth > max_depth {
                    tracing::debug!("Skipping {} - depth {} exceeds limit", item.url, item.depth);
                    return false;
                }
                self.visited.insert(item.url.as_str())
            })
            .collect()
    }

    /// Fetches one URL and extracts its record and links
    ///
    /// Every failure is contained here and reported as an outcome.
    async fn process_url(&self, item: &FrontierItem) -> PageOutcome {
        let url = item.url.as_str();

        if !can_fetch(self.robots.as_ref(), url) {
            tracing::info!("Skipping {} - disallowed by robots.txt", url);
            return PageOutcome::RobotsDenied;
        }

        let fetched = {
            let _permit = match self.limiter.acquire().await {
                Ok(permit) => permit,
                Err(e) => {
                    tracing::error!("Error crawling {}: {}", url, e);
                    return PageOutcome::Failed;
                }
            };
            fetch_url(&self.client, url).await
        };

        match fetched {
            FetchResult::Success {
                final_url,
                content_type,
                body,
            } => {
                if final_url != url {
                    tracing::debug!("{} redirected to {}", url, final_url);
                }
                tracing::debug!("Fetched {} ({}, {} bytes)", url, content_type, body.len());
                self.extract(item, &body)
            }
            FetchResult::ContentMismatch { content_type } => {
                tracing::debug!("Skipping {} - not HTML ({})", url, content_type);
                PageOutcome::Skipped
            }
            FetchResult::HttpError { status_code } => {
                tracing::debug!("Skipping {} - HTTP {}", url, status_code);
                PageOutcome::Skipped
            }
            FetchResult::NetworkError { error } => {
                tracing::error!("Error crawling {}: {}", url, error);
                PageOutcome::Failed
            }
        }
    }

    /// Turns a fetched HTML body into an outcome
    ///
    /// A canonical link to another same-host URL makes the page an alias.
    /// The canonical target is not run through the link filter.
    fn extract(&self, item: &FrontierItem, body: &str) -> PageOutcome {
        let parsed = parse_html(body);

        let canonical = parsed
            .canonical
            .as_deref()
            .and_then(|href| canonicalize(href, &item.url));
        if let Some(canonical) = canonical {
            if canonical != item.url {
                tracing::debug!("{} declares canonical {}", item.url, canonical);
                return PageOutcome::Alias { canonical };
            }
        }

        let record = PageRecord::new(item.url.as_str(), item.depth, self.crawl_date);

        let discovered = parsed
            .links
            .iter()
            .filter_map(|href| canonicalize(href, &item.url))
            .filter(|url| !self.visited.contains(url.as_str()) && self.filter.accepts(url.as_str()))
            .map(|url| item.child(url))
            .collect();

        PageOutcome::Recorded { record, discovered }
    }

    /// Folds a generation's outcomes into the run state
    ///
    /// Returns the next generation's candidates: every discovered URL not
    /// visited by now, duplicates included (admission removes them).
    fn merge(&mut self, outcomes: Vec<PageOutcome>) -> Vec<FrontierItem> {
        let mut next = Vec::new();

        for outcome in outcomes {
            match outcome {
                PageOutcome::Recorded { record, discovered } => {
                    self.stats.record_page(record.depth);
                    self.records.push(record);
                    next.extend(discovered);
                }
                PageOutcome::Alias { canonical } => {
                    self.stats.canonical_aliases += 1;
                    self.visited.insert(canonical.as_str());
                }
                PageOutcome::RobotsDenied => self.stats.robots_denied += 1,
                PageOutcome::Skipped => self.stats.skipped += 1,
                PageOutcome::Failed => self.stats.failed += 1,
            }
        }

        next.retain(|item| !self.visited.contains(item.url.as_str()));
        next
    }
}
