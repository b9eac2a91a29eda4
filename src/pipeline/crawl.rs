// src/pipeline/crawl.rs

//! Crawl orchestration.
//!
//! Resolves the page range, drives the listing fetcher across pages in
//! increasing order, and enforces the caller's result-count ceiling.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::{Config, CrawlRequest, Laptop};
use crate::services::{ListingPageFetcher, PaginationResolver};

/// Summary of a crawl run: records plus diagnostics.
#[derive(Debug, Default)]
pub struct CrawlOutcome {
    pub laptops: Vec<Laptop>,
    pub pages_visited: usize,
    pub page_failures: usize,
    pub detail_failures: usize,
    /// Option labels seen across all detail pages, in crawl order
    pub option_labels: Vec<String>,
}

/// Run one crawl.
///
/// With `request.page` set, exactly that page is visited and pagination
/// discovery is skipped entirely; otherwise pages 1 through the discovered
/// last page are visited in order. A page that fails or exceeds the page
/// deadline degrades to zero records and the crawl continues. Iteration
/// stops early once `request.max_laptops` is reached; the page that crosses
/// the ceiling is kept whole.
pub async fn run_crawl(
    config: &Arc<Config>,
    client: &reqwest::Client,
    request: &CrawlRequest,
) -> Result<CrawlOutcome> {
    if request.page == Some(0) {
        return Err(AppError::validation("page must be >= 1"));
    }

    let collection_date = Utc::now().format("%Y-%m-%d").to_string();
    let fetcher = ListingPageFetcher::new(Arc::clone(config), client.clone(), collection_date);

    let pages: Vec<u32> = match request.page {
        Some(page) => vec![page],
        None => {
            let resolver = PaginationResolver::new(Arc::clone(config), client.clone());
            let last = resolver.resolve_last_page().await;
            (1..=last).collect()
        }
    };

    log::info!("crawling {} listing page(s)", pages.len());

    let deadline = Duration::from_secs(config.crawler.page_deadline_secs);
    let mut outcome = CrawlOutcome::default();

    for page in pages {
        let url = format!("{}?page={}", config.site.listing_url, page);
        log::info!("extracting page {page}...");

        outcome.pages_visited += 1;
        match tokio::time::timeout(deadline, fetcher.fetch_page(&url, request.all_brands)).await {
            Ok(Ok(page_outcome)) => {
                outcome.detail_failures += page_outcome.detail_failures;
                outcome.option_labels.extend(page_outcome.option_labels);
                outcome.laptops.extend(page_outcome.laptops);
            }
            Ok(Err(e)) => {
                log::error!("page {page} failed, skipping: {e}");
                outcome.page_failures += 1;
            }
            Err(_) => {
                log::error!(
                    "page {page} exceeded the {}s deadline, skipping",
                    deadline.as_secs()
                );
                outcome.page_failures += 1;
            }
        }

        if let Some(max) = request.max_laptops {
            if outcome.laptops.len() >= max {
                log::info!(
                    "reached {} of {} requested laptops, stopping",
                    outcome.laptops.len(),
                    max
                );
                break;
            }
        }
    }

    Ok(outcome)
}
