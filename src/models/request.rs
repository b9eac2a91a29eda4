//! Crawl request parameters.

use serde::{Deserialize, Serialize};

/// Caller-supplied parameters for one crawl invocation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlRequest {
    /// Crawl exactly this 1-based listing page, skipping pagination
    /// discovery
    pub page: Option<u32>,

    /// Stop visiting further pages once this many records are collected;
    /// the page that crosses the ceiling is kept whole
    pub max_laptops: Option<usize>,

    /// Include every brand instead of only the configured filter brand
    pub all_brands: bool,
}

impl CrawlRequest {
    /// Request for a full crawl of every page, filter brand only.
    pub fn full() -> Self {
        Self::default()
    }
}
