//! Pipeline entry points for crawler operations.
//!
//! - `run_crawl`: Crawl listing pages and assemble laptop records

pub mod crawl;

pub use crawl::{CrawlOutcome, run_crawl};
