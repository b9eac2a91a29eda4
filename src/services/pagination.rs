// src/services/pagination.rs

//! Listing pagination discovery.
//!
//! The listing root carries a pagination control whose last link is a
//! "next" arrow; the highest page number is the link just before it.

use std::sync::Arc;

use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::utils::http;

/// Service for resolving the listing's page count.
pub struct PaginationResolver {
    config: Arc<Config>,
    client: reqwest::Client,
}

impl PaginationResolver {
    /// Create a new pagination resolver.
    pub fn new(config: Arc<Config>, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Resolve the highest listing page number.
    ///
    /// Never fails visibly: a fetch failure, a missing pagination control,
    /// or unparseable link text all degrade to 1 (single-page site).
    pub async fn resolve_last_page(&self) -> u32 {
        match self.try_resolve().await {
            Ok(last) => last,
            Err(e) => {
                log::warn!("pagination discovery failed, assuming one page: {e}");
                1
            }
        }
    }

    async fn try_resolve(&self) -> Result<u32> {
        let url = &self.config.site.listing_url;
        let html = http::fetch_page(&self.client, url, &self.config.crawler).await?;
        parse_last_page(&html, &self.config)
    }
}

/// Parse the highest page number out of the listing root body.
///
/// The true last `a.page-link` is the "next" control, so the page count is
/// the text of the second-to-last link.
fn parse_last_page(html: &str, config: &Config) -> Result<u32> {
    let selectors = &config.site.selectors;
    let pagination_sel = parse_selector(&selectors.pagination)?;
    let page_link_sel = parse_selector(&selectors.page_link)?;

    let document = Html::parse_document(html);
    let Some(pagination) = document.select(&pagination_sel).next() else {
        return Ok(1);
    };

    let links: Vec<String> = pagination
        .select(&page_link_sel)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect();

    let Some(last_text) = links.len().checked_sub(2).and_then(|i| links.get(i)) else {
        return Ok(1);
    };

    let last = last_text
        .parse::<u32>()
        .map_err(|e| AppError::parse("pagination page link", e))?;
    Ok(last.max(1))
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pagination_html(links: &[&str]) -> String {
        let items: String = links
            .iter()
            .map(|text| format!("<li class=\"page-item\"><a class=\"page-link\">{text}</a></li>"))
            .collect();
        format!("<html><body><ul class=\"pagination\">{items}</ul></body></html>")
    }

    #[test]
    fn takes_second_to_last_link() {
        let html = pagination_html(&["1", "2", "3", "20", "›"]);
        assert_eq!(parse_last_page(&html, &Config::default()).unwrap(), 20);
    }

    #[test]
    fn missing_control_means_one_page() {
        let html = "<html><body><h1>Laptops</h1></body></html>";
        assert_eq!(parse_last_page(html, &Config::default()).unwrap(), 1);
    }

    #[test]
    fn single_link_control_means_one_page() {
        let html = pagination_html(&["›"]);
        assert_eq!(parse_last_page(&html, &Config::default()).unwrap(), 1);
    }

    #[test]
    fn non_numeric_link_text_is_a_parse_error() {
        let html = pagination_html(&["1", "next", "›"]);
        let result = parse_last_page(&html, &Config::default());
        assert!(matches!(result, Err(AppError::Parse { .. })));
    }
}
