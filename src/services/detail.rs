// src/services/detail.rs

//! Detail-page option extraction.
//!
//! Fetches a product's detail page and reads its configurable-option
//! matrix: each option label followed by a container of selectable buttons,
//! one entry per button value with its availability.

use std::sync::Arc;

use scraper::{ElementRef, Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Config, OptionAvailability, OptionMatrix, OptionValues};
use crate::utils::http;

/// Service for fetching a product's configurable options.
pub struct DetailPageFetcher {
    config: Arc<Config>,
    client: reqwest::Client,
}

impl DetailPageFetcher {
    /// Create a new detail-page fetcher sharing the crawl's HTTP client.
    pub fn new(config: Arc<Config>, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// Fetch one detail page and extract its option matrix.
    ///
    /// Fails on transport errors or non-2xx statuses after retries; callers
    /// treat a failure as "no options" rather than aborting the crawl.
    pub async fn fetch_options(&self, detail_url: &str) -> Result<OptionMatrix> {
        let html = http::fetch_page(&self.client, detail_url, &self.config.crawler).await?;
        parse_options(&html, &self.config)
    }
}

/// Parse the option matrix out of a detail page body.
///
/// Each label's text is trimmed and stripped of colons. The button
/// container is the first following sibling element matching the swatches
/// selector; a label without one contributes an empty value map.
fn parse_options(html: &str, config: &Config) -> Result<OptionMatrix> {
    let selectors = &config.site.selectors;
    let label_sel = parse_selector(&selectors.option_label)?;
    let swatch_sel = parse_selector(&selectors.swatches)?;
    let button_sel = parse_selector(&selectors.option_button)?;

    let document = Html::parse_document(html);
    let mut matrix = OptionMatrix::new();

    for label in document.select(&label_sel) {
        let label_text: String = label.text().collect::<String>().trim().replace(':', "");

        let container = label
            .next_siblings()
            .filter_map(ElementRef::wrap)
            .find(|sibling| swatch_sel.matches(sibling));

        let mut values = OptionValues::new();
        if let Some(container) = container {
            for button in container.select(&button_sel) {
                let Some(value) = button.value().attr("value") else {
                    continue;
                };
                let availability = if button.value().attr("disabled").is_some() {
                    OptionAvailability::Disabled
                } else {
                    OptionAvailability::Enabled
                };
                values.insert(value.to_string(), availability);
            }
        }

        matrix.insert(label_text, values);
    }

    Ok(matrix)
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}
