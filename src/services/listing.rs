// src/services/listing.rs

//! Listing-page crawler service.
//!
//! Fetches one listing page, scrapes its product cards in DOM order,
//! applies the brand filter, and enriches each surviving card with
//! description features and detail-page options.

use std::sync::Arc;

use futures::stream::{self, StreamExt};
use scraper::{Html, Selector};

use crate::error::{AppError, Result};
use crate::models::{Config, Laptop, ProductCard};
use crate::services::RecordBuilder;
use crate::utils::{self, http};

/// Records and diagnostics from one listing page.
#[derive(Debug, Default)]
pub struct PageOutcome {
    pub laptops: Vec<Laptop>,
    pub detail_failures: usize,
    pub option_labels: Vec<String>,
}

/// Service for crawling listing pages.
pub struct ListingPageFetcher {
    config: Arc<Config>,
    client: reqwest::Client,
    builder: RecordBuilder,
}

impl ListingPageFetcher {
    /// Create a new listing fetcher; records are stamped with
    /// `collection_date`.
    pub fn new(config: Arc<Config>, client: reqwest::Client, collection_date: String) -> Self {
        let builder = RecordBuilder::new(Arc::clone(&config), client.clone(), collection_date);
        Self {
            config,
            client,
            builder,
        }
    }

    /// Fetch one listing page and build records for its cards.
    ///
    /// Detail pages for the filtered card set are fetched concurrently,
    /// bounded by `crawler.max_concurrent`; records come back in DOM order.
    pub async fn fetch_page(&self, page_url: &str, all_brands: bool) -> Result<PageOutcome> {
        let html = http::fetch_page(&self.client, page_url, &self.config.crawler).await?;
        let cards = parse_cards(&html, &self.config, all_brands)?;

        log::debug!("{}: {} cards after filter", page_url, cards.len());

        let concurrency = self.config.crawler.max_concurrent.max(1);
        let built: Vec<_> = stream::iter(cards)
            .map(|card| self.builder.build(card))
            .buffered(concurrency)
            .collect()
            .await;

        let mut outcome = PageOutcome::default();
        for record in built {
            if record.detail_failed {
                outcome.detail_failures += 1;
            }
            outcome.option_labels.extend(record.option_labels);
            outcome.laptops.push(record.laptop);
        }
        Ok(outcome)
    }
}

/// Scrape the product cards out of a listing page body, top to bottom.
///
/// Cards missing a required field are skipped. When `all_brands` is false,
/// cards whose description does not contain the configured brand term are
/// dropped before any detail fetch happens.
fn parse_cards(html: &str, config: &Config, all_brands: bool) -> Result<Vec<ProductCard>> {
    let selectors = &config.site.selectors;
    let card_sel = parse_selector(&selectors.card)?;
    let title_sel = parse_selector(&selectors.title_link)?;
    let price_sel = parse_selector(&selectors.price)?;
    let description_sel = parse_selector(&selectors.description)?;
    let image_sel = parse_selector(&selectors.image)?;
    let review_sel = parse_selector(&selectors.review_count)?;
    let star_sel = parse_selector(&selectors.star)?;

    let document = Html::parse_document(html);
    let mut cards = Vec::new();

    for card in document.select(&card_sel) {
        let Some(title) = card.select(&title_sel).next() else {
            log::warn!("skipping card without title link");
            continue;
        };
        let (Some(name), Some(href)) = (title.value().attr("title"), title.value().attr("href"))
        else {
            log::warn!("skipping card with incomplete title link");
            continue;
        };
        let Some(price) = card.select(&price_sel).next() else {
            log::warn!("skipping card without price");
            continue;
        };
        let Some(description) = card.select(&description_sel).next() else {
            log::warn!("skipping card without description");
            continue;
        };

        let description: String = description.text().collect::<String>().trim().to_string();
        if !all_brands && !description.contains(&config.site.brand_filter) {
            continue;
        }

        let image_url = card
            .select(&image_sel)
            .next()
            .and_then(|img| img.value().attr("src"))
            .unwrap_or_default()
            .to_string();

        let review_count = card
            .select(&review_sel)
            .next()
            .map(|el| el.text().collect::<String>())
            .unwrap_or_default();
        let review_count = review_count.trim();
        let review_count = review_count
            .strip_suffix(" reviews")
            .unwrap_or(review_count)
            .to_string();

        let rating_stars = card.select(&star_sel).count() as u32;

        let product_link =
            utils::resolve(&config.site.origin, href).unwrap_or_else(|| href.to_string());
        let product_id = utils::product_id(&product_link);

        cards.push(ProductCard {
            name: name.trim().to_string(),
            price: price.text().collect::<String>().trim().to_string(),
            description,
            image_url,
            review_count,
            rating_stars,
            product_link,
            product_id,
        });
    }

    Ok(cards)
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card_html(name: &str, href: &str, description: &str) -> String {
        format!(
            r#"
            <div class="card thumbnail">
                <img class="img-fluid card-img-top" src="/images/test.png">
                <div class="caption">
                    <h4 class="price float-end pull-right">$295.99</h4>
                    <h4><a href="{href}" class="title" title="{name}">{name}...</a></h4>
                    <p class="description card-text">{description}</p>
                </div>
                <div class="ratings">
                    <p class="review-count float-end">14 reviews</p>
                    <p>
                        <span class="ws-icon ws-icon-star"></span>
                        <span class="ws-icon ws-icon-star"></span>
                        <span class="ws-icon ws-icon-star"></span>
                    </p>
                </div>
            </div>
            "#
        )
    }

    fn listing_html(cards: &[String]) -> String {
        format!("<html><body>{}</body></html>", cards.join("\n"))
    }

    #[test]
    fn parses_card_fields_in_dom_order() {
        let html = listing_html(&[
            card_html(
                "Lenovo V110-15IAP",
                "/test-sites/e-commerce/static/product/545",
                "Lenovo V110-15IAP, 15.6\" HD, Celeron N3350, 4GB, 128GB SSD, Windows 10",
            ),
            card_html(
                "Lenovo ThinkPad T480",
                "/test-sites/e-commerce/static/product/546",
                "Lenovo ThinkPad T480, 14\" FHD, Core i5-8250U, 8GB, 256GB SSD, Windows 10 Pro",
            ),
        ]);

        let cards = parse_cards(&html, &Config::default(), false).unwrap();
        assert_eq!(cards.len(), 2);

        let first = &cards[0];
        assert_eq!(first.name, "Lenovo V110-15IAP");
        assert_eq!(first.price, "$295.99");
        assert_eq!(first.image_url, "/images/test.png");
        assert_eq!(first.review_count, "14");
        assert_eq!(first.rating_stars, 3);
        assert_eq!(
            first.product_link,
            "https://webscraper.io/test-sites/e-commerce/static/product/545"
        );
        assert_eq!(first.product_id, "545");

        assert_eq!(cards[1].product_id, "546");
    }

    #[test]
    fn brand_filter_drops_other_brands() {
        let html = listing_html(&[
            card_html(
                "Lenovo V110-15IAP",
                "/product/545",
                "Lenovo V110-15IAP, 15.6\" HD, 4GB, 128GB SSD, Windows 10",
            ),
            card_html(
                "Asus VivoBook X441NA",
                "/product/547",
                "Asus VivoBook X441NA, 14\" HD, 4GB, 128GB SSD, Linux",
            ),
        ]);

        let config = Config::default();
        let filtered = parse_cards(&html, &config, false).unwrap();
        assert_eq!(filtered.len(), 1);
        assert!(filtered[0].description.contains("Lenovo"));

        let all = parse_cards(&html, &config, true).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn filter_term_comes_from_config() {
        let html = listing_html(&[card_html(
            "Asus VivoBook X441NA",
            "/product/547",
            "Asus VivoBook X441NA, 14\" HD, 4GB, 128GB SSD, Linux",
        )]);

        let mut config = Config::default();
        config.site.brand_filter = "Asus".to_string();
        let cards = parse_cards(&html, &config, false).unwrap();
        assert_eq!(cards.len(), 1);
    }

    #[test]
    fn card_without_title_link_is_skipped() {
        let html = r#"
            <html><body>
                <div class="card thumbnail">
                    <h4 class="price">$99.99</h4>
                    <p class="description">Lenovo something</p>
                </div>
            </body></html>
        "#;
        let cards = parse_cards(html, &Config::default(), true).unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn empty_page_yields_no_cards() {
        let cards = parse_cards(
            "<html><body><p>nothing here</p></body></html>",
            &Config::default(),
            true,
        )
        .unwrap();
        assert!(cards.is_empty());
    }
}
