// src/services/record.rs

//! Record assembly.
//!
//! Combines a listing card's scraped fields with description features and
//! detail-page options into one canonical [`Laptop`] record.

use std::sync::Arc;

use crate::models::{Config, Laptop, OptionValues, ProductCard};
use crate::services::{DetailPageFetcher, FeatureExtractor};

/// One assembled record plus the diagnostics its build produced.
#[derive(Debug)]
pub struct BuiltRecord {
    pub laptop: Laptop,
    /// Every option label seen on the detail page, in document order
    pub option_labels: Vec<String>,
    /// Whether the detail-page fetch degraded to an empty option matrix
    pub detail_failed: bool,
}

/// Service for assembling laptop records.
pub struct RecordBuilder {
    config: Arc<Config>,
    features: FeatureExtractor,
    detail: DetailPageFetcher,
    collection_date: String,
}

impl RecordBuilder {
    /// Create a builder stamping records with the given collection date.
    pub fn new(config: Arc<Config>, client: reqwest::Client, collection_date: String) -> Self {
        let detail = DetailPageFetcher::new(Arc::clone(&config), client);
        Self {
            config,
            features: FeatureExtractor::new(),
            detail,
            collection_date,
        }
    }

    /// Build a record from one card, fetching its detail page.
    ///
    /// A detail-page failure degrades the record to an empty option matrix;
    /// it never fails the record itself.
    pub async fn build(&self, card: ProductCard) -> BuiltRecord {
        let features = self.features.extract(&card.description);

        let (mut matrix, detail_failed) =
            match self.detail.fetch_options(&card.product_link).await {
                Ok(matrix) => (matrix, false),
                Err(e) => {
                    log::error!("detail page fetch failed for {}: {}", card.product_link, e);
                    (Default::default(), true)
                }
            };

        let option_labels: Vec<String> = matrix.keys().cloned().collect();
        let hdd: OptionValues = matrix
            .remove(&self.config.site.option_label)
            .unwrap_or_default();

        let laptop = Laptop {
            name: card.name,
            price: card.price,
            brand: features.brand,
            dimensions: features.dimensions,
            processor: features.processor,
            ram: features.ram,
            storage: features.storage,
            os: features.os,
            image_url: card.image_url,
            review_count: card.review_count,
            rating_stars: card.rating_stars,
            product_link: card.product_link,
            product_id: card.product_id,
            hdd,
            collection_date: self.collection_date.clone(),
        };

        BuiltRecord {
            laptop,
            option_labels,
            detail_failed,
        }
    }
}
