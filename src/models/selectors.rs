// src/models/selectors.rs

//! CSS selectors for scraping the target site.

use serde::{Deserialize, Serialize};

/// CSS selectors for the listing page, the pagination control, and the
/// product detail page.
///
/// Defaults target the demo site's fixed DOM; every field can be overridden
/// from the configuration file if the site markup shifts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteSelectors {
    /// Selector for each product card on a listing page
    #[serde(default = "defaults::card")]
    pub card: String,

    /// Selector for the title link within a card (name and detail href)
    #[serde(default = "defaults::title_link")]
    pub title_link: String,

    /// Selector for the price element within a card
    #[serde(default = "defaults::price")]
    pub price: String,

    /// Selector for the description element within a card
    #[serde(default = "defaults::description")]
    pub description: String,

    /// Selector for the product image within a card
    #[serde(default = "defaults::image")]
    pub image: String,

    /// Selector for the review-count element within a card
    #[serde(default = "defaults::review_count")]
    pub review_count: String,

    /// Selector for one rating star icon within a card
    #[serde(default = "defaults::star")]
    pub star: String,

    /// Selector for the pagination control on the listing root
    #[serde(default = "defaults::pagination")]
    pub pagination: String,

    /// Selector for a page link within the pagination control
    #[serde(default = "defaults::page_link")]
    pub page_link: String,

    /// Selector for an option label on a detail page
    #[serde(default = "defaults::option_label")]
    pub option_label: String,

    /// Selector for the button container following an option label
    #[serde(default = "defaults::swatches")]
    pub swatches: String,

    /// Selector for an option button within the container
    #[serde(default = "defaults::option_button")]
    pub option_button: String,
}

impl Default for SiteSelectors {
    fn default() -> Self {
        Self {
            card: defaults::card(),
            title_link: defaults::title_link(),
            price: defaults::price(),
            description: defaults::description(),
            image: defaults::image(),
            review_count: defaults::review_count(),
            star: defaults::star(),
            pagination: defaults::pagination(),
            page_link: defaults::page_link(),
            option_label: defaults::option_label(),
            swatches: defaults::swatches(),
            option_button: defaults::option_button(),
        }
    }
}

mod defaults {
    pub fn card() -> String {
        "div.card.thumbnail".into()
    }
    pub fn title_link() -> String {
        "a.title".into()
    }
    pub fn price() -> String {
        "h4.price".into()
    }
    pub fn description() -> String {
        "p.description".into()
    }
    pub fn image() -> String {
        "img.img-fluid".into()
    }
    pub fn review_count() -> String {
        "p.review-count".into()
    }
    pub fn star() -> String {
        "span.ws-icon-star".into()
    }
    pub fn pagination() -> String {
        "ul.pagination".into()
    }
    pub fn page_link() -> String {
        "a.page-link".into()
    }
    pub fn option_label() -> String {
        "label".into()
    }
    pub fn swatches() -> String {
        "div.swatches".into()
    }
    pub fn option_button() -> String {
        "button".into()
    }
}
