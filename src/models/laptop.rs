//! Laptop record and option-matrix data structures.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Availability of one selectable option value on a detail page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionAvailability {
    Enabled,
    Disabled,
}

/// Option values for one label: value text → availability.
pub type OptionValues = BTreeMap<String, OptionAvailability>;

/// Full configurable-option matrix of a detail page: label → values.
pub type OptionMatrix = BTreeMap<String, OptionValues>;

/// A laptop record assembled from a listing card, its description features,
/// and its detail page.
///
/// Optional fields are `None` when the corresponding extraction pattern did
/// not match; they are never set to an empty string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Laptop {
    /// Display name from the card's title link
    pub name: String,

    /// Currency-prefixed price text, unparsed (e.g. "$1337.28")
    pub price: String,

    /// Brand extracted from the description
    pub brand: Option<String>,

    /// Screen dimensions extracted from the description (e.g. "15.6\"")
    pub dimensions: Option<String>,

    /// Processor token extracted from the description
    pub processor: Option<String>,

    /// RAM size extracted from the description (e.g. "8GB")
    pub ram: Option<String>,

    /// Storage extracted from the description (e.g. "256GB SSD")
    pub storage: Option<String>,

    /// Operating system extracted from the description
    pub os: Option<String>,

    /// Product image URL
    pub image_url: String,

    /// Review count as numeric text
    pub review_count: String,

    /// Number of rating stars shown on the card
    pub rating_stars: u32,

    /// Absolute URL of the product detail page
    pub product_link: String,

    /// Last path segment of the detail URL
    pub product_id: String,

    /// Option values for the configured detail-page label; empty when the
    /// product has no such option dimension
    pub hdd: OptionValues,

    /// ISO date the crawl started; identical across one crawl's records
    pub collection_date: String,
}

/// Raw fields scraped from one listing-page card, before enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image_url: String,
    pub review_count: String,
    pub rating_stars: u32,
    pub product_link: String,
    pub product_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_availability_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&OptionAvailability::Enabled).unwrap(),
            "\"enabled\""
        );
        assert_eq!(
            serde_json::to_string(&OptionAvailability::Disabled).unwrap(),
            "\"disabled\""
        );
    }

    #[test]
    fn absent_features_serialize_as_null() {
        let laptop = Laptop {
            name: "Test".into(),
            price: "$99.99".into(),
            brand: None,
            dimensions: None,
            processor: None,
            ram: None,
            storage: None,
            os: None,
            image_url: "/img.png".into(),
            review_count: "3".into(),
            rating_stars: 2,
            product_link: "https://example.com/product/7".into(),
            product_id: "7".into(),
            hdd: OptionValues::new(),
            collection_date: "2026-08-06".into(),
        };
        let json: serde_json::Value = serde_json::to_value(&laptop).unwrap();
        assert!(json["brand"].is_null());
        assert_eq!(json["product_id"], "7");
        assert_eq!(json["rating_stars"], 2);
    }
}
