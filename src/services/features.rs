// src/services/features.rs

//! Description feature extraction.
//!
//! Parses a card's free-text description into typed attributes using a
//! fixed set of pattern probes. Extraction never fails: a probe that does
//! not match leaves its field absent.

use regex::Regex;

/// Typed attributes extracted from a product description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureSet {
    pub brand: Option<String>,
    pub dimensions: Option<String>,
    pub processor: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub os: Option<String>,
}

/// Extracts [`FeatureSet`]s from description text.
///
/// Each probe takes the first occurrence only; overlapping matches (the RAM
/// pattern also matching inside a storage token) are accepted as-is.
pub struct FeatureExtractor {
    brand: Regex,
    dimensions: Regex,
    processor: Regex,
    ram: Regex,
    storage: Regex,
}

impl FeatureExtractor {
    /// Create an extractor with the built-in probe patterns.
    pub fn new() -> Self {
        Self {
            brand: Regex::new(r"^[A-Za-z]+").expect("brand pattern"),
            dimensions: Regex::new(r#"\d+(\.\d+)?\s*["']"#).expect("dimensions pattern"),
            processor: Regex::new(r"Core\s*i[0-9]{1,2}-[0-9]{1,4}U").expect("processor pattern"),
            ram: Regex::new(r"\d+GB").expect("ram pattern"),
            storage: Regex::new(r"\d+GB\s*(SSD|HDD|SSHD)").expect("storage pattern"),
        }
    }

    /// Extract features from a description.
    pub fn extract(&self, description: &str) -> FeatureSet {
        FeatureSet {
            brand: first_match(&self.brand, description),
            dimensions: first_match(&self.dimensions, description),
            processor: first_match(&self.processor, description),
            ram: first_match(&self.ram, description),
            storage: first_match(&self.storage, description),
            os: os_segment(description),
        }
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn first_match(pattern: &Regex, text: &str) -> Option<String> {
    pattern.find(text).map(|m| m.as_str().to_string())
}

/// The operating system is the text after the final comma with its first
/// character dropped (the source data always puts one space there), then
/// trimmed. A description with no comma yields its own tail the same way.
fn os_segment(description: &str) -> Option<String> {
    let segment = description.rsplit(',').next().unwrap_or(description);
    let mut chars = segment.chars();
    chars.next();
    let os = chars.as_str().trim();
    if os.is_empty() {
        None
    } else {
        Some(os.to_string())
    }
}
