// src/api/laptops.rs

//! Listing endpoint: runs a crawl shaped by the caller's query parameters.

use axum::{
    Json,
    extract::{Query, State},
};
use serde::Deserialize;

use super::{ApiError, AppState};
use crate::models::{CrawlRequest, Laptop};
use crate::pipeline;

/// Raw query parameters; parsed by hand so coercion failures surface as
/// 400s with a field-specific message instead of axum's generic rejection.
#[derive(Debug, Default, Deserialize)]
pub(super) struct LaptopsQuery {
    page: Option<String>,
    limit: Option<String>,
    all_brands: Option<String>,
}

pub(super) async fn list_laptops(
    State(state): State<AppState>,
    Query(query): Query<LaptopsQuery>,
) -> Result<Json<Vec<Laptop>>, ApiError> {
    let request = parse_request(&query).map_err(ApiError::bad_request)?;

    let outcome = pipeline::run_crawl(&state.config, &state.client, &request).await?;

    if outcome.page_failures > 0 || outcome.detail_failures > 0 {
        log::warn!(
            "crawl degraded: {} page failure(s), {} detail failure(s)",
            outcome.page_failures,
            outcome.detail_failures
        );
    }

    // An empty result is a valid crawl, served as 200 with an empty array.
    Ok(Json(outcome.laptops))
}

fn parse_request(query: &LaptopsQuery) -> std::result::Result<CrawlRequest, String> {
    let page = query
        .page
        .as_deref()
        .map(|raw| {
            raw.parse::<u32>()
                .map_err(|e| format!("page must be an integer: {e}"))
        })
        .transpose()?;

    let max_laptops = query
        .limit
        .as_deref()
        .map(|raw| {
            raw.parse::<usize>()
                .map_err(|e| format!("limit must be an integer: {e}"))
        })
        .transpose()?;

    let all_brands = query
        .all_brands
        .as_deref()
        .map(parse_bool)
        .transpose()?
        .unwrap_or(false);

    Ok(CrawlRequest {
        page,
        max_laptops,
        all_brands,
    })
}

fn parse_bool(raw: &str) -> std::result::Result<bool, String> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        other => Err(format!("all_brands must be a boolean, got '{other}'")),
    }
}
