// src/api/mod.rs

//! HTTP API shell.
//!
//! A thin axum layer over the crawl pipeline: one listing endpoint with
//! three optional query parameters, plus a health endpoint.

mod laptops;

use std::sync::Arc;

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use serde::Serialize;

use crate::error::{AppError, Result};
use crate::models::Config;
use crate::utils::http;

/// Shared state for API handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub client: reqwest::Client,
}

/// Error payload returned by the API.
#[derive(Debug, Serialize)]
pub struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    error: String,
    details: String,
}

impl ApiError {
    fn bad_request(details: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: "invalid query parameter".to_string(),
            details: details.into(),
        }
    }

    fn internal(details: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: "internal server error".to_string(),
            details: details.into(),
        }
    }
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        match error {
            AppError::Validation(details) => Self::bad_request(details),
            other => Self::internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

/// Build the API router.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/laptops", get(laptops::list_laptops))
        .route("/ping", get(ping))
        .with_state(state)
}

/// Run the API server on the configured address.
pub async fn serve(config: Arc<Config>) -> Result<()> {
    let client = http::create_client(&config.crawler)?;
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("API listening on http://{addr}");

    let app = build_app(AppState { config, client });
    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::crawl("api server", e))?;
    Ok(())
}

async fn ping() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "lapscan API running" }))
}
