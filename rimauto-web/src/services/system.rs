//! Health and maintenance endpoints for the admin system tab.

use shared::dto::system::{
    HealthResponse, ImageCleanupResult, ImageStats, PageSource, SelectorTestRequest,
    SelectorTestResult, VolumeStats,
};

use crate::services::api::{self, ApiError};

pub async fn health() -> Result<HealthResponse, ApiError> {
    api::get("/health").await
}

pub async fn image_stats() -> Result<ImageStats, ApiError> {
    api::get("/images/stats").await
}

pub async fn image_cleanup() -> Result<ImageCleanupResult, ApiError> {
    api::post("/images/cleanup", &serde_json::json!({})).await
}

pub async fn volume_stats() -> Result<VolumeStats, ApiError> {
    api::get("/volumes/stats").await
}

// Scraper debugging

pub async fn page_source() -> Result<PageSource, ApiError> {
    api::get("/debug/page-source").await
}

pub async fn selectors_test() -> Result<Vec<SelectorTestResult>, ApiError> {
    api::get("/debug/selectors-test").await
}

pub async fn test_selector(selector: &str) -> Result<SelectorTestResult, ApiError> {
    api::post(
        "/debug/test-selector",
        &SelectorTestRequest { selector: selector.to_string() },
    )
    .await
}
