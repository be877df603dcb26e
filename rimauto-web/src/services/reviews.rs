//! Customer reviews.

use shared::dto::reviews::{NewReview, ReplyRequest, Review, ReviewPatch};

use crate::services::api::{self, ApiError};

pub async fn list() -> Result<Vec<Review>, ApiError> {
    api::get("/reviews").await
}

pub async fn create(review: &NewReview) -> Result<Review, ApiError> {
    api::post("/reviews", review).await
}

/// Manager reply; author defaults to "Менеджер" at the call sites.
pub async fn reply(id: i64, request: &ReplyRequest) -> Result<Review, ApiError> {
    api::post(&format!("/reviews/{id}/reply"), request).await
}

pub async fn update(id: i64, patch: &ReviewPatch) -> Result<Review, ApiError> {
    api::patch(&format!("/reviews/{id}"), patch).await
}

pub async fn remove(id: i64) -> Result<serde_json::Value, ApiError> {
    api::delete(&format!("/reviews/{id}")).await
}
