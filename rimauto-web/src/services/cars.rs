//! Vehicle catalog endpoints.

use shared::dto::cars::{Car, CarQuery, CarsPayload};
use shared::dto::system::CacheRefreshResult;

use crate::services::api::{self, AbortHandle, ApiError};

/// `GET /cars` with filters. The payload format is discriminated on the
/// wire; pages only ever see normalized records.
pub async fn list(query: &CarQuery) -> Result<(Vec<Car>, u64), ApiError> {
    let payload: CarsPayload = api::get_with_query("/cars", &query.to_pairs()).await?;
    Ok(payload.into_page())
}

pub async fn by_id(id: &str) -> Result<Car, ApiError> {
    api::get(&format!("/cars/{id}")).await
}

/// Long-running upstream re-scrape; cancellable from the admin page.
pub async fn refresh_cache(handle: &AbortHandle) -> Result<CacheRefreshResult, ApiError> {
    api::post_long("/refresh-cache", &serde_json::json!({}), handle).await
}
