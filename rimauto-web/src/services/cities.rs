//! Delivery cities and zone tariffs.

use shared::dto::cities::{City, DeliveryZone, NewCity};

use crate::services::api::{self, ApiError};

pub async fn list() -> Result<Vec<City>, ApiError> {
    api::get("/cities").await
}

pub async fn search(query: &str) -> Result<Vec<City>, ApiError> {
    api::get_with_query("/cities/search", &[("query", query.to_string())]).await
}

pub async fn zones() -> Result<Vec<DeliveryZone>, ApiError> {
    api::get("/delivery-zones").await
}

// Admin operations

pub async fn create(city: &NewCity) -> Result<City, ApiError> {
    api::post("/cities", city).await
}

pub async fn remove(id: i64) -> Result<serde_json::Value, ApiError> {
    api::delete(&format!("/cities/{id}")).await
}

pub async fn update_zone(zone: &DeliveryZone) -> Result<DeliveryZone, ApiError> {
    api::put(&format!("/delivery-zones/{}", zone.zone), zone).await
}
