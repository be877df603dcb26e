//! Purchase orders.

use shared::dto::orders::{NewOrder, OrderInfo};

use crate::services::api::{self, ApiError};

pub async fn create(order: &NewOrder) -> Result<OrderInfo, ApiError> {
    api::post("/orders", order).await
}

pub async fn my_orders() -> Result<Vec<OrderInfo>, ApiError> {
    api::get("/orders/my").await
}
