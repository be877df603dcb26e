use serde::{Deserialize, Serialize};

/// `POST /orders` body: a purchase request for a specific listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewOrder {
    pub car_id: String,
    pub name: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// An order as `/orders/my` returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderInfo {
    pub id: i64,
    pub car_id: String,
    pub car_title: String,
    pub status: String,
    pub created_at: String,
}
