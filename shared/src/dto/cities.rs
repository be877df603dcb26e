use serde::{Deserialize, Serialize};

/// A delivery destination. `delivery_zone` references a [`DeliveryZone`]
/// tariff; `delivery_days` is a display range like "5-7".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct City {
    pub id: i64,
    pub name: String,
    pub region: String,
    pub federal_district: String,
    pub delivery_zone: u8,
    pub delivery_days: String,
}

/// Backend-defined grouping of cities sharing shipping parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryZone {
    pub zone: u8,
    pub name: String,
    pub base_cost: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `POST /cities` body (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCity {
    pub name: String,
    pub region: String,
    pub federal_district: String,
    pub delivery_zone: u8,
    pub delivery_days: String,
}
