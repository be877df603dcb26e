use serde::{Deserialize, Serialize};

use crate::utils::parse_cny_price;

/// A catalog vehicle in the shape every page consumes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Car {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mileage_km: Option<u32>,
    pub price: Price,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

/// Normalized price. `amount` is in whole units of `currency`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Price {
    pub amount: u64,
    pub currency: Currency,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Rub,
    Cny,
    Usd,
}

/// One page of catalog results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarsPage {
    pub data: Vec<Car>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Scraper output before normalization: prices as che168-style strings
/// ("28万"), no stable ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedCar {
    pub title: String,
    pub price: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

/// Every shape the cars endpoint has ever produced, discriminated by an
/// explicit `format` field so the frontend decodes it exactly once.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum CarsPayload {
    /// Current backend: paginated, normalized records.
    Paged(CarsPage),
    /// Raw scraper passthrough kept for the transition period.
    Scraped { cars: Vec<ScrapedCar> },
    /// Cache-warmup stub: titles only.
    Simplified { titles: Vec<String>, total: u64 },
}

impl CarsPayload {
    /// Normalize any payload format into `(cars, total)`.
    pub fn into_page(self) -> (Vec<Car>, u64) {
        match self {
            CarsPayload::Paged(page) => {
                let total = page.total;
                (page.data, total)
            }
            CarsPayload::Scraped { cars } => {
                let total = cars.len() as u64;
                let normalized = cars
                    .into_iter()
                    .enumerate()
                    .map(|(idx, raw)| Car::from_scraped(raw, idx))
                    .collect();
                (normalized, total)
            }
            CarsPayload::Simplified { titles, total } => {
                let normalized = titles
                    .into_iter()
                    .enumerate()
                    .map(|(idx, title)| Car {
                        id: format!("stub_{idx}"),
                        title,
                        brand: None,
                        model: None,
                        year: None,
                        mileage_km: None,
                        price: Price { amount: 0, currency: Currency::Cny },
                        images: Vec::new(),
                        country: None,
                        engine: None,
                        description: None,
                        source_url: None,
                    })
                    .collect();
                (normalized, total)
            }
        }
    }
}

impl Car {
    /// Normalize a scraper record. Ids are derived from the title so a
    /// re-scrape keeps them stable; the index breaks ties between
    /// identically-titled listings.
    pub fn from_scraped(raw: ScrapedCar, index: usize) -> Self {
        let amount = parse_cny_price(&raw.price).unwrap_or(0);
        let id = scraped_id(&raw.title, index);
        Car {
            id,
            year: raw.year.as_deref().and_then(|y| y.trim().parse().ok()),
            title: raw.title,
            brand: None,
            model: None,
            mileage_km: None,
            price: Price { amount, currency: Currency::Cny },
            images: raw.image.into_iter().collect(),
            country: Some("Китай".to_string()),
            engine: None,
            description: None,
            source_url: raw.link,
        }
    }
}

fn scraped_id(title: &str, index: usize) -> String {
    let base: String = title
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_");
    let base = base.chars().take(30).collect::<String>();
    // Small stable hash keeps ids unique across similarly-prefixed titles.
    let hash = title
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(u32::from(b)));
    format!("che168_{base}_{hash}_{index}")
}

/// Catalog filter set, serialized into the `GET /cars` query string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarQuery {
    pub page: u32,
    pub page_size: u32,
    pub title: Option<String>,
    pub price_from: Option<u64>,
    pub price_to: Option<u64>,
    pub year_from: Option<u16>,
    pub year_to: Option<u16>,
    pub country: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl CarQuery {
    pub fn first_page(page_size: u32) -> Self {
        CarQuery { page: 1, page_size, ..Default::default() }
    }

    /// Key/value pairs for the query string; `None` filters are omitted.
    pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.max(1).to_string()),
            ("page_size", self.page_size.max(1).to_string()),
        ];
        if let Some(title) = &self.title {
            if !title.trim().is_empty() {
                pairs.push(("title", title.trim().to_string()));
            }
        }
        if let Some(v) = self.price_from {
            pairs.push(("price_from", v.to_string()));
        }
        if let Some(v) = self.price_to {
            pairs.push(("price_to", v.to_string()));
        }
        if let Some(v) = self.year_from {
            pairs.push(("year_from", v.to_string()));
        }
        if let Some(v) = self.year_to {
            pairs.push(("year_to", v.to_string()));
        }
        if let Some(country) = &self.country {
            pairs.push(("country", country.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sort_by", sort_by.clone()));
            let order = match self.sort_order {
                Some(SortOrder::Desc) => "desc",
                _ => "asc",
            };
            pairs.push(("sort_order", order.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_payload_decodes_by_tag() {
        let json = r#"{
            "format": "paged",
            "data": [{"id": "a1", "title": "BYD Han", "price": {"amount": 2500000, "currency": "RUB"}}],
            "total": 1,
            "page": 1,
            "page_size": 10
        }"#;
        let payload: CarsPayload = serde_json::from_str(json).unwrap();
        let (cars, total) = payload.into_page();
        assert_eq!(total, 1);
        assert_eq!(cars[0].id, "a1");
        assert_eq!(cars[0].price.amount, 2_500_000);
    }

    #[test]
    fn scraped_payload_normalizes_price_and_id() {
        let json = r#"{
            "format": "scraped",
            "cars": [
                {"title": "比亚迪 汉 EV", "price": "28万", "year": "2022"},
                {"title": "比亚迪 汉 EV", "price": "28万", "year": "2022"}
            ]
        }"#;
        let payload: CarsPayload = serde_json::from_str(json).unwrap();
        let (cars, total) = payload.into_page();
        assert_eq!(total, 2);
        assert_eq!(cars[0].price.amount, 280_000);
        assert_eq!(cars[0].price.currency, Currency::Cny);
        assert_eq!(cars[0].year, Some(2022));
        // Same title, different index: ids must not collide.
        assert_ne!(cars[0].id, cars[1].id);
    }

    #[test]
    fn unknown_format_is_rejected() {
        let json = r#"{"format": "v9", "data": []}"#;
        assert!(serde_json::from_str::<CarsPayload>(json).is_err());
    }

    #[test]
    fn query_pairs_skip_empty_filters() {
        let query = CarQuery::first_page(10);
        let pairs = query.to_pairs();
        assert_eq!(pairs, vec![("page", "1".to_string()), ("page_size", "10".to_string())]);
    }

    #[test]
    fn query_pairs_include_set_filters() {
        let query = CarQuery {
            page: 2,
            page_size: 20,
            title: Some("  Han ".to_string()),
            price_from: Some(1_000_000),
            sort_by: Some("price".to_string()),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };
        let pairs = query.to_pairs();
        assert!(pairs.contains(&("title", "Han".to_string())));
        assert!(pairs.contains(&("price_from", "1000000".to_string())));
        assert!(pairs.contains(&("sort_order", "desc".to_string())));
    }
}
