//! Display formatting helpers.

use shared::dto::cars::{Car, Currency};
use shared::utils::{convert_to_rubles, format_rub};

/// Catalog price line: RUB estimate plus the original currency when the
/// listing arrived in CNY/USD.
pub fn car_price_line(car: &Car) -> String {
    if car.price.amount == 0 {
        return "Цена по запросу".to_string();
    }
    let rub = convert_to_rubles(car.price.amount, car.price.currency);
    match car.price.currency {
        Currency::Rub => format_rub(rub),
        Currency::Cny => format!("{} (¥{})", format_rub(rub), group_thousands(car.price.amount)),
        Currency::Usd => format!("{} (${})", format_rub(rub), group_thousands(car.price.amount)),
    }
}

/// Mileage line: "85 000 км" or "Без пробега" for import-new listings.
pub fn mileage_line(mileage_km: Option<u32>) -> String {
    match mileage_km {
        Some(0) | None => "Без пробега".to_string(),
        Some(km) => format!("{} км", group_thousands(u64::from(km))),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let offset = digits.len() % 3;
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            out.push('\u{2009}');
        }
        out.push(c);
    }
    out
}

/// "2025-11-02T10:00:00Z" -> "02.11.2025". Returns the input when it does
/// not parse; backend timestamps are display-only here.
pub fn short_date(rfc3339: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(rfc3339) {
        Ok(dt) => dt.format("%d.%m.%Y").to_string(),
        Err(_) => rfc3339.to_string(),
    }
}

/// Bytes -> "1.2 МБ" style label for the admin stats tiles.
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["Б", "КБ", "МБ", "ГБ"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{bytes} Б")
    } else {
        format!("{value:.1} {}", UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::cars::Price;

    fn car_with_price(amount: u64, currency: Currency) -> Car {
        Car {
            id: "t".into(),
            title: "t".into(),
            brand: None,
            model: None,
            year: None,
            mileage_km: None,
            price: Price { amount, currency },
            images: vec![],
            country: None,
            engine: None,
            description: None,
            source_url: None,
        }
    }

    #[test]
    fn zero_price_is_on_request() {
        let car = car_with_price(0, Currency::Cny);
        assert_eq!(car_price_line(&car), "Цена по запросу");
    }

    #[test]
    fn cny_price_shows_both_currencies() {
        let car = car_with_price(280_000, Currency::Cny);
        let line = car_price_line(&car);
        assert!(line.contains('₽'), "{line}");
        assert!(line.contains('¥'), "{line}");
    }

    #[test]
    fn short_date_formats() {
        assert_eq!(short_date("2025-11-02T10:00:00Z"), "02.11.2025");
        assert_eq!(short_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn bytes_scale() {
        assert_eq!(format_bytes(512), "512 Б");
        assert_eq!(format_bytes(2 * 1024 * 1024), "2.0 МБ");
    }
}
