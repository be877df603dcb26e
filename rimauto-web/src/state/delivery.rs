//! Delivery city selection and zone/day estimates.
//!
//! The pure transition logic lives in [`DeliveryState`] so search gating,
//! selection and cost math stay testable off-browser; [`DeliveryContext`]
//! wires it to the cities API and swallows search failures into an empty
//! result set.

use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::dto::cities::{City, DeliveryZone};
use shared::utils::convert_to_rubles;
use shared::Currency;

use crate::services::cities;
use crate::utils::constants::CITY_SEARCH_MIN_CHARS;

pub const DEFAULT_CITY_NAME: &str = "Москва";

/// 1% of the vehicle value goes into delivery, capped here.
const VEHICLE_FACTOR_CAP: u64 = 50_000;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryState {
    pub selected_city: Option<City>,
    pub search_query: String,
    pub search_results: Vec<City>,
}

/// Zone/day summary for the selected city.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryInfo {
    pub city: City,
    pub zone: Option<DeliveryZone>,
    pub estimated_days: String,
}

/// Cost breakdown for the order page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryCost {
    pub base_cost: u64,
    pub vehicle_factor: u64,
    pub total_cost: u64,
    pub delivery_days: String,
    pub zone_name: String,
}

impl DeliveryState {
    /// Queries under two characters never reach the network.
    pub fn needs_search(query: &str) -> bool {
        query.chars().count() >= CITY_SEARCH_MIN_CHARS
    }

    /// Store the query; returns whether the caller should run a search.
    /// Short queries also clear stale results.
    pub fn set_query(&mut self, query: &str) -> bool {
        self.search_query = query.to_string();
        if Self::needs_search(query) {
            true
        } else {
            self.search_results.clear();
            false
        }
    }

    pub fn set_results(&mut self, results: Vec<City>) {
        self.search_results = results;
    }

    /// Select a city and reset the search box. A record without a name is
    /// refused, mirroring the old frontend's guard against junk input.
    pub fn select_city(&mut self, city: City) -> bool {
        if city.name.trim().is_empty() {
            log::error!("delivery: refusing city without a name (id {})", city.id);
            return false;
        }
        self.selected_city = Some(city);
        self.search_query.clear();
        self.search_results.clear();
        true
    }

    pub fn clear_city(&mut self) {
        self.selected_city = None;
        self.search_query.clear();
        self.search_results.clear();
    }

    /// Default selection on first load: Moscow if the backend lists it.
    pub fn default_city(cities: &[City]) -> Option<City> {
        cities.iter().find(|c| c.name == DEFAULT_CITY_NAME).cloned()
    }

    pub fn delivery_info(&self, zones: &[DeliveryZone]) -> Option<DeliveryInfo> {
        let city = self.selected_city.clone()?;
        let zone = zones.iter().find(|z| z.zone == city.delivery_zone).cloned();
        let estimated_days = city.delivery_days.clone();
        Some(DeliveryInfo { city, zone, estimated_days })
    }

    /// Base tariff plus a value-dependent factor. `vehicle_price` is in the
    /// listing currency and converted before the math.
    pub fn delivery_cost(
        &self,
        zones: &[DeliveryZone],
        vehicle_price: u64,
        currency: Currency,
    ) -> Option<DeliveryCost> {
        let info = self.delivery_info(zones)?;
        let zone = info.zone?;
        let price_rub = convert_to_rubles(vehicle_price, currency);
        let vehicle_factor = (price_rub / 100).min(VEHICLE_FACTOR_CAP);
        Some(DeliveryCost {
            base_cost: zone.base_cost,
            vehicle_factor,
            total_cost: zone.base_cost + vehicle_factor,
            delivery_days: info.estimated_days,
            zone_name: zone.name,
        })
    }

    /// Vehicle price converted to rubles plus delivery; what the buyer
    /// actually pays. `None` without a selected city.
    pub fn total_price_rub(
        &self,
        zones: &[DeliveryZone],
        vehicle_price: u64,
        currency: Currency,
    ) -> Option<u64> {
        let cost = self.delivery_cost(zones, vehicle_price, currency)?;
        Some(convert_to_rubles(vehicle_price, currency) + cost.total_cost)
    }
}

/// Tariffs shipped with the app for when `/delivery-zones` is unreachable;
/// the admin-managed table takes precedence once loaded.
pub fn fallback_zones() -> Vec<DeliveryZone> {
    vec![
        DeliveryZone {
            zone: 1,
            name: "Москва и СПб".to_string(),
            base_cost: 15_000,
            description: Some("Московский и Северо-Западный регионы".to_string()),
        },
        DeliveryZone {
            zone: 2,
            name: "Регионы".to_string(),
            base_cost: 25_000,
            description: Some("Крупные города европейской части, Урал и Сибирь".to_string()),
        },
        DeliveryZone {
            zone: 3,
            name: "Дальний Восток и Север".to_string(),
            base_cost: 45_000,
            description: Some("Дальневосточный округ, Крайний Север".to_string()),
        },
    ]
}

/// Global delivery context.
#[derive(Clone, Copy)]
pub struct DeliveryContext {
    pub state: RwSignal<DeliveryState>,
    pub zones: RwSignal<Vec<DeliveryZone>>,
    pub loading: RwSignal<bool>,
}

impl DeliveryContext {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(DeliveryState::default()),
            zones: RwSignal::new(fallback_zones()),
            loading: RwSignal::new(false),
        }
    }

    pub fn selected_city(&self) -> Option<City> {
        self.state.with(|s| s.selected_city.clone())
    }

    pub fn search_results(&self) -> Vec<City> {
        self.state.with(|s| s.search_results.clone())
    }

    pub fn search_query(&self) -> String {
        self.state.with(|s| s.search_query.clone())
    }

    pub fn delivery_info(&self) -> Option<DeliveryInfo> {
        let zones = self.zones.get();
        self.state.with(|s| s.delivery_info(&zones))
    }

    pub fn delivery_cost(&self, vehicle_price: u64, currency: Currency) -> Option<DeliveryCost> {
        let zones = self.zones.get();
        self.state.with(|s| s.delivery_cost(&zones, vehicle_price, currency))
    }

    pub fn total_price_rub(&self, vehicle_price: u64, currency: Currency) -> Option<u64> {
        let zones = self.zones.get();
        self.state.with(|s| s.total_price_rub(&zones, vehicle_price, currency))
    }

    /// Update the query; runs the search endpoint for queries long enough
    /// and swallows its errors into an empty result set.
    pub fn set_search_query(&self, query: String) {
        let should_search = self.state.try_update(|s| s.set_query(&query)).unwrap_or(false);
        if !should_search {
            return;
        }
        let ctx = *self;
        spawn_local(async move {
            let results = match cities::search(&query).await {
                Ok(found) => found,
                Err(err) => {
                    log::warn!("city search failed: {err}");
                    Vec::new()
                }
            };
            // Stale responses lose: only apply results for the live query
            ctx.state.update(|s| {
                if s.search_query == query {
                    s.set_results(results);
                }
            });
        });
    }

    pub fn select_city(&self, city: City) {
        self.state.update(|s| {
            s.select_city(city);
        });
    }

    pub fn clear_city(&self) {
        self.state.update(DeliveryState::clear_city);
    }

    /// Boot: load the zone table, then default the selection to Moscow when
    /// nothing is selected yet. Both calls fail soft.
    pub fn initialize(&self) {
        let ctx = *self;
        spawn_local(async move {
            ctx.loading.set(true);
            match cities::zones().await {
                Ok(zones) if !zones.is_empty() => ctx.zones.set(zones),
                Ok(_) => {}
                Err(err) => log::warn!("zones unavailable, using built-in tariffs: {err}"),
            }
            if ctx.state.with_untracked(|s| s.selected_city.is_none()) {
                match cities::list().await {
                    Ok(all) => {
                        if let Some(moscow) = DeliveryState::default_city(&all) {
                            ctx.state.update(|s| {
                                s.select_city(moscow);
                            });
                        }
                    }
                    Err(err) => log::warn!("cities unavailable: {err}"),
                }
            }
            ctx.loading.set(false);
        });
    }
}

impl Default for DeliveryContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn provide_delivery_context() -> DeliveryContext {
    let context = DeliveryContext::new();
    provide_context(context);
    context
}

pub fn use_delivery() -> DeliveryContext {
    expect_context::<DeliveryContext>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn city(id: i64, name: &str, zone: u8) -> City {
        City {
            id,
            name: name.to_string(),
            region: "Регион".to_string(),
            federal_district: "ЦФО".to_string(),
            delivery_zone: zone,
            delivery_days: "1-2".to_string(),
        }
    }

    #[test]
    fn short_query_never_searches_and_clears_results() {
        let mut state = DeliveryState::default();
        state.set_results(vec![city(1, "Москва", 1)]);
        assert!(!state.set_query("a"));
        assert!(state.search_results.is_empty());
        assert_eq!(state.search_query, "a");
    }

    #[test]
    fn two_char_query_searches() {
        let mut state = DeliveryState::default();
        assert!(state.set_query("мо"));
    }

    #[test]
    fn select_city_resets_search() {
        let mut state = DeliveryState::default();
        state.set_query("тверь");
        state.set_results(vec![city(5, "Тверь", 2)]);
        assert!(state.select_city(city(5, "Тверь", 2)));
        assert_eq!(state.selected_city.as_ref().map(|c| c.id), Some(5));
        assert!(state.search_query.is_empty());
        assert!(state.search_results.is_empty());
    }

    #[test]
    fn nameless_city_is_refused() {
        let mut state = DeliveryState::default();
        assert!(!state.select_city(city(9, "  ", 2)));
        assert_eq!(state.selected_city, None);
    }

    #[test]
    fn default_city_is_moscow_when_present() {
        let cities = vec![city(3, "Тверь", 2), city(1, "Москва", 1)];
        assert_eq!(DeliveryState::default_city(&cities).map(|c| c.id), Some(1));
        let without = vec![city(3, "Тверь", 2)];
        assert_eq!(DeliveryState::default_city(&without), None);
    }

    #[test]
    fn delivery_info_requires_selection() {
        let state = DeliveryState::default();
        assert_eq!(state.delivery_info(&fallback_zones()), None);
    }

    #[test]
    fn delivery_info_resolves_zone() {
        let mut state = DeliveryState::default();
        state.select_city(city(1, "Москва", 1));
        let info = state.delivery_info(&fallback_zones()).unwrap();
        assert_eq!(info.zone.as_ref().map(|z| z.base_cost), Some(15_000));
        assert_eq!(info.estimated_days, "1-2");
    }

    #[test]
    fn vehicle_factor_is_capped() {
        let mut state = DeliveryState::default();
        state.select_city(city(1, "Москва", 1));
        let cost = state
            .delivery_cost(&fallback_zones(), 20_000_000, Currency::Rub)
            .unwrap();
        assert_eq!(cost.vehicle_factor, 50_000);
        assert_eq!(cost.total_cost, 65_000);

        let modest = state
            .delivery_cost(&fallback_zones(), 1_000_000, Currency::Rub)
            .unwrap();
        assert_eq!(modest.vehicle_factor, 10_000);
        assert_eq!(modest.total_cost, 25_000);
    }

    #[test]
    fn total_price_converts_and_adds_delivery() {
        let mut state = DeliveryState::default();
        assert_eq!(state.total_price_rub(&fallback_zones(), 280_000, Currency::Cny), None);

        state.select_city(city(1, "Москва", 1));
        // 280 000 CNY -> 3 500 000 ₽, delivery 15 000 + 35 000 factor
        assert_eq!(
            state.total_price_rub(&fallback_zones(), 280_000, Currency::Cny),
            Some(3_550_000)
        );
    }
}
