//! Catalog card for one vehicle.

use leptos::prelude::*;
use leptos_router::components::A;

use shared::dto::cars::Car;

use crate::utils::format::{car_price_line, mileage_line};
use crate::utils::navigation::routes;

#[component]
pub fn CarCard(car: Car) -> impl IntoView {
    let detail_href = routes::car(&car.id);
    let price = car_price_line(&car);
    let mileage = mileage_line(car.mileage_km);
    let year = car.year.map(|y| format!("{y} г.")).unwrap_or_default();
    let image = car.images.first().cloned();

    view! {
        <A href=detail_href attr:class="car-card">
            <div class="car-card-photo">
                {match image {
                    Some(src) => view! { <img src=src alt=car.title.clone() loading="lazy"/> }
                        .into_any(),
                    None => view! { <div class="car-card-placeholder">"🚗"</div> }.into_any(),
                }}
            </div>
            <div class="car-card-body">
                <h3 class="car-card-title">{car.title.clone()}</h3>
                <p class="car-card-meta">{year}" · "{mileage}</p>
                <p class="car-card-price">{price}</p>
            </div>
        </A>
    }
}
