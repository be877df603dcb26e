//! Vehicle detail page: photos, specs, delivery estimate, order entry.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use shared::dto::cars::Car;
use shared::utils::format_rub;

use crate::components::{CitySelector, Loading};
use crate::pages::favorites::{is_favorite, toggle_favorite};
use crate::platform::telegram;
use crate::services::cars;
use crate::state::delivery::use_delivery;

#[component]
pub fn CarPage() -> impl IntoView {
    let params = use_params_map();
    let delivery = use_delivery();
    let navigate = use_navigate();

    let (car, set_car) = signal(None::<Car>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (favorite, set_favorite) = signal(false);

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        set_favorite.set(is_favorite(&id));
        spawn_local(async move {
            set_loading.set(true);
            match cars::by_id(&id).await {
                Ok(found) => set_car.set(Some(found)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    // The host MainButton doubles the order button inside Telegram
    let main_button_nav = navigate.clone();
    Effect::new(move || {
        if let Some(current) = car.get() {
            let navigate = main_button_nav.clone();
            telegram::main_button_show("Оставить заявку", move || {
                navigate(&format!("/order?car={}", current.id), Default::default());
            });
        }
    });
    on_cleanup(telegram::main_button_hide);

    let order_href = move || {
        car.get()
            .map(|c| format!("/order?car={}", c.id))
            .unwrap_or_else(|| "/order".to_string())
    };

    view! {
        <div class="page car-detail">
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                {move || {
                    error
                        .get()
                        .map(|message| view! { <div class="banner banner-error">{message}</div> })
                }}
                {move || {
                    car.get()
                        .map(|current| {
                            let title = current.title.clone();
                            let image = current.images.first().cloned();
                            let price = crate::utils::format::car_price_line(&current);
                            let mileage = crate::utils::format::mileage_line(current.mileage_km);
                            let year = current
                                .year
                                .map(|y| y.to_string())
                                .unwrap_or_else(|| "—".to_string());
                            let engine =
                                current.engine.clone().unwrap_or_else(|| "—".to_string());
                            let country =
                                current.country.clone().unwrap_or_else(|| "—".to_string());
                            let description = current.description.clone();
                            let fav_car = current.clone();
                            let price_amount = current.price.amount;
                            let price_currency = current.price.currency;
                            let cost = move || {
                                delivery.delivery_cost(price_amount, price_currency)
                            };
                            let total = move || {
                                delivery.total_price_rub(price_amount, price_currency)
                            };
                            view! {
                                <div class="card">
                                    <div class="car-detail-photo">
                                        {match image {
                                            Some(src) => {
                                                view! { <img src=src alt=title.clone()/> }
                                                    .into_any()
                                            }
                                            None => {
                                                view! {
                                                    <div class="car-card-placeholder">"🚗"</div>
                                                }
                                                    .into_any()
                                            }
                                        }}
                                    </div>
                                    <div class="car-detail-header">
                                        <h1 class="page-title">{title}</h1>
                                        <button
                                            class="btn btn-ghost favorite-toggle"
                                            on:click=move |_| {
                                                set_favorite.set(toggle_favorite(&fav_car));
                                            }
                                        >
                                            {move || {
                                                if favorite.get() {
                                                    "♥ В избранном"
                                                } else {
                                                    "♡ В избранное"
                                                }
                                            }}
                                        </button>
                                    </div>
                                    <p class="car-detail-price">{price}</p>
                                    <dl class="car-specs">
                                        <dt>"Год"</dt>
                                        <dd>{year}</dd>
                                        <dt>"Пробег"</dt>
                                        <dd>{mileage}</dd>
                                        <dt>"Двигатель"</dt>
                                        <dd>{engine}</dd>
                                        <dt>"Страна"</dt>
                                        <dd>{country}</dd>
                                    </dl>
                                    {description
                                        .map(|text| view! { <p class="page-text">{text}</p> })}

                                    <div class="delivery-block">
                                        <h3 class="section-title">"Доставка"</h3>
                                        <CitySelector/>
                                        {move || {
                                            cost()
                                                .map(|breakdown| {
                                                    view! {
                                                        <div class="delivery-cost">
                                                            <p>
                                                                "Зона: " {breakdown.zone_name.clone()}
                                                                " · " {breakdown.delivery_days.clone()}
                                                                " дн."
                                                            </p>
                                                            <p>
                                                                "Доставка: "
                                                                {format_rub(breakdown.total_cost)}
                                                            </p>
                                                        </div>
                                                    }
                                                })
                                        }}
                                        {move || {
                                            total()
                                                .filter(|_| price_amount > 0)
                                                .map(|sum| {
                                                    view! {
                                                        <p class="delivery-total">
                                                            "Итого с доставкой: "
                                                            {format_rub(sum)}
                                                        </p>
                                                    }
                                                })
                                        }}
                                    </div>
                                </div>
                            }
                        })
                }}
            </Show>
            <div class="car-detail-actions">
                <button
                    class="btn btn-primary"
                    on:click=move |_| navigate(&order_href(), Default::default())
                >
                    "Оставить заявку"
                </button>
            </div>
        </div>
    }
}
