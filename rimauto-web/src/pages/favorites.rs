//! Favorites: client-side only, persisted in browser storage.

use leptos::prelude::*;

use shared::dto::cars::Car;

use crate::components::CarCard;
use crate::storage;

const KEY_FAVORITES: &str = "favorites";

pub fn favorites() -> Vec<Car> {
    storage::get_item(KEY_FAVORITES).unwrap_or_default()
}

pub fn is_favorite(id: &str) -> bool {
    favorites().iter().any(|car| car.id == id)
}

/// Add or remove a car; returns whether it is a favorite afterwards.
pub fn toggle_favorite(car: &Car) -> bool {
    let mut all = favorites();
    if let Some(position) = all.iter().position(|c| c.id == car.id) {
        all.remove(position);
        storage::set_item(KEY_FAVORITES, &all);
        false
    } else {
        all.push(car.clone());
        storage::set_item(KEY_FAVORITES, &all);
        true
    }
}

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let (items, set_items) = signal(favorites());

    view! {
        <div class="page">
            <h1 class="page-title">"Избранное"</h1>
            <Show
                when=move || !items.with(Vec::is_empty)
                fallback=|| {
                    view! {
                        <p class="catalog-empty">
                            "Пока пусто — добавьте автомобили из каталога"
                        </p>
                    }
                }
            >
                <div class="car-grid">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|car| {
                                let remove_target = car.clone();
                                view! {
                                    <div class="favorite-item">
                                        <CarCard car=car/>
                                        <button
                                            class="btn btn-ghost"
                                            on:click=move |_| {
                                                toggle_favorite(&remove_target);
                                                set_items.set(favorites());
                                            }
                                        >
                                            "Убрать"
                                        </button>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
