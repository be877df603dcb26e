//! Delivery city search and selection.

use leptos::prelude::*;

use crate::state::delivery::use_delivery;

#[component]
pub fn CitySelector() -> impl IntoView {
    let delivery = use_delivery();

    let selected = move || delivery.selected_city();
    let results = move || delivery.search_results();

    view! {
        <div class="city-selector">
            <Show
                when=move || selected().is_some()
                fallback=move || {
                    view! {
                        <div class="city-search">
                            <input
                                class="form-input"
                                type="text"
                                placeholder="Город доставки (минимум 2 буквы)"
                                prop:value=move || delivery.search_query()
                                on:input=move |ev| {
                                    delivery.set_search_query(event_target_value(&ev));
                                }
                            />
                            <Show when=move || delivery.loading.get()>
                                <p class="city-loading">"Загружаем города..."</p>
                            </Show>
                            <div class="city-results">
                                {move || {
                                    results()
                                        .into_iter()
                                        .map(|city| {
                                            let label =
                                                format!("{} ({})", city.name, city.region);
                                            let pick = city.clone();
                                            view! {
                                                <button
                                                    type="button"
                                                    class="city-result"
                                                    on:click=move |_| {
                                                        delivery.select_city(pick.clone());
                                                    }
                                                >
                                                    {label}
                                                </button>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </div>
                        </div>
                    }
                }
            >
                <div class="city-selected">
                    <span class="city-name">
                        {move || selected().map(|c| c.name).unwrap_or_default()}
                    </span>
                    <span class="city-days">
                        {move || {
                            delivery
                                .delivery_info()
                                .map(|info| format!("доставка {} дн.", info.estimated_days))
                                .unwrap_or_default()
                        }}
                    </span>
                    <button
                        type="button"
                        class="city-clear"
                        on:click=move |_| delivery.clear_city()
                    >
                        "изменить"
                    </button>
                </div>
            </Show>
        </div>
    }
}
