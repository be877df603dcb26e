//! Vehicle catalog: filters, grid, pagination.

use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::dto::cars::{Car, CarQuery, SortOrder};

use crate::components::{CarCard, Loading, Pagination};
use crate::components::pagination::total_pages;
use crate::services::cars;
use crate::utils::constants::CATALOG_PAGE_SIZE;

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn parse_num<T: std::str::FromStr>(value: &str) -> Option<T> {
    value.trim().parse().ok()
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Car>::new());
    let (total, set_total) = signal(0u64);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let query = RwSignal::new(CarQuery::first_page(CATALOG_PAGE_SIZE));

    // Filter inputs, applied on demand rather than per keystroke
    let title = RwSignal::new(String::new());
    let price_from = RwSignal::new(String::new());
    let price_to = RwSignal::new(String::new());
    let year_from = RwSignal::new(String::new());
    let year_to = RwSignal::new(String::new());
    let sort = RwSignal::new(String::new());

    Effect::new(move || {
        let current = query.get();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match cars::list(&current).await {
                Ok((cars, count)) => {
                    set_items.set(cars);
                    set_total.set(count);
                }
                Err(err) => {
                    set_items.set(Vec::new());
                    set_total.set(0);
                    set_error.set(Some(err.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let apply_filters = move |_| {
        query.update(|q| {
            q.page = 1;
            q.title = non_empty(&title.get_untracked());
            q.price_from = parse_num(&price_from.get_untracked());
            q.price_to = parse_num(&price_to.get_untracked());
            q.year_from = parse_num(&year_from.get_untracked());
            q.year_to = parse_num(&year_to.get_untracked());
            match sort.get_untracked().as_str() {
                "price_asc" => {
                    q.sort_by = Some("price".to_string());
                    q.sort_order = Some(SortOrder::Asc);
                }
                "price_desc" => {
                    q.sort_by = Some("price".to_string());
                    q.sort_order = Some(SortOrder::Desc);
                }
                "year_desc" => {
                    q.sort_by = Some("year".to_string());
                    q.sort_order = Some(SortOrder::Desc);
                }
                _ => {
                    q.sort_by = None;
                    q.sort_order = None;
                }
            }
        });
    };

    let reset_filters = move |_| {
        title.set(String::new());
        price_from.set(String::new());
        price_to.set(String::new());
        year_from.set(String::new());
        year_to.set(String::new());
        sort.set(String::new());
        query.set(CarQuery::first_page(CATALOG_PAGE_SIZE));
    };

    let page = Signal::derive(move || query.with(|q| q.page));
    let pages = Signal::derive(move || total_pages(total.get(), CATALOG_PAGE_SIZE));

    view! {
        <div class="page catalog">
            <h1 class="page-title">"Автомобили из Китая под заказ"</h1>

            <div class="filter-bar">
                <input
                    class="form-input filter-search"
                    type="text"
                    placeholder="Марка или модель"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <input
                    class="form-input filter-num"
                    type="number"
                    placeholder="Цена от, ₽"
                    prop:value=move || price_from.get()
                    on:input=move |ev| price_from.set(event_target_value(&ev))
                />
                <input
                    class="form-input filter-num"
                    type="number"
                    placeholder="до, ₽"
                    prop:value=move || price_to.get()
                    on:input=move |ev| price_to.set(event_target_value(&ev))
                />
                <input
                    class="form-input filter-num"
                    type="number"
                    placeholder="Год от"
                    prop:value=move || year_from.get()
                    on:input=move |ev| year_from.set(event_target_value(&ev))
                />
                <input
                    class="form-input filter-num"
                    type="number"
                    placeholder="до"
                    prop:value=move || year_to.get()
                    on:input=move |ev| year_to.set(event_target_value(&ev))
                />
                <select
                    class="form-input filter-sort"
                    prop:value=move || sort.get()
                    on:change=move |ev| sort.set(event_target_value(&ev))
                >
                    <option value="">"Без сортировки"</option>
                    <option value="price_asc">"Сначала дешевле"</option>
                    <option value="price_desc">"Сначала дороже"</option>
                    <option value="year_desc">"Сначала новее"</option>
                </select>
                <button class="btn" on:click=apply_filters>"Показать"</button>
                <button class="btn btn-ghost" on:click=reset_filters>"Сбросить"</button>
            </div>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="banner banner-error">{message}</div> })
            }}

            <Show
                when=move || !loading.get()
                fallback=|| view! { <Loading label="Загружаем каталог..."/> }
            >
                <Show
                    when=move || !items.with(Vec::is_empty)
                    fallback=|| {
                        view! { <p class="catalog-empty">"Ничего не найдено"</p> }
                    }
                >
                    <div class="car-grid">
                        {move || {
                            items
                                .get()
                                .into_iter()
                                .map(|car| view! { <CarCard car=car/> })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>

            <Pagination
                page=page
                total_pages=pages
                on_change=move |target: u32| query.update(|q| q.page = target)
            />
        </div>
    }
}
