//! Delivery city directory management.

use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::dto::cities::{City, NewCity};

use crate::components::{Loading, TextField};
use crate::services::cities;

#[component]
pub fn CitiesTab() -> impl IntoView {
    let (items, set_items) = signal(Vec::<City>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let name = RwSignal::new(String::new());
    let region = RwSignal::new(String::new());
    let district = RwSignal::new(String::new());
    let zone = RwSignal::new(String::new());
    let days = RwSignal::new(String::new());

    let reload = move || {
        spawn_local(async move {
            set_loading.set(true);
            match cities::list().await {
                Ok(found) => set_items.set(found),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };
    reload();

    let add = move |_| {
        let new_city = NewCity {
            name: name.get_untracked().trim().to_string(),
            region: region.get_untracked().trim().to_string(),
            federal_district: district.get_untracked().trim().to_string(),
            delivery_zone: zone.get_untracked().trim().parse().unwrap_or(2),
            delivery_days: days.get_untracked().trim().to_string(),
        };
        if new_city.name.is_empty() || new_city.delivery_days.is_empty() {
            set_error.set(Some("Название и срок доставки обязательны".to_string()));
            return;
        }
        spawn_local(async move {
            set_error.set(None);
            match cities::create(&new_city).await {
                Ok(_) => {
                    name.set(String::new());
                    region.set(String::new());
                    district.set(String::new());
                    zone.set(String::new());
                    days.set(String::new());
                    reload();
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let delete = move |id: i64| {
        spawn_local(async move {
            match cities::remove(id).await {
                Ok(_) => set_items.update(|all| all.retain(|c| c.id != id)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="admin-pane">
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="banner banner-error">{message}</div> })
            }}

            <div class="card admin-row">
                <h3 class="section-title">"Добавить город"</h3>
                <TextField label="Название" value=name required=true/>
                <TextField label="Регион" value=region/>
                <TextField label="Федеральный округ" value=district placeholder="ЦФО"/>
                <TextField label="Зона доставки" value=zone input_type="number" placeholder="2"/>
                <TextField label="Срок, дней" value=days placeholder="5-7" required=true/>
                <button class="btn" on:click=add>"Добавить"</button>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <div class="admin-rows">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|city| {
                                let id = city.id;
                                view! {
                                    <div class="card admin-row city-row">
                                        <span class="city-row-name">{city.name.clone()}</span>
                                        <span class="city-row-region">{city.region.clone()}</span>
                                        <span class="city-row-zone">
                                            "зона " {city.delivery_zone}
                                        </span>
                                        <span class="city-row-days">
                                            {city.delivery_days.clone()} " дн."
                                        </span>
                                        <button
                                            class="btn btn-ghost btn-small btn-danger"
                                            on:click=move |_| delete(id)
                                        >
                                            "Удалить"
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
