//! Delivery zone tariff editing.

use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::dto::cities::DeliveryZone;
use shared::utils::format_rub;

use crate::components::Loading;
use crate::services::cities;
use crate::state::delivery::fallback_zones;

#[component]
pub fn ZonesTab() -> impl IntoView {
    let (items, set_items) = signal(Vec::<DeliveryZone>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let editing = RwSignal::new(None::<u8>);
    let cost_input = RwSignal::new(String::new());

    spawn_local(async move {
        match cities::zones().await {
            Ok(found) if !found.is_empty() => set_items.set(found),
            Ok(_) => set_items.set(fallback_zones()),
            Err(err) => {
                set_error.set(Some(err.to_string()));
                set_items.set(fallback_zones());
            }
        }
        set_loading.set(false);
    });

    let save = move |zone: DeliveryZone| {
        let Ok(base_cost) = cost_input.get_untracked().trim().parse::<u64>() else {
            set_error.set(Some("Введите стоимость числом".to_string()));
            return;
        };
        let updated = DeliveryZone { base_cost, ..zone };
        spawn_local(async move {
            match cities::update_zone(&updated).await {
                Ok(saved) => {
                    editing.set(None);
                    set_items.update(|all| {
                        if let Some(slot) = all.iter_mut().find(|z| z.zone == saved.zone) {
                            *slot = saved;
                        }
                    });
                }
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
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <div class="admin-rows">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|zone| {
                                let zone_id = zone.zone;
                                let zone_for_save = zone.clone();
                                view! {
                                    <div class="card admin-row zone-row">
                                        <span class="zone-row-id">"Зона " {zone.zone}</span>
                                        <span class="zone-row-name">{zone.name.clone()}</span>
                                        <span class="zone-row-cost">
                                            {format_rub(zone.base_cost)}
                                        </span>
                                        {zone
                                            .description
                                            .clone()
                                            .map(|text| {
                                                view! { <p class="zone-row-desc">{text}</p> }
                                            })}
                                        <Show
                                            when=move || editing.get() == Some(zone_id)
                                            fallback={
                                                let zone_cost = zone.base_cost;
                                                move || {
                                                    view! {
                                                        <button
                                                            class="btn btn-ghost btn-small"
                                                            on:click=move |_| {
                                                                editing.set(Some(zone_id));
                                                                cost_input.set(zone_cost.to_string());
                                                            }
                                                        >
                                                            "Изменить тариф"
                                                        </button>
                                                    }
                                                }
                                            }
                                        >
                                            {
                                                let zone_for_save = zone_for_save.clone();
                                                view! {
                                                    <div class="zone-editor">
                                                        <input
                                                            class="form-input"
                                                            type="number"
                                                            prop:value=move || cost_input.get()
                                                            on:input=move |ev| {
                                                                cost_input.set(event_target_value(&ev));
                                                            }
                                                        />
                                                        <button
                                                            class="btn btn-small"
                                                            on:click=move |_| save(zone_for_save.clone())
                                                        >
                                                            "Сохранить"
                                                        </button>
                                                    </div>
                                                }
                                            }
                                        </Show>
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
