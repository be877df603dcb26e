//! Contract template management: upload, delete, cleanup.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use shared::dto::contracts::ContractInfo;

use crate::components::Loading;
use crate::services::contracts;
use crate::utils::format::{format_bytes, short_date};

/// Contract types mirror the application kinds the office prints.
const CONTRACT_TYPES: &[(&str, &str)] = &[
    ("sale", "Договор купли-продажи"),
    ("commission", "Комиссионный договор"),
    ("leasing", "Договор лизинга"),
    ("guarantee", "Гарантийный договор"),
];

#[component]
pub fn ContractsTab() -> impl IntoView {
    let (items, set_items) = signal(Vec::<ContractInfo>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let (notice, set_notice) = signal(None::<String>);

    let reload = move || {
        spawn_local(async move {
            set_loading.set(true);
            match contracts::list().await {
                Ok(found) => set_items.set(found),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };
    reload();

    let upload = move |contract_type: &'static str, input: HtmlInputElement| {
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");
        spawn_local(async move {
            set_error.set(None);
            match contracts::upload(contract_type, &file).await {
                Ok(_) => {
                    set_notice.set(Some(format!("Файл загружен: {}", file.name())));
                    // Re-read the stored record: the backend normalizes the name
                    match contracts::get(contract_type).await {
                        Ok(stored) => set_items.update(|all| {
                            all.retain(|c| c.contract_type != stored.contract_type);
                            all.push(stored);
                        }),
                        Err(_) => reload(),
                    }
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let delete = move |contract_type: String| {
        spawn_local(async move {
            match contracts::remove(&contract_type).await {
                Ok(_) => reload(),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let cleanup = move |_| {
        spawn_local(async move {
            match contracts::cleanup().await {
                Ok(result) => {
                    set_notice.set(Some(format!("Удалено устаревших файлов: {}", result.removed)));
                    reload();
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
            {move || {
                notice
                    .get()
                    .map(|message| view! { <div class="banner banner-success">{message}</div> })
            }}

            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <div class="admin-rows">
                    {CONTRACT_TYPES
                        .iter()
                        .map(|&(contract_type, label)| {
                            let uploaded = move || {
                                items.with(|all| {
                                    all.iter()
                                        .find(|c| c.contract_type == contract_type)
                                        .cloned()
                                })
                            };
                            view! {
                                <div class="card admin-row">
                                    <div class="admin-row-head">
                                        <span class="admin-row-summary">{label}</span>
                                    </div>
                                    {move || match uploaded() {
                                        Some(info) => {
                                            let type_for_delete = info.contract_type.clone();
                                            view! {
                                                <div class="contract-info">
                                                    <span>{info.filename.clone()}</span>
                                                    <span>{format_bytes(info.size_bytes)}</span>
                                                    <span>{short_date(&info.uploaded_at)}</span>
                                                    <button
                                                        class="btn btn-ghost btn-small btn-danger"
                                                        on:click=move |_| {
                                                            delete(type_for_delete.clone());
                                                        }
                                                    >
                                                        "Удалить"
                                                    </button>
                                                </div>
                                            }
                                                .into_any()
                                        }
                                        None => {
                                            view! {
                                                <p class="contract-missing">"Файл не загружен"</p>
                                            }
                                                .into_any()
                                        }
                                    }}
                                    <input
                                        type="file"
                                        accept=".docx"
                                        class="contract-upload"
                                        on:change=move |ev| {
                                            if let Some(input) = ev
                                                .target()
                                                .and_then(|t| {
                                                    t.dyn_into::<HtmlInputElement>().ok()
                                                })
                                            {
                                                upload(contract_type, input);
                                            }
                                        }
                                    />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <button class="btn btn-ghost" on:click=cleanup>
                    "Очистить устаревшие файлы"
                </button>
            </Show>
        </div>
    }
}
