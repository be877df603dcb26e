//! System maintenance: health, image/volume stats, cache refresh, scraper
//! selector debugging.

use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::dto::system::{ImageStats, SelectorTestResult, VolumeStats};

use crate::services::api::{AbortHandle, ApiError};
use crate::services::{cars, system};
use crate::utils::format::format_bytes;

#[component]
pub fn SystemTab() -> impl IntoView {
    let (health, set_health) = signal(None::<String>);
    let (images, set_images) = signal(None::<ImageStats>);
    let (volumes, set_volumes) = signal(None::<VolumeStats>);
    let (notice, set_notice) = signal(None::<String>);
    let (error, set_error) = signal(None::<String>);

    let (refreshing, set_refreshing) = signal(false);
    // AbortHandle wraps an Rc, so it lives in local storage
    let refresh_handle = StoredValue::new_local(None::<AbortHandle>);

    let selector = RwSignal::new(String::new());
    let (selector_result, set_selector_result) = signal(None::<SelectorTestResult>);
    let (suite_results, set_suite_results) = signal(Vec::<SelectorTestResult>::new());
    let (source_info, set_source_info) = signal(None::<String>);

    spawn_local(async move {
        match system::health().await {
            Ok(response) => set_health.set(Some(response.status)),
            Err(err) => set_health.set(Some(format!("недоступен ({err})"))),
        }
        if let Ok(stats) = system::image_stats().await {
            set_images.set(Some(stats));
        }
        if let Ok(stats) = system::volume_stats().await {
            set_volumes.set(Some(stats));
        }
    });

    let start_refresh = move |_| {
        if refreshing.get_untracked() {
            return;
        }
        let handle = AbortHandle::new();
        refresh_handle.set_value(Some(handle.clone()));
        spawn_local(async move {
            set_refreshing.set(true);
            set_notice.set(None);
            set_error.set(None);
            match cars::refresh_cache(&handle).await {
                Ok(result) => {
                    set_notice.set(Some(format!("Каталог обновлён: {} машин", result.updated)));
                }
                Err(ApiError::Aborted) => {
                    set_notice.set(Some("Обновление отменено".to_string()));
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_refreshing.set(false);
            refresh_handle.set_value(None);
        });
    };

    let cancel_refresh = move |_| {
        if let Some(handle) = refresh_handle.get_value() {
            handle.abort();
        }
    };

    let cleanup_images = move |_| {
        spawn_local(async move {
            match system::image_cleanup().await {
                Ok(result) => {
                    set_notice.set(Some(format!(
                        "Удалено {} изображений, освобождено {}",
                        result.removed,
                        format_bytes(result.freed_bytes)
                    )));
                    if let Ok(stats) = system::image_stats().await {
                        set_images.set(Some(stats));
                    }
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    // Run the scraper's whole selector suite against the live page
    let run_suite = move |_| {
        spawn_local(async move {
            match system::selectors_test().await {
                Ok(results) => set_suite_results.set(results),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let fetch_source = move |_| {
        spawn_local(async move {
            match system::page_source().await {
                Ok(page) => {
                    let preview: String = page.source.chars().take(400).collect();
                    set_source_info.set(Some(format!(
                        "{} байт{}\n{preview}…",
                        page.source.len(),
                        page.fetched_at
                            .map(|at| format!(", получено {at}"))
                            .unwrap_or_default(),
                    )));
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let run_selector = move |_| {
        let value = selector.get_untracked().trim().to_string();
        if value.is_empty() {
            return;
        }
        spawn_local(async move {
            match system::test_selector(&value).await {
                Ok(result) => set_selector_result.set(Some(result)),
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

            <div class="card admin-row">
                <h3 class="section-title">"Состояние"</h3>
                <dl class="debug-table">
                    <dt>"Backend"</dt>
                    <dd>{move || health.get().unwrap_or_else(|| "…".to_string())}</dd>
                    <dt>"Изображения"</dt>
                    <dd>
                        {move || {
                            images
                                .get()
                                .map(|s| {
                                    format!(
                                        "{} файлов ({}), осиротевших {}",
                                        s.total,
                                        format_bytes(s.disk_bytes),
                                        s.orphaned,
                                    )
                                })
                                .unwrap_or_else(|| "…".to_string())
                        }}
                    </dd>
                    <dt>"Диск"</dt>
                    <dd>
                        {move || {
                            volumes
                                .get()
                                .map(|s| {
                                    format!(
                                        "занято {}, свободно {}",
                                        format_bytes(s.used_bytes),
                                        format_bytes(s.free_bytes),
                                    )
                                })
                                .unwrap_or_else(|| "…".to_string())
                        }}
                    </dd>
                </dl>
                <div class="debug-actions">
                    <button class="btn btn-ghost" on:click=cleanup_images>
                        "Очистить изображения"
                    </button>
                </div>
            </div>

            <div class="card admin-row">
                <h3 class="section-title">"Кэш каталога"</h3>
                <p class="page-text">
                    "Полное обновление занимает до пяти минут: парсер обходит каталог
                    поставщика заново."
                </p>
                <div class="debug-actions">
                    <button class="btn" disabled=refreshing on:click=start_refresh>
                        {move || {
                            if refreshing.get() { "Обновляем..." } else { "Обновить кэш" }
                        }}
                    </button>
                    <Show when=move || refreshing.get()>
                        <button class="btn btn-ghost" on:click=cancel_refresh>
                            "Отменить"
                        </button>
                    </Show>
                </div>
            </div>

            <div class="card admin-row">
                <h3 class="section-title">"Отладка парсера"</h3>
                <div class="selector-test">
                    <input
                        class="form-input"
                        type="text"
                        placeholder="CSS-селектор, например .car-card .price"
                        prop:value=move || selector.get()
                        on:input=move |ev| selector.set(event_target_value(&ev))
                    />
                    <button class="btn btn-ghost" on:click=run_selector>"Проверить"</button>
                </div>
                {move || {
                    selector_result
                        .get()
                        .map(|result| {
                            view! {
                                <div class="selector-result">
                                    <p>
                                        {result.selector.clone()} ": совпадений "
                                        {result.matches}
                                    </p>
                                    <ul>
                                        {result
                                            .samples
                                            .iter()
                                            .map(|sample| {
                                                view! { <li>{sample.clone()}</li> }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                }}
                <div class="debug-actions">
                    <button class="btn btn-ghost" on:click=run_suite>
                        "Проверить все селекторы"
                    </button>
                    <button class="btn btn-ghost" on:click=fetch_source>
                        "Источник страницы"
                    </button>
                </div>
                <Show when=move || !suite_results.with(Vec::is_empty)>
                    <ul class="selector-result">
                        {move || {
                            suite_results
                                .get()
                                .into_iter()
                                .map(|result| {
                                    view! {
                                        <li>
                                            {result.selector.clone()} ": "
                                            {result.matches} " совпадений"
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
                {move || {
                    source_info
                        .get()
                        .map(|info| view! { <pre class="source-preview">{info}</pre> })
                }}
            </div>
        </div>
    }
}
