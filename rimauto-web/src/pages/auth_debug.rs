//! Auth debug page: session inspection, web login, debug-mode toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::dto::auth::WidgetAuthData;

use crate::components::TelegramLoginWidget;
use crate::services::auth as auth_flow;
use crate::state::auth::use_auth;

#[component]
pub fn AuthDebugPage() -> impl IntoView {
    let auth = use_auth();
    let (web_error, set_web_error) = signal(None::<String>);
    let (validation, set_validation) = signal(None::<bool>);

    let on_widget_auth = move |data: WidgetAuthData| {
        spawn_local(async move {
            let outcome = auth_flow::handle_telegram_web_auth(auth, data).await;
            set_web_error.set(outcome.error);
        });
    };

    let validate = move |_| {
        spawn_local(async move {
            let valid = auth_flow::validate_token(auth).await;
            set_validation.set(Some(valid));
        });
    };

    let logout = move |_| {
        spawn_local(async move {
            auth_flow::logout(auth).await;
            set_validation.set(None);
        });
    };

    let retry_login = move |_| {
        spawn_local(async move {
            auth_flow::init_telegram_auth(auth).await;
        });
    };

    view! {
        <div class="page">
            <h1 class="page-title">"Отладка авторизации"</h1>

            <div class="card debug-state">
                <h3 class="section-title">"Состояние"</h3>
                <dl class="debug-table">
                    <dt>"Авторизован"</dt>
                    <dd>{move || if auth.is_authenticated() { "да" } else { "нет" }}</dd>
                    <dt>"Запрос выполняется"</dt>
                    <dd>{move || if auth.loading.get() { "да" } else { "нет" }}</dd>
                    <dt>"Внутри Telegram"</dt>
                    <dd>{move || if auth.is_telegram_web_app() { "да" } else { "нет" }}</dd>
                    <dt>"Пользователь"</dt>
                    <dd>{move || auth.state.with(|s| s.display_name())}</dd>
                    <dt>"Телефон"</dt>
                    <dd>
                        {move || {
                            auth.user()
                                .and_then(|u| u.phone)
                                .unwrap_or_else(|| "—".to_string())
                        }}
                    </dd>
                    <dt>"Токен"</dt>
                    <dd class="debug-token">
                        {move || {
                            auth.state
                                .with(|s| {
                                    s.auth_token
                                        .as_deref()
                                        .map(|t| {
                                            let head: String = t.chars().take(24).collect();
                                            format!("{head}…")
                                        })
                                        .unwrap_or_else(|| "—".to_string())
                                })
                        }}
                    </dd>
                    <dt>"Проверка токена"</dt>
                    <dd>
                        {move || match validation.get() {
                            None => "—",
                            Some(true) => "валиден",
                            Some(false) => "невалиден",
                        }}
                    </dd>
                </dl>
                <div class="debug-actions">
                    <button class="btn" on:click=validate>"Проверить токен"</button>
                    <button class="btn" on:click=retry_login>"Повторить вход"</button>
                    <button class="btn btn-ghost" on:click=logout>"Выйти"</button>
                </div>
            </div>

            <div class="card">
                <h3 class="section-title">"Вход через Telegram (web)"</h3>
                {move || {
                    web_error
                        .get()
                        .map(|message| view! { <div class="banner banner-error">{message}</div> })
                }}
                <TelegramLoginWidget on_auth=on_widget_auth/>
            </div>

            <DebugModePanel/>
        </div>
    }
}

/// Debug-mode controls exist only in debug builds; release builds render
/// nothing here.
#[cfg(debug_assertions)]
#[component]
fn DebugModePanel() -> impl IntoView {
    use crate::platform::telegram;

    let (enabled, set_enabled) = signal(telegram::debug_mode_enabled());

    view! {
        <div class="card">
            <h3 class="section-title">"Режим отладки"</h3>
            <p class="page-text">
                "Подставляет тестового пользователя Telegram и локальный токен.
                Применяется после перезагрузки страницы."
            </p>
            <p>{move || if enabled.get() { "Сейчас: включен" } else { "Сейчас: выключен" }}</p>
            <div class="debug-actions">
                <button
                    class="btn"
                    on:click=move |_| {
                        telegram::enable_debug_mode();
                        set_enabled.set(true);
                    }
                >
                    "Включить"
                </button>
                <button
                    class="btn btn-ghost"
                    on:click=move |_| {
                        telegram::disable_debug_mode();
                        set_enabled.set(false);
                    }
                >
                    "Выключить"
                </button>
            </div>
        </div>
    }
}

#[cfg(not(debug_assertions))]
#[component]
fn DebugModePanel() -> impl IntoView {}
