//! Telegram WebApp bridge via wasm-bindgen.
//!
//! The host injects `window.Telegram.WebApp` when the app runs inside the
//! Telegram client. Every accessor degrades gracefully outside Telegram, and
//! in debug builds a storage flag (`telegram_debug_mode`) substitutes
//! fixture identity data so the full auth flow is exercisable from a plain
//! browser.
//!
//! We only trust the host when it actually carries identity data: some
//! in-app browsers inject an empty `Telegram.WebApp` object.

use serde::Deserialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use shared::dto::auth::TelegramUser;

use crate::storage;
use crate::utils::constants::KEY_DEBUG_MODE;

#[wasm_bindgen(inline_js = "
export function tgReady() {
    const wa = window.Telegram && window.Telegram.WebApp;
    if (wa && typeof wa.ready === 'function') {
        wa.ready();
    }
}

export function tgHasWebApp() {
    const wa = window.Telegram && window.Telegram.WebApp;
    if (!wa) return false;
    const hasInitData = typeof wa.initData === 'string' && wa.initData.length > 0;
    const hasUser = Boolean(wa.initDataUnsafe && wa.initDataUnsafe.user);
    return hasInitData || hasUser;
}

export function tgInitData() {
    const wa = window.Telegram && window.Telegram.WebApp;
    return (wa && wa.initData) ? wa.initData : null;
}

export function tgUserJson() {
    const wa = window.Telegram && window.Telegram.WebApp;
    const user = wa && wa.initDataUnsafe && wa.initDataUnsafe.user;
    return user ? JSON.stringify(user) : null;
}

export function tgShowAlert(message) {
    const wa = window.Telegram && window.Telegram.WebApp;
    if (wa && typeof wa.showAlert === 'function') {
        wa.showAlert(message);
    } else {
        window.alert(message);
    }
}

export function tgOpenLink(url) {
    const wa = window.Telegram && window.Telegram.WebApp;
    if (wa && typeof wa.openLink === 'function') {
        wa.openLink(url);
    } else {
        window.open(url, '_blank');
    }
}

export function tgMainButtonShow(text, onClick) {
    const wa = window.Telegram && window.Telegram.WebApp;
    if (!wa || !wa.MainButton) return;
    wa.MainButton.text = text;
    wa.MainButton.show();
    wa.MainButton.onClick(onClick);
}

export function tgMainButtonHide() {
    const wa = window.Telegram && window.Telegram.WebApp;
    if (wa && wa.MainButton) {
        wa.MainButton.hide();
    }
}

export function tgRequestContact() {
    return new Promise((resolve) => {
        const wa = window.Telegram && window.Telegram.WebApp;
        if (!wa) {
            resolve({ accepted: false, reason: 'not_telegram' });
            return;
        }
        if (typeof wa.requestContact !== 'function') {
            resolve({ accepted: false, reason: 'unsupported' });
            return;
        }
        try {
            wa.requestContact((shared) => {
                resolve({ accepted: Boolean(shared) });
            });
        } catch (e) {
            console.error('requestContact error:', e);
            resolve({ accepted: false, reason: 'request_error' });
        }
    });
}
")]
extern "C" {
    #[wasm_bindgen(js_name = tgReady)]
    fn tg_ready();
    #[wasm_bindgen(js_name = tgHasWebApp)]
    fn tg_has_webapp() -> bool;
    #[wasm_bindgen(js_name = tgInitData)]
    fn tg_init_data() -> Option<String>;
    #[wasm_bindgen(js_name = tgUserJson)]
    fn tg_user_json() -> Option<String>;
    #[wasm_bindgen(js_name = tgShowAlert)]
    fn tg_show_alert(message: &str);
    #[wasm_bindgen(js_name = tgOpenLink)]
    fn tg_open_link(url: &str);
    #[wasm_bindgen(js_name = tgMainButtonShow)]
    fn tg_main_button_show(text: &str, on_click: &js_sys::Function);
    #[wasm_bindgen(js_name = tgMainButtonHide)]
    fn tg_main_button_hide();
    #[wasm_bindgen(js_name = tgRequestContact)]
    fn tg_request_contact() -> js_sys::Promise;
}

/// Result of a contact request. Capability failures come back as
/// `accepted: false` with a reason, never as an error.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ContactOutcome {
    pub accepted: bool,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Signal readiness to the host so it stops showing its own spinner.
pub fn ready() {
    if !debug_mode_enabled() {
        tg_ready();
    }
}

/// Debug mode: debug builds only, opted into via the storage flag.
/// Release builds compile this to `false` and the fixture paths below
/// disappear with it.
pub fn debug_mode_enabled() -> bool {
    cfg!(debug_assertions) && storage::has_item(KEY_DEBUG_MODE)
}

/// True when the app runs inside a Telegram WebApp host (or simulates one
/// in debug mode).
pub fn is_telegram_web_app() -> bool {
    if debug_mode_enabled() {
        return true;
    }
    tg_has_webapp()
}

/// Signed init-data payload the backend re-verifies.
pub fn init_data() -> Option<String> {
    #[cfg(debug_assertions)]
    if debug_mode_enabled() {
        return Some(fixture::init_data());
    }
    if !tg_has_webapp() {
        return None;
    }
    tg_init_data().filter(|data| !data.is_empty())
}

/// The user object the host reports. Unverified; only the backend response
/// establishes a session.
pub fn telegram_user() -> Option<TelegramUser> {
    #[cfg(debug_assertions)]
    if debug_mode_enabled() {
        return Some(fixture::user());
    }
    if !tg_has_webapp() {
        return None;
    }
    let raw = tg_user_json()?;
    match serde_json::from_str(&raw) {
        Ok(user) => Some(user),
        Err(err) => {
            log::error!("telegram: unparseable bridge user: {err}");
            None
        }
    }
}

/// Native alert through the host; falls back to `window.alert` on the web.
pub fn show_alert(message: &str) {
    if debug_mode_enabled() {
        tg_show_alert(&format!("[DEBUG] {message}"));
        return;
    }
    tg_show_alert(message);
}

pub fn open_link(url: &str) {
    tg_open_link(url);
}

/// Show the host MainButton with a callback. The closure is leaked into the
/// JS side for the lifetime of the page, which matches how long the button
/// stays registered.
pub fn main_button_show(text: &str, on_click: impl Fn() + 'static) {
    let closure = Closure::<dyn Fn()>::new(on_click);
    tg_main_button_show(text, closure.as_ref().unchecked_ref());
    closure.forget();
}

pub fn main_button_hide() {
    tg_main_button_hide();
}

/// Ask the host to share the user's phone number.
pub async fn request_contact() -> ContactOutcome {
    #[cfg(debug_assertions)]
    if debug_mode_enabled() {
        return ContactOutcome {
            accepted: true,
            reason: None,
            phone: Some(fixture::PHONE.to_string()),
        };
    }
    match JsFuture::from(tg_request_contact()).await {
        Ok(value) => serde_wasm_bindgen::from_value(value).unwrap_or(ContactOutcome {
            accepted: false,
            reason: Some("bad_response".to_string()),
            phone: None,
        }),
        Err(_) => ContactOutcome {
            accepted: false,
            reason: Some("request_error".to_string()),
            phone: None,
        },
    }
}

/// Toggle debug mode from the auth-debug page. Takes effect on reload,
/// matching how early `debug_mode_enabled` is consulted during boot.
#[cfg(debug_assertions)]
pub fn enable_debug_mode() {
    storage::set_raw(KEY_DEBUG_MODE, "1");
    log::info!("telegram debug mode enabled, reload to apply");
}

#[cfg(debug_assertions)]
pub fn disable_debug_mode() {
    storage::remove_item(KEY_DEBUG_MODE);
    log::info!("telegram debug mode disabled, reload to apply");
}

/// Fixture identity used by debug mode. Not compiled into release builds.
#[cfg(debug_assertions)]
pub mod fixture {
    use shared::dto::auth::TelegramUser;

    pub const PHONE: &str = "+79990000000";

    pub fn user() -> TelegramUser {
        TelegramUser {
            id: 123_456_789,
            first_name: "Иван".to_string(),
            last_name: Some("Петров".to_string()),
            username: Some("ivan_petrov".to_string()),
            photo_url: Some(
                "https://ui-avatars.com/api/?name=Иван+Петров&background=random&size=128"
                    .to_string(),
            ),
            is_premium: Some(false),
            language_code: Some("ru".to_string()),
        }
    }

    /// Url-encoded init data in the shape the real bridge produces; the
    /// hash is a placeholder the backend never sees in debug mode.
    pub fn init_data() -> String {
        let auth_date = chrono::Utc::now().timestamp();
        let user_json = serde_json::to_string(&user()).unwrap_or_default();
        format!(
            "user={}&auth_date={auth_date}&hash=debug_hash",
            urlencoding::encode(&user_json)
        )
    }
}
