//! Telegram Login Widget host.
//!
//! The widget is an external script that renders Telegram's login button
//! and calls a global `onTelegramAuth(user)` when the user confirms. We
//! register that global once, inject the script into our container, and
//! forward the payload to the page as a typed [`WidgetAuthData`].

use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use shared::dto::auth::WidgetAuthData;

use crate::utils::constants::BOT_USERNAME;

const WIDGET_SRC: &str = "https://telegram.org/js/telegram-widget.js?22";

#[component]
pub fn TelegramLoginWidget(#[prop(into)] on_auth: Callback<WidgetAuthData>) -> impl IntoView {
    let container = NodeRef::<Div>::new();

    Effect::new(move || {
        let Some(host) = container.get() else {
            return;
        };
        // Re-runs are possible when the page remounts; one script is enough.
        if host.child_element_count() > 0 {
            return;
        }
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        let callback = Closure::<dyn FnMut(JsValue)>::new(move |value: JsValue| {
            match serde_wasm_bindgen::from_value::<WidgetAuthData>(value) {
                Ok(data) => on_auth.run(data),
                Err(err) => log::error!("login widget: bad payload: {err}"),
            }
        });
        if js_sys::Reflect::set(&window, &JsValue::from_str("onTelegramAuth"), callback.as_ref())
            .is_err()
        {
            log::error!("login widget: failed to register auth callback");
            return;
        }
        callback.forget();

        let Ok(script) = document.create_element("script") else {
            return;
        };
        let attrs = [
            ("src", WIDGET_SRC),
            ("async", ""),
            ("data-telegram-login", BOT_USERNAME),
            ("data-size", "large"),
            ("data-radius", "8"),
            ("data-request-access", "write"),
            ("data-onauth", "onTelegramAuth(user)"),
        ];
        for (name, value) in attrs {
            if script.set_attribute(name, value).is_err() {
                log::error!("login widget: failed to set {name}");
                return;
            }
        }
        if host.append_child(&script).is_err() {
            log::error!("login widget: failed to mount script");
        }
    });

    view! { <div class="telegram-login" node_ref=container></div> }
}
