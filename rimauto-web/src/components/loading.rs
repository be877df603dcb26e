//! Loading spinner.

use leptos::prelude::*;

#[component]
pub fn Loading(#[prop(default = "Загрузка...")] label: &'static str) -> impl IntoView {
    view! {
        <div class="loading">
            <div class="loading-spinner"></div>
            <p class="loading-label">{label}</p>
        </div>
    }
}
