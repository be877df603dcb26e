//! Placeholder for sections that are not live yet.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::navigation::routes;

#[component]
pub fn ComingSoonPage(title: &'static str) -> impl IntoView {
    view! {
        <div class="page page-centered">
            <div class="card card-narrow">
                <h1 class="page-title">{title}</h1>
                <p class="page-subtitle">"Раздел скоро откроется"</p>
                <A href=routes::CARS attr:class="btn">"К каталогу"</A>
            </div>
        </div>
    }
}
