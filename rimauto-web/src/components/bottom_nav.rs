//! Mobile bottom navigation, visible inside the Mini App viewport.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::navigation::routes;

#[component]
pub fn BottomNav() -> impl IntoView {
    view! {
        <nav class="bottom-nav">
            <A href=routes::CARS attr:class="bottom-nav-item">
                <span class="bottom-nav-icon">"🚗"</span>
                <span class="bottom-nav-label">"Каталог"</span>
            </A>
            <A href=routes::FAVORITES attr:class="bottom-nav-item">
                <span class="bottom-nav-icon">"♥"</span>
                <span class="bottom-nav-label">"Избранное"</span>
            </A>
            <A href=routes::REVIEWS attr:class="bottom-nav-item">
                <span class="bottom-nav-icon">"★"</span>
                <span class="bottom-nav-label">"Отзывы"</span>
            </A>
            <A href=routes::MENU attr:class="bottom-nav-item">
                <span class="bottom-nav-icon">"☰"</span>
                <span class="bottom-nav-label">"Меню"</span>
            </A>
        </nav>
    }
}
