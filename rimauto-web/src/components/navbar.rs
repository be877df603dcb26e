//! Top navigation bar.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::use_auth;
use crate::utils::navigation::routes;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let user_label = move || auth.state.with(|s| s.display_name());

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <A href=routes::CARS attr:class="nav-brand">
                    <span class="brand-accent">"Rim"</span><span class="brand-rest">"Auto"</span>
                </A>
                <div class="nav-links">
                    <A href=routes::CARS attr:class="nav-link">"Каталог"</A>
                    <A href=routes::MENU attr:class="nav-link">"Услуги"</A>
                    <A href=routes::REVIEWS attr:class="nav-link">"Отзывы"</A>
                    <A href=routes::ABOUT attr:class="nav-link">"О нас"</A>
                </div>
                <div class="nav-user">
                    <Show
                        when=move || auth.is_authenticated()
                        fallback=move || view! { <span class="nav-guest">{user_label}</span> }
                    >
                        <span class="nav-username">{user_label}</span>
                    </Show>
                </div>
            </div>
        </nav>
    }
}
