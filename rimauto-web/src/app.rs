//! Application shell: contexts, boot sequence, route table.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{BottomNav, Navbar};
use crate::pages::{
    AboutPage, AdminPage, AuthDebugPage, CarPage, CatalogPage, ComingSoonPage, CreditPage,
    DetailingPage, FavoritesPage, GuaranteeCompanyPage, GuaranteePage, HelpPage,
    InsuranceCompanyPage, InsurancePage, LeasingCompanyPage, LeasingPage, MenuPage, OrderPage,
    RenesansCreditPage, ReviewsPage, StoPage, TirePage, WashPage,
};
use crate::services::auth as auth_flow;
use crate::state::auth::provide_auth_context;
use crate::state::delivery::provide_delivery_context;
use crate::utils::navigation::routes;

#[component]
pub fn App() -> impl IntoView {
    let auth = provide_auth_context();
    let delivery = provide_delivery_context();

    // Boot: restore the session (and log in seamlessly inside Telegram),
    // then re-check any restored token. The delivery context loads zones
    // and the default city in parallel.
    spawn_local(async move {
        auth_flow::initialize(auth).await;
        if auth.token().is_some() {
            auth_flow::validate_token(auth).await;
        }
    });
    delivery.initialize();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=CatalogPage/>
                        <Route path=path!("/cars") view=CatalogPage/>
                        <Route path=path!("/car/:id") view=CarPage/>
                        <Route path=path!("/menu") view=MenuPage/>
                        <Route path=path!("/favorites") view=FavoritesPage/>
                        <Route path=path!("/order") view=OrderPage/>
                        <Route path=path!("/about") view=AboutPage/>
                        <Route path=path!("/reviews") view=ReviewsPage/>

                        <Route path=path!("/credit") view=CreditPage/>
                        <Route path=path!("/credit/renesans") view=RenesansCreditPage/>
                        <Route path=path!("/leasing") view=LeasingPage/>
                        <Route path=path!("/leasing/:company") view=LeasingCompanyPage/>
                        <Route path=path!("/insurance") view=InsurancePage/>
                        <Route path=path!("/insurance/:company") view=InsuranceCompanyPage/>
                        <Route path=path!("/guarantee") view=GuaranteePage/>
                        <Route path=path!("/guarantee/:company") view=GuaranteeCompanyPage/>

                        <Route path=path!("/detailing") view=DetailingPage/>
                        <Route path=path!("/sto") view=StoPage/>
                        <Route path=path!("/wash") view=WashPage/>
                        <Route path=path!("/tire") view=TirePage/>
                        <Route path=path!("/help") view=HelpPage/>

                        <Route
                            path=path!("/special-tech")
                            view=|| view! { <ComingSoonPage title="Спецтехника"/> }
                        />
                        <Route
                            path=path!("/parts")
                            view=|| view! { <ComingSoonPage title="Запчасти"/> }
                        />
                        <Route
                            path=path!("/moto")
                            view=|| view! { <ComingSoonPage title="Мото"/> }
                        />
                        <Route
                            path=path!("/news")
                            view=|| view! { <ComingSoonPage title="Новости"/> }
                        />

                        <Route path=path!("/admin") view=AdminPage/>
                        <Route path=path!("/auth-debug") view=AuthDebugPage/>
                    </Routes>
                </main>
                <BottomNav/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page-centered">
            <div class="card card-narrow">
                <h1 class="page-title">"404"</h1>
                <p class="page-text">"Такой страницы нет."</p>
                <A href=routes::CARS attr:class="btn">"К каталогу"</A>
            </div>
        </div>
    }
}
