//! Admin back-office: applications, reviews, contracts, cities, zones and
//! system maintenance behind one tabbed page.
//!
//! Access control is on the backend (every endpoint here requires the admin
//! bearer token); the page itself just renders whatever it is allowed to
//! fetch and lets the 401 handler evict non-admins.

mod applications_tab;
mod cities_tab;
mod contracts_tab;
mod reviews_tab;
mod system_tab;
mod zones_tab;

use leptos::prelude::*;

use applications_tab::ApplicationsTab;
use cities_tab::CitiesTab;
use contracts_tab::ContractsTab;
use reviews_tab::ReviewsTab;
use system_tab::SystemTab;
use zones_tab::ZonesTab;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Applications,
    Reviews,
    Contracts,
    Cities,
    Zones,
    System,
}

impl Tab {
    const ALL: [Tab; 6] = [
        Tab::Applications,
        Tab::Reviews,
        Tab::Contracts,
        Tab::Cities,
        Tab::Zones,
        Tab::System,
    ];

    fn label(self) -> &'static str {
        match self {
            Tab::Applications => "Заявки",
            Tab::Reviews => "Отзывы",
            Tab::Contracts => "Договоры",
            Tab::Cities => "Города",
            Tab::Zones => "Зоны доставки",
            Tab::System => "Система",
        }
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let active = RwSignal::new(Tab::Applications);

    view! {
        <div class="page admin">
            <h1 class="page-title">"Администрирование"</h1>
            <div class="admin-tabs">
                {Tab::ALL
                    .into_iter()
                    .map(|tab| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == tab {
                                        "admin-tab admin-tab-active"
                                    } else {
                                        "admin-tab"
                                    }
                                }
                                on:click=move |_| active.set(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="admin-content">
                {move || match active.get() {
                    Tab::Applications => view! { <ApplicationsTab/> }.into_any(),
                    Tab::Reviews => view! { <ReviewsTab/> }.into_any(),
                    Tab::Contracts => view! { <ContractsTab/> }.into_any(),
                    Tab::Cities => view! { <CitiesTab/> }.into_any(),
                    Tab::Zones => view! { <ZonesTab/> }.into_any(),
                    Tab::System => view! { <SystemTab/> }.into_any(),
                }}
            </div>
        </div>
    }
}
