//! Service marketplaces: detailing, СТО, wash, tire, roadside help.
//!
//! All five sections share one layout: partner companies with their service
//! lists and a Telegram/phone contact. The catalogs are static content
//! curated by the marketing team, not backend data.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::platform::telegram;
use crate::utils::navigation::routes;

struct ServiceCompany {
    name: &'static str,
    district: &'static str,
    services: &'static [(&'static str, &'static str)],
    telegram_url: &'static str,
}

#[component]
fn MarketplacePage(
    title: &'static str,
    intro: &'static str,
    companies: &'static [ServiceCompany],
) -> impl IntoView {
    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">{title}</h1>
                <A href=routes::MENU attr:class="btn btn-ghost">"В меню"</A>
            </div>
            <p class="page-text">{intro}</p>
            <div class="company-list">
                {companies
                    .iter()
                    .map(|company| {
                        view! {
                            <div class="card company-card">
                                <div class="company-header">
                                    <h3 class="company-name">{company.name}</h3>
                                    <span class="company-district">{company.district}</span>
                                </div>
                                <ul class="service-list">
                                    {company
                                        .services
                                        .iter()
                                        .map(|(service, price)| {
                                            view! {
                                                <li class="service-row">
                                                    <span class="service-name">{*service}</span>
                                                    <span class="service-price">{*price}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                                <button
                                    class="btn"
                                    on:click=move |_| telegram::open_link(company.telegram_url)
                                >
                                    "Записаться"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn DetailingPage() -> impl IntoView {
    const COMPANIES: &[ServiceCompany] = &[
        ServiceCompany {
            name: "Prime Wrap",
            district: "Москва, ЮЗАО",
            services: &[
                ("Оклейка полиуретаном", "от 120 000 ₽"),
                ("Керамика кузова", "от 35 000 ₽"),
                ("Химчистка салона", "от 12 000 ₽"),
            ],
            telegram_url: "https://t.me/primewrap",
        },
        ServiceCompany {
            name: "Detail Garage",
            district: "Москва, САО",
            services: &[
                ("Полировка кузова", "от 18 000 ₽"),
                ("Бронирование фар", "от 6 000 ₽"),
            ],
            telegram_url: "https://t.me/detailgarage",
        },
    ];
    view! {
        <MarketplacePage
            title="Детейлинг"
            intro="Партнёрские студии: оклейка, керамика, химчистка. Запись через Telegram."
            companies=COMPANIES
        />
    }
}

#[component]
pub fn StoPage() -> impl IntoView {
    const COMPANIES: &[ServiceCompany] = &[
        ServiceCompany {
            name: "СТО Восток",
            district: "Москва, ВАО",
            services: &[
                ("Диагностика", "от 2 500 ₽"),
                ("ТО китайских марок", "от 8 000 ₽"),
                ("Ремонт электрики", "от 3 000 ₽"),
            ],
            telegram_url: "https://t.me/sto_vostok",
        },
        ServiceCompany {
            name: "EV Service",
            district: "Москва, ЗАО",
            services: &[
                ("Диагностика батареи", "от 5 000 ₽"),
                ("Обновление ПО", "от 4 000 ₽"),
            ],
            telegram_url: "https://t.me/ev_service",
        },
    ];
    view! {
        <MarketplacePage
            title="СТО"
            intro="Сервисы со специализацией на автомобилях из Китая, включая электромобили."
            companies=COMPANIES
        />
    }
}

#[component]
pub fn WashPage() -> impl IntoView {
    const COMPANIES: &[ServiceCompany] = &[
        ServiceCompany {
            name: "Мойка 24",
            district: "Москва, ЦАО",
            services: &[
                ("Комплекс", "от 1 500 ₽"),
                ("Детейлинг-мойка", "от 3 500 ₽"),
            ],
            telegram_url: "https://t.me/wash24",
        },
    ];
    view! {
        <MarketplacePage
            title="Мойки"
            intro="Круглосуточные мойки партнёров со скидкой для клиентов RimAuto."
            companies=COMPANIES
        />
    }
}

#[component]
pub fn TirePage() -> impl IntoView {
    const COMPANIES: &[ServiceCompany] = &[
        ServiceCompany {
            name: "Шинный центр Юг",
            district: "Москва, ЮАО",
            services: &[
                ("Сезонная переобувка", "от 4 000 ₽"),
                ("Хранение колёс", "от 800 ₽/мес"),
                ("Правка дисков", "от 1 500 ₽"),
            ],
            telegram_url: "https://t.me/tyre_ug",
        },
    ];
    view! {
        <MarketplacePage
            title="Шиномонтаж"
            intro="Шиномонтаж и сезонное хранение у партнёров."
            companies=COMPANIES
        />
    }
}

#[component]
pub fn HelpPage() -> impl IntoView {
    const COMPANIES: &[ServiceCompany] = &[
        ServiceCompany {
            name: "Помощь 77",
            district: "Москва и область",
            services: &[
                ("Эвакуатор", "от 5 000 ₽"),
                ("Подзарядка электромобиля", "от 4 000 ₽"),
                ("Вскрытие без повреждений", "от 3 000 ₽"),
            ],
            telegram_url: "https://t.me/help77",
        },
    ];
    view! {
        <MarketplacePage
            title="Помощь на дороге"
            intro="Круглосуточная техническая помощь и эвакуация."
            companies=COMPANIES
        />
    }
}
