//! Service menu: tiles for every marketplace section.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::utils::navigation::routes;

struct MenuTile {
    title: &'static str,
    icon: &'static str,
    href: &'static str,
}

const TILES: &[MenuTile] = &[
    MenuTile { title: "Автомобили", icon: "🚗", href: routes::CARS },
    MenuTile { title: "Кредит", icon: "💳", href: routes::CREDIT },
    MenuTile { title: "Лизинг", icon: "📋", href: routes::LEASING },
    MenuTile { title: "Страховка", icon: "🛡", href: routes::INSURANCE },
    MenuTile { title: "Гарантия", icon: "✅", href: routes::GUARANTEE },
    MenuTile { title: "Детейлинг", icon: "✨", href: routes::DETAILING },
    MenuTile { title: "СТО", icon: "🔧", href: routes::STO },
    MenuTile { title: "Мойки", icon: "🚿", href: routes::WASH },
    MenuTile { title: "Шиномонтаж", icon: "🛞", href: routes::TIRE },
    MenuTile { title: "Помощь на дороге", icon: "🆘", href: routes::HELP },
    MenuTile { title: "Запчасти", icon: "⚙", href: routes::PARTS },
    MenuTile { title: "Спецтехника", icon: "🚜", href: routes::SPECIAL_TECH },
    MenuTile { title: "Мото", icon: "🏍", href: routes::MOTO },
    MenuTile { title: "Новости", icon: "📰", href: routes::NEWS },
    MenuTile { title: "Отзывы", icon: "⭐", href: routes::REVIEWS },
    MenuTile { title: "О нас", icon: "ℹ", href: routes::ABOUT },
];

#[component]
pub fn MenuPage() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page-title">"Меню"</h1>
            <div class="menu-grid">
                {TILES
                    .iter()
                    .map(|tile| {
                        view! {
                            <A href=tile.href attr:class="menu-tile">
                                <span class="menu-tile-icon">{tile.icon}</span>
                                <span class="menu-tile-title">{tile.title}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
