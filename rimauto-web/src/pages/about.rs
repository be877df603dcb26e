//! About page.

use leptos::prelude::*;

use crate::platform::telegram;

const MANAGER_TELEGRAM: &str = "https://t.me/rimauto_manager";
const OFFICE_PHONE: &str = "+7 951 600-83-47";

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="card">
                <h1 class="page-title">"О компании"</h1>
                <p class="page-text">
                    "RimAuto привозит автомобили с пробегом из Китая под заказ: подбор по
                    каталогу, проверка, выкуп, доставка и растаможка. Оплата после осмотра
                    на складе в России."
                </p>
                <p class="page-text">
                    "Работаем с 2019 года, офисы в Москве и Владивостоке. Страхование,
                    кредит и лизинг оформляются прямо в приложении через партнёров."
                </p>
                <div class="about-contacts">
                    <button
                        class="btn"
                        on:click=move |_| telegram::open_link(MANAGER_TELEGRAM)
                    >
                        "Написать менеджеру"
                    </button>
                    <span class="about-phone">{OFFICE_PHONE}</span>
                </div>
            </div>
        </div>
    }
}
