//! Credit: bank picker and the Renesans application form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::components::{TextAreaField, TextField};
use crate::platform::telegram;
use crate::services::applications;
use crate::state::auth::use_auth;
use crate::utils::constants::SUCCESS_BANNER_MS;
use crate::utils::navigation::routes;
use crate::utils::validation::{validate_credit_form, CreditFormInput, FieldErrors};

struct Bank {
    key: &'static str,
    name: &'static str,
    live: bool,
}

const BANKS: &[Bank] = &[
    Bank { key: "otp", name: "ОТП банк", live: false },
    Bank { key: "alfa", name: "Альфа банк", live: false },
    Bank { key: "rshb", name: "Россельхоз Банк", live: false },
    Bank { key: "ural", name: "Уралсиб банк", live: false },
    Bank { key: "renesans", name: "Ренессанс кредит", live: true },
];

#[component]
pub fn CreditPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Кредит"</h1>
                <A href=routes::MENU attr:class="btn btn-ghost">"В меню"</A>
            </div>
            <div class="bank-grid">
                {BANKS
                    .iter()
                    .map(|bank| {
                        let navigate = navigate.clone();
                        view! {
                            <button
                                class="bank-card"
                                disabled=!bank.live
                                on:click=move |_| {
                                    navigate(routes::CREDIT_RENESANS, Default::default());
                                }
                            >
                                <span class="bank-name">{bank.name}</span>
                                {(!bank.live)
                                    .then(|| view! { <span class="bank-soon">"скоро"</span> })}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn RenesansCreditPage() -> impl IntoView {
    let auth = use_auth();

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let term_months = RwSignal::new(String::new());
    let down_payment = RwSignal::new(String::new());
    let monthly_income = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());

    let errors = RwSignal::new(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);
    let (success, set_success) = signal(false);
    let (submit_error, set_submit_error) = signal(None::<String>);

    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let submit = move |_| {
        let input = CreditFormInput {
            bank: "renesans".to_string(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            amount: amount.get_untracked(),
            term_months: term_months.get_untracked(),
            down_payment: down_payment.get_untracked(),
            monthly_income: monthly_income.get_untracked(),
            comment: comment.get_untracked(),
        };
        match validate_credit_form(&input) {
            Err(found) => errors.set(found),
            Ok(mut application) => {
                errors.set(FieldErrors::default());
                application.telegram_user =
                    auth.snapshot().telegram_user;
                spawn_local(async move {
                    set_submitting.set(true);
                    set_submit_error.set(None);
                    match applications::submit_credit(&application).await {
                        Ok(_) => {
                            set_success.set(true);
                            first_name.set(String::new());
                            last_name.set(String::new());
                            phone.set(String::new());
                            email.set(String::new());
                            amount.set(String::new());
                            term_months.set(String::new());
                            down_payment.set(String::new());
                            monthly_income.set(String::new());
                            comment.set(String::new());
                            gloo_timers::future::TimeoutFuture::new(SUCCESS_BANNER_MS).await;
                            set_success.set(false);
                        }
                        Err(err) => set_submit_error.set(Some(err.to_string())),
                    }
                    set_submitting.set(false);
                });
            }
        }
    };

    let request_phone = move |_| {
        spawn_local(async move {
            let outcome = telegram::request_contact().await;
            if let Some(shared_phone) = outcome.phone {
                phone.set(shared_phone);
            }
        });
    };

    view! {
        <div class="page">
            <Show
                when=move || !success.get()
                fallback=move || {
                    let linked = auth.is_telegram_web_app();
                    view! {
                        <div class="card card-narrow banner-success-panel">
                            <div class="success-mark">"✓"</div>
                            <h2 class="page-title">
                                "Заявка отправлена в Ренессанс кредит!"
                            </h2>
                            <p class="page-text">
                                "Наш специалист свяжется с вами в ближайшее время."
                            </p>
                            {linked
                                .then(|| {
                                    view! {
                                        <p class="success-note">
                                            "Заявка привязана к вашему Telegram аккаунту"
                                        </p>
                                    }
                                })}
                        </div>
                    }
                }
            >
                <div class="card card-narrow">
                    <div class="page-header">
                        <h1 class="page-title">"Ренессанс кредит"</h1>
                        <A href=routes::CREDIT attr:class="btn btn-ghost">"назад"</A>
                    </div>

                    {move || {
                        submit_error
                            .get()
                            .map(|message| {
                                view! { <div class="banner banner-error">{message}</div> }
                            })
                    }}

                    <h3 class="section-title">"Личные данные"</h3>
                    <TextField
                        label="Имя"
                        value=first_name
                        required=true
                        error=field_error("first_name")
                    />
                    <TextField
                        label="Фамилия"
                        value=last_name
                        required=true
                        error=field_error("last_name")
                    />
                    <TextField
                        label="Телефон"
                        value=phone
                        input_type="tel"
                        placeholder="+7 ___ ___-__-__"
                        required=true
                        error=field_error("phone")
                    />
                    <Show when=move || auth.is_telegram_web_app()>
                        <button class="btn btn-ghost" on:click=request_phone>
                            "Использовать номер из Telegram"
                        </button>
                    </Show>
                    <TextField
                        label="Email"
                        value=email
                        input_type="email"
                        error=field_error("email")
                    />

                    <h3 class="section-title">"Параметры кредита"</h3>
                    <TextField
                        label="Сумма, ₽"
                        value=amount
                        input_type="number"
                        placeholder="100000"
                        required=true
                        error=field_error("amount")
                    />
                    <TextField
                        label="Срок, месяцев"
                        value=term_months
                        input_type="number"
                        placeholder="36"
                        required=true
                        error=field_error("term_months")
                    />
                    <TextField
                        label="Первоначальный взнос, ₽"
                        value=down_payment
                        input_type="number"
                    />
                    <TextField
                        label="Ежемесячный доход, ₽"
                        value=monthly_income
                        input_type="number"
                        required=true
                        error=field_error("monthly_income")
                    />
                    <TextAreaField label="Комментарий" value=comment/>

                    <button class="btn btn-primary" disabled=submitting on:click=submit>
                        {move || {
                            if submitting.get() { "Отправляем..." } else { "Отправить заявку" }
                        }}
                    </button>
                </div>
            </Show>
        </div>
    }
}
