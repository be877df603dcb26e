//! Insurance: company picker and the ОСАГО/КАСКО application form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::{TextAreaField, TextField};
use crate::services::applications;
use crate::state::auth::use_auth;
use crate::utils::constants::SUCCESS_BANNER_MS;
use crate::utils::navigation::routes;
use crate::utils::validation::{validate_insurance_form, FieldErrors, InsuranceFormInput};

struct Insurer {
    key: &'static str,
    name: &'static str,
}

const INSURERS: &[Insurer] = &[
    Insurer { key: "alfastrah", name: "АльфаСтрахование" },
    Insurer { key: "renesans", name: "Ренессанс Страхование" },
    Insurer { key: "ingosstrah", name: "Ингосстрах" },
];

fn insurer_name(key: &str) -> Option<&'static str> {
    INSURERS.iter().find(|c| c.key == key).map(|c| c.name)
}

#[component]
pub fn InsurancePage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Страховка"</h1>
                <A href=routes::MENU attr:class="btn btn-ghost">"В меню"</A>
            </div>
            <div class="bank-grid">
                {INSURERS
                    .iter()
                    .map(|insurer| {
                        view! {
                            <A
                                href=routes::insurance_company(insurer.key)
                                attr:class="bank-card"
                            >
                                <span class="bank-name">{insurer.name}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn InsuranceCompanyPage() -> impl IntoView {
    let params = use_params_map();
    let auth = use_auth();

    let company = Signal::derive(move || {
        params.with(|p| p.get("company")).unwrap_or_default()
    });

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let car_title = RwSignal::new(String::new());
    let car_year = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());
    let kasko = RwSignal::new(false);

    let errors = RwSignal::new(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);
    let (success, set_success) = signal(false);
    let (submit_error, set_submit_error) = signal(None::<String>);

    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let submit = move |_| {
        let input = InsuranceFormInput {
            company: company.get_untracked(),
            kasko: kasko.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            car_title: car_title.get_untracked(),
            car_year: car_year.get_untracked(),
            comment: comment.get_untracked(),
        };
        match validate_insurance_form(&input) {
            Err(found) => errors.set(found),
            Ok(mut application) => {
                errors.set(FieldErrors::default());
                application.telegram_user = auth.snapshot().telegram_user;
                spawn_local(async move {
                    set_submitting.set(true);
                    set_submit_error.set(None);
                    match applications::submit_insurance(&application).await {
                        Ok(_) => {
                            set_success.set(true);
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

    let title = move || insurer_name(&company.get()).unwrap_or("Страховка").to_string();

    view! {
        <div class="page">
            <Show
                when=move || !success.get()
                fallback=move || {
                    view! {
                        <div class="card card-narrow banner-success-panel">
                            <div class="success-mark">"✓"</div>
                            <h2 class="page-title">
                                {move || format!("Заявка отправлена в {}!", title())}
                            </h2>
                            <p class="page-text">
                                "Наш специалист подготовит расчёт и свяжется с вами."
                            </p>
                        </div>
                    }
                }
            >
                <div class="card card-narrow">
                    <div class="page-header">
                        <h1 class="page-title">{title}</h1>
                        <A href=routes::INSURANCE attr:class="btn btn-ghost">"назад"</A>
                    </div>

                    {move || {
                        submit_error
                            .get()
                            .map(|message| {
                                view! { <div class="banner banner-error">{message}</div> }
                            })
                    }}

                    <div class="insurance-type">
                        <button
                            type="button"
                            class=move || {
                                if kasko.get() { "toggle" } else { "toggle toggle-active" }
                            }
                            on:click=move |_| kasko.set(false)
                        >
                            "ОСАГО"
                        </button>
                        <button
                            type="button"
                            class=move || {
                                if kasko.get() { "toggle toggle-active" } else { "toggle" }
                            }
                            on:click=move |_| kasko.set(true)
                        >
                            "КАСКО"
                        </button>
                    </div>

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
                        required=true
                        error=field_error("phone")
                    />
                    <TextField
                        label="Email"
                        value=email
                        input_type="email"
                        error=field_error("email")
                    />
                    <TextField
                        label="Автомобиль"
                        value=car_title
                        placeholder="BYD Han EV"
                        required=true
                        error=field_error("car_title")
                    />
                    <TextField label="Год выпуска" value=car_year input_type="number"/>
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
