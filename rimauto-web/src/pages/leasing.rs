//! Leasing: company picker and the shared application form.
//!
//! Direct and Carcade leasing are the same form posting to their own
//! endpoints; the `company` route parameter selects the target.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::{TextAreaField, TextField};
use crate::services::applications;
use crate::state::auth::use_auth;
use crate::utils::constants::SUCCESS_BANNER_MS;
use crate::utils::navigation::routes;
use crate::utils::validation::{validate_leasing_form, FieldErrors, LeasingFormInput};

struct LeasingCompany {
    key: &'static str,
    name: &'static str,
}

const COMPANIES: &[LeasingCompany] = &[
    LeasingCompany { key: "europlan", name: "Европлан" },
    LeasingCompany { key: "carcade", name: "Каркаде" },
    LeasingCompany { key: "direct", name: "Прямой лизинг" },
];

fn company_name(key: &str) -> Option<&'static str> {
    COMPANIES.iter().find(|c| c.key == key).map(|c| c.name)
}

#[component]
pub fn LeasingPage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Лизинг"</h1>
                <A href=routes::MENU attr:class="btn btn-ghost">"В меню"</A>
            </div>
            <div class="bank-grid">
                {COMPANIES
                    .iter()
                    .map(|company| {
                        view! {
                            <A
                                href=routes::leasing_company(company.key)
                                attr:class="bank-card"
                            >
                                <span class="bank-name">{company.name}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn LeasingCompanyPage() -> impl IntoView {
    let params = use_params_map();
    let auth = use_auth();

    let company = Signal::derive(move || {
        params.with(|p| p.get("company")).unwrap_or_default()
    });

    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let company_name_field = RwSignal::new(String::new());
    let inn = RwSignal::new(String::new());
    let property_value = RwSignal::new(String::new());
    let term_months = RwSignal::new(String::new());
    let advance_percent = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());

    let errors = RwSignal::new(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);
    let (success, set_success) = signal(false);
    let (submit_error, set_submit_error) = signal(None::<String>);

    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let submit = move |_| {
        let input = LeasingFormInput {
            company: company.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            company_name: company_name_field.get_untracked(),
            inn: inn.get_untracked(),
            property_value: property_value.get_untracked(),
            term_months: term_months.get_untracked(),
            advance_percent: advance_percent.get_untracked(),
            comment: comment.get_untracked(),
        };
        match validate_leasing_form(&input) {
            Err(found) => errors.set(found),
            Ok(mut application) => {
                errors.set(FieldErrors::default());
                application.telegram_user = auth.snapshot().telegram_user;
                spawn_local(async move {
                    set_submitting.set(true);
                    set_submit_error.set(None);
                    match applications::submit_leasing(&application).await {
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

    let title = move || {
        company_name(&company.get()).unwrap_or("Лизинг").to_string()
    };

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
                                "Наш специалист свяжется с вами в ближайшее время."
                            </p>
                        </div>
                    }
                }
            >
                <div class="card card-narrow">
                    <div class="page-header">
                        <h1 class="page-title">{title}</h1>
                        <A href=routes::LEASING attr:class="btn btn-ghost">"назад"</A>
                    </div>

                    {move || {
                        submit_error
                            .get()
                            .map(|message| {
                                view! { <div class="banner banner-error">{message}</div> }
                            })
                    }}

                    <h3 class="section-title">"Контактное лицо"</h3>
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

                    <h3 class="section-title">"Организация"</h3>
                    <TextField label="Название компании" value=company_name_field/>
                    <TextField label="ИНН" value=inn error=field_error("inn")/>

                    <h3 class="section-title">"Предмет лизинга"</h3>
                    <TextField
                        label="Стоимость, ₽"
                        value=property_value
                        input_type="number"
                        placeholder="100000"
                        required=true
                        error=field_error("property_value")
                    />
                    <TextField
                        label="Срок, месяцев"
                        value=term_months
                        input_type="number"
                        placeholder="48"
                        required=true
                        error=field_error("term_months")
                    />
                    <TextField
                        label="Аванс, %"
                        value=advance_percent
                        input_type="number"
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
