//! Extended guarantee: provider picker and application form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::{SelectField, TextAreaField, TextField};
use crate::services::applications;
use crate::state::auth::use_auth;
use crate::utils::constants::SUCCESS_BANNER_MS;
use crate::utils::navigation::routes;
use crate::utils::validation::{validate_guarantee_form, FieldErrors, GuaranteeFormInput};

struct Provider {
    key: &'static str,
    name: &'static str,
}

const PROVIDERS: &[Provider] = &[
    Provider { key: "garant-plus", name: "Гарант+" },
    Provider { key: "autoprotect", name: "АвтоПротект" },
];

const DURATIONS: &[(&str, &str)] =
    &[("12", "12 месяцев"), ("24", "24 месяца"), ("36", "36 месяцев")];

fn provider_name(key: &str) -> Option<&'static str> {
    PROVIDERS.iter().find(|c| c.key == key).map(|c| c.name)
}

#[component]
pub fn GuaranteePage() -> impl IntoView {
    view! {
        <div class="page">
            <div class="page-header">
                <h1 class="page-title">"Гарантия"</h1>
                <A href=routes::MENU attr:class="btn btn-ghost">"В меню"</A>
            </div>
            <p class="page-text">
                "Продлённая гарантия на автомобили с пробегом: двигатель, коробка,
                электрика. Оформление в день покупки."
            </p>
            <div class="bank-grid">
                {PROVIDERS
                    .iter()
                    .map(|provider| {
                        view! {
                            <A
                                href=routes::guarantee_company(provider.key)
                                attr:class="bank-card"
                            >
                                <span class="bank-name">{provider.name}</span>
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn GuaranteeCompanyPage() -> impl IntoView {
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
    let duration = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());

    let errors = RwSignal::new(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);
    let (success, set_success) = signal(false);
    let (submit_error, set_submit_error) = signal(None::<String>);

    let field_error = move |field: &'static str| {
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    };

    let submit = move |_| {
        let input = GuaranteeFormInput {
            company: company.get_untracked(),
            first_name: first_name.get_untracked(),
            last_name: last_name.get_untracked(),
            phone: phone.get_untracked(),
            email: email.get_untracked(),
            car_title: car_title.get_untracked(),
            duration_months: duration.get_untracked(),
            comment: comment.get_untracked(),
        };
        match validate_guarantee_form(&input) {
            Err(found) => errors.set(found),
            Ok(mut application) => {
                errors.set(FieldErrors::default());
                application.telegram_user = auth.snapshot().telegram_user;
                spawn_local(async move {
                    set_submitting.set(true);
                    set_submit_error.set(None);
                    match applications::submit_guarantee(&application).await {
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

    let title = move || provider_name(&company.get()).unwrap_or("Гарантия").to_string();

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
                        <A href=routes::GUARANTEE attr:class="btn btn-ghost">"назад"</A>
                    </div>

                    {move || {
                        submit_error
                            .get()
                            .map(|message| {
                                view! { <div class="banner banner-error">{message}</div> }
                            })
                    }}

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
                        placeholder="Geely Monjaro, 2023"
                        required=true
                        error=field_error("car_title")
                    />
                    <SelectField
                        label="Срок гарантии"
                        value=duration
                        options=DURATIONS
                        error=field_error("duration_months")
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
