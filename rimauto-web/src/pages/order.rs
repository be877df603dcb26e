//! Purchase request form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::dto::cars::Car;
use shared::dto::orders::{NewOrder, OrderInfo};

use crate::components::{CitySelector, TextAreaField, TextField};
use crate::platform::telegram;
use crate::services::auth as auth_flow;
use crate::services::{cars, orders};
use crate::state::auth::use_auth;
use crate::state::delivery::use_delivery;
use crate::utils::url::get_query_param;
use crate::utils::validation::validate_phone;

#[component]
pub fn OrderPage() -> impl IntoView {
    let auth = use_auth();
    let delivery = use_delivery();

    let (car, set_car) = signal(None::<Car>);
    let (submitting, set_submitting) = signal(false);
    let (submitted, set_submitted) = signal(false);
    let (submit_error, set_submit_error) = signal(None::<String>);

    let name = RwSignal::new(auth.snapshot().display_name());
    let phone = RwSignal::new(String::new());
    let comment = RwSignal::new(String::new());
    let phone_error = RwSignal::new(None::<String>);

    // ?car=<id> preselects the listing the request is about
    if let Some(car_id) = get_query_param("car") {
        spawn_local(async move {
            match cars::by_id(&car_id).await {
                Ok(found) => set_car.set(Some(found)),
                Err(err) => log::warn!("order: car lookup failed: {err}"),
            }
        });
    }

    let (history, set_history) = signal(Vec::<OrderInfo>::new());
    if auth.snapshot().is_authenticated {
        spawn_local(async move {
            match orders::my_orders().await {
                Ok(found) => set_history.set(found),
                Err(err) => log::warn!("order: history unavailable: {err}"),
            }
        });
    }

    let request_phone = move |_| {
        spawn_local(async move {
            let outcome = telegram::request_contact().await;
            if let Some(shared_phone) = outcome.phone {
                phone.set(shared_phone.clone());
                // Remember the number in the profile so forms prefill next time
                if auth.is_authenticated() {
                    if let Err(err) = auth_flow::save_phone(auth, shared_phone).await {
                        log::warn!("order: phone save failed: {err}");
                    }
                }
            } else if !outcome.accepted {
                log::info!(
                    "contact request declined: {}",
                    outcome.reason.unwrap_or_else(|| "declined".into())
                );
            }
        });
    };

    let submit = move |_| {
        let check = validate_phone(&phone.get_untracked());
        phone_error.set(check.error.clone());
        if !check.is_valid {
            return;
        }
        let trimmed_name = name.get_untracked().trim().to_string();
        if trimmed_name.is_empty() {
            set_submit_error.set(Some("Представьтесь, пожалуйста".to_string()));
            return;
        }
        let order = NewOrder {
            car_id: car.get_untracked().map(|c| c.id).unwrap_or_default(),
            name: trimmed_name,
            phone: phone.get_untracked().trim().to_string(),
            city_id: delivery.selected_city().map(|c| c.id),
            comment: {
                let text = comment.get_untracked().trim().to_string();
                (!text.is_empty()).then_some(text)
            },
        };
        spawn_local(async move {
            set_submitting.set(true);
            set_submit_error.set(None);
            match orders::create(&order).await {
                Ok(_) => set_submitted.set(true),
                Err(err) => set_submit_error.set(Some(err.to_string())),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="page">
            <Show
                when=move || !submitted.get()
                fallback=|| {
                    view! {
                        <div class="card card-narrow banner-success-panel">
                            <div class="success-mark">"✓"</div>
                            <h2 class="page-title">"Заявка отправлена!"</h2>
                            <p class="page-text">
                                "Менеджер свяжется с вами в ближайшее время."
                            </p>
                        </div>
                    }
                }
            >
                <div class="card card-narrow">
                    <h1 class="page-title">"Заявка на автомобиль"</h1>
                    {move || {
                        car.get()
                            .map(|c| view! { <p class="order-car">{c.title.clone()}</p> })
                    }}
                    {move || {
                        submit_error
                            .get()
                            .map(|message| {
                                view! { <div class="banner banner-error">{message}</div> }
                            })
                    }}
                    <TextField label="Имя" value=name required=true/>
                    <TextField
                        label="Телефон"
                        value=phone
                        input_type="tel"
                        placeholder="+7 ___ ___-__-__"
                        required=true
                        error=Signal::derive(move || phone_error.get())
                    />
                    <Show when=move || auth.is_telegram_web_app()>
                        <button class="btn btn-ghost" on:click=request_phone>
                            "Использовать номер из Telegram"
                        </button>
                    </Show>
                    <div class="delivery-block">
                        <h3 class="section-title">"Город доставки"</h3>
                        <CitySelector/>
                    </div>
                    <TextAreaField label="Комментарий" value=comment/>
                    <button class="btn btn-primary" disabled=submitting on:click=submit>
                        {move || if submitting.get() { "Отправляем..." } else { "Отправить" }}
                    </button>
                </div>

                <Show when=move || !history.with(Vec::is_empty)>
                    <div class="card card-narrow">
                        <h3 class="section-title">"Мои заявки"</h3>
                        <ul class="order-history">
                            {move || {
                                history
                                    .get()
                                    .into_iter()
                                    .map(|order| {
                                        view! {
                                            <li class="order-history-row">
                                                <span>{order.car_title.clone()}</span>
                                                <span class="order-status">
                                                    {order.status.clone()}
                                                </span>
                                                <span class="order-date">
                                                    {crate::utils::format::short_date(
                                                        &order.created_at,
                                                    )}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </div>
                </Show>
            </Show>
        </div>
    }
}
