//! Applications management: list by type and status, advance statuses.

use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::dto::applications::{ApplicationStats, ApplicationStatus, Stored};
use shared::utils::format_rub;

use crate::components::Loading;
use crate::services::applications;
use crate::utils::format::short_date;

/// Type-erased listing row; each application kind renders its own summary.
#[derive(Clone, PartialEq)]
struct Row {
    id: i64,
    status: ApplicationStatus,
    created_at: String,
    summary: String,
    contact: String,
}

fn status_class(status: ApplicationStatus) -> &'static str {
    match status {
        ApplicationStatus::New => "status-badge status-new",
        ApplicationStatus::InProgress => "status-badge status-in-progress",
        ApplicationStatus::Approved => "status-badge status-approved",
        ApplicationStatus::Rejected => "status-badge status-rejected",
    }
}

const KINDS: &[(&str, &str)] = &[
    ("credit", "Кредит"),
    ("leasing", "Лизинг"),
    ("insurance", "Страховка"),
    ("guarantee", "Гарантия"),
];

async fn fetch_rows(
    kind: &str,
    status: Option<ApplicationStatus>,
) -> Result<Vec<Row>, crate::services::api::ApiError> {
    fn contact<T>(stored: &Stored<T>, applicant: &shared::dto::applications::Applicant) -> Row
    where
        T: Clone,
    {
        Row {
            id: stored.id,
            status: stored.status,
            created_at: stored.created_at.clone(),
            summary: String::new(),
            contact: format!(
                "{} {} · {}",
                applicant.first_name, applicant.last_name, applicant.phone
            ),
        }
    }

    match kind {
        "credit" => {
            let items = applications::list_credit(status).await?;
            Ok(items
                .iter()
                .map(|stored| {
                    let mut row = contact(stored, &stored.form.applicant);
                    row.summary = format!(
                        "{} · {} на {} мес.",
                        stored.form.bank,
                        format_rub(stored.form.amount),
                        stored.form.term_months
                    );
                    row
                })
                .collect())
        }
        "leasing" => {
            let items = applications::list_leasing(status).await?;
            Ok(items
                .iter()
                .map(|stored| {
                    let mut row = contact(stored, &stored.form.applicant);
                    row.summary = format!(
                        "{} · {} на {} мес.",
                        stored.form.company,
                        format_rub(stored.form.property_value),
                        stored.form.term_months
                    );
                    row
                })
                .collect())
        }
        "insurance" => {
            let items = applications::list_insurance(status).await?;
            Ok(items
                .iter()
                .map(|stored| {
                    let mut row = contact(stored, &stored.form.applicant);
                    row.summary = format!(
                        "{} · {} · {}",
                        stored.form.company,
                        stored.form.insurance_type.label(),
                        stored.form.car_title
                    );
                    row
                })
                .collect())
        }
        _ => {
            let items = applications::list_guarantee(status).await?;
            Ok(items
                .iter()
                .map(|stored| {
                    let mut row = contact(stored, &stored.form.applicant);
                    row.summary = format!(
                        "{} · {} · {} мес.",
                        stored.form.company, stored.form.car_title, stored.form.duration_months
                    );
                    row
                })
                .collect())
        }
    }
}

#[component]
pub fn ApplicationsTab() -> impl IntoView {
    let kind = RwSignal::new("credit".to_string());
    let status_filter = RwSignal::new(None::<ApplicationStatus>);
    let (rows, set_rows) = signal(Vec::<Row>::new());
    let (stats, set_stats) = signal(None::<ApplicationStats>);
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let reload_tick = RwSignal::new(0u32);

    spawn_local(async move {
        match applications::stats().await {
            Ok(found) => set_stats.set(Some(found)),
            Err(err) => log::warn!("admin: stats failed: {err}"),
        }
    });

    Effect::new(move || {
        let current_kind = kind.get();
        let current_status = status_filter.get();
        reload_tick.track();
        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);
            match fetch_rows(&current_kind, current_status).await {
                Ok(found) => set_rows.set(found),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    });

    let advance = move |id: i64, next: ApplicationStatus| {
        let current_kind = kind.get_untracked();
        spawn_local(async move {
            match applications::update_status(&current_kind, id, next).await {
                Ok(_) => reload_tick.update(|t| *t += 1),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="admin-pane">
            {move || {
                stats
                    .get()
                    .map(|s| {
                        view! {
                            <div class="stats-row">
                                <span>"Кредит: " {s.credit}</span>
                                <span>"Лизинг: " {s.leasing}</span>
                                <span>"Страховка: " {s.insurance}</span>
                                <span>"Гарантия: " {s.guarantee}</span>
                                <span class="stats-new">"Новых: " {s.new_total}</span>
                            </div>
                        }
                    })
            }}

            <div class="admin-filters">
                <select
                    class="form-input"
                    prop:value=move || kind.get()
                    on:change=move |ev| kind.set(event_target_value(&ev))
                >
                    {KINDS
                        .iter()
                        .map(|(value, label)| {
                            view! { <option value=*value>{*label}</option> }
                        })
                        .collect_view()}
                </select>
                <select
                    class="form-input"
                    on:change=move |ev| {
                        status_filter
                            .set(match event_target_value(&ev).as_str() {
                                "new" => Some(ApplicationStatus::New),
                                "in_progress" => Some(ApplicationStatus::InProgress),
                                "approved" => Some(ApplicationStatus::Approved),
                                "rejected" => Some(ApplicationStatus::Rejected),
                                _ => None,
                            });
                    }
                >
                    <option value="">"Все статусы"</option>
                    <option value="new">"Новые"</option>
                    <option value="in_progress">"В работе"</option>
                    <option value="approved">"Одобренные"</option>
                    <option value="rejected">"Отклонённые"</option>
                </select>
            </div>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="banner banner-error">{message}</div> })
            }}

            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <Show
                    when=move || !rows.with(Vec::is_empty)
                    fallback=|| view! { <p class="catalog-empty">"Заявок нет"</p> }
                >
                    <div class="admin-rows">
                        {move || {
                            rows.get()
                                .into_iter()
                                .map(|row| {
                                    let id = row.id;
                                    view! {
                                        <div class="card admin-row">
                                            <div class="admin-row-head">
                                                <span class="admin-row-id">"#" {row.id}</span>
                                                <span class=status_class(row.status)>
                                                    {row.status.label()}
                                                </span>
                                                <span class="admin-row-date">
                                                    {short_date(&row.created_at)}
                                                </span>
                                            </div>
                                            <p class="admin-row-summary">{row.summary.clone()}</p>
                                            <p class="admin-row-contact">{row.contact.clone()}</p>
                                            <div class="admin-row-actions">
                                                {ApplicationStatus::ALL
                                                    .into_iter()
                                                    .filter(|next| *next != row.status)
                                                    .map(|next| {
                                                        view! {
                                                            <button
                                                                class="btn btn-ghost btn-small"
                                                                on:click=move |_| advance(id, next)
                                                            >
                                                                {next.label()}
                                                            </button>
                                                        }
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                        }}
                    </div>
                </Show>
            </Show>
        </div>
    }
}
