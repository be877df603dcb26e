//! Public reviews: listing plus a submit form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::dto::reviews::{NewReview, Review};

use crate::components::{Loading, RatingPicker, RatingStars, TextAreaField, TextField};
use crate::services::reviews;
use crate::state::auth::use_auth;
use crate::utils::format::short_date;
use crate::utils::validation::{validate_review, FieldErrors};

#[component]
pub fn ReviewsPage() -> impl IntoView {
    let auth = use_auth();

    let (items, set_items) = signal(Vec::<Review>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);

    let author = RwSignal::new(auth.snapshot().display_name());
    let rating = RwSignal::new(5u8);
    let text = RwSignal::new(String::new());
    let form_errors = RwSignal::new(FieldErrors::default());
    let (submitting, set_submitting) = signal(false);

    let reload = move || {
        spawn_local(async move {
            set_loading.set(true);
            match reviews::list().await {
                Ok(found) => set_items.set(found),
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };
    reload();

    let submit = move |_| {
        let author_value = author.get_untracked();
        let rating_value = rating.get_untracked();
        let text_value = text.get_untracked();
        match validate_review(&author_value, rating_value, &text_value) {
            Err(found) => form_errors.set(found),
            Ok(()) => {
                form_errors.set(FieldErrors::default());
                let review = NewReview {
                    author: author_value.trim().to_string(),
                    rating: rating_value,
                    text: text_value.trim().to_string(),
                };
                spawn_local(async move {
                    set_submitting.set(true);
                    match reviews::create(&review).await {
                        Ok(created) => {
                            text.set(String::new());
                            rating.set(5);
                            set_items.update(|all| all.insert(0, created));
                        }
                        Err(err) => set_error.set(Some(err.to_string())),
                    }
                    set_submitting.set(false);
                });
            }
        }
    };

    view! {
        <div class="page">
            <h1 class="page-title">"Отзывы"</h1>

            <div class="card card-narrow review-form">
                <h3 class="section-title">"Оставить отзыв"</h3>
                {move || {
                    form_errors
                        .with(|e| e.first_message().map(str::to_string))
                        .map(|message| view! { <div class="banner banner-error">{message}</div> })
                }}
                <TextField label="Ваше имя" value=author required=true/>
                <RatingPicker value=rating/>
                <TextAreaField label="Отзыв" value=text placeholder="Как прошла покупка?"/>
                <button class="btn btn-primary" disabled=submitting on:click=submit>
                    {move || if submitting.get() { "Отправляем..." } else { "Отправить" }}
                </button>
            </div>

            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="banner banner-error">{message}</div> })
            }}

            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <div class="review-list">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|review| {
                                view! {
                                    <div class="card review-card">
                                        <div class="review-header">
                                            <span class="review-author">
                                                {review.author.clone()}
                                            </span>
                                            <RatingStars rating=review.rating/>
                                            <span class="review-date">
                                                {short_date(&review.created_at)}
                                            </span>
                                        </div>
                                        <p class="review-text">{review.text.clone()}</p>
                                        {review
                                            .reply
                                            .map(|reply| {
                                                view! {
                                                    <div class="review-reply">
                                                        <span class="review-reply-author">
                                                            {reply.author.clone()}
                                                        </span>
                                                        <p>{reply.text.clone()}</p>
                                                    </div>
                                                }
                                            })}
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </Show>
        </div>
    }
}
