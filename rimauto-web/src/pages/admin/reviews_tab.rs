//! Review moderation: reply and delete.

use leptos::prelude::*;
use leptos::task::spawn_local;

use shared::dto::reviews::{ReplyRequest, Review, ReviewPatch};

use crate::components::{Loading, RatingStars};
use crate::services::reviews;
use crate::utils::format::short_date;

const DEFAULT_REPLY_AUTHOR: &str = "Менеджер";

#[component]
pub fn ReviewsTab() -> impl IntoView {
    let (items, set_items) = signal(Vec::<Review>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(None::<String>);
    let reply_for = RwSignal::new(None::<i64>);
    let reply_text = RwSignal::new(String::new());
    let edit_for = RwSignal::new(None::<i64>);
    let edit_text = RwSignal::new(String::new());

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

    let send_reply = move |id: i64| {
        let text = reply_text.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        spawn_local(async move {
            let request = ReplyRequest { reply: text, author: DEFAULT_REPLY_AUTHOR.to_string() };
            match reviews::reply(id, &request).await {
                Ok(updated) => {
                    reply_for.set(None);
                    reply_text.set(String::new());
                    set_items.update(|all| {
                        if let Some(slot) = all.iter_mut().find(|r| r.id == id) {
                            *slot = updated;
                        }
                    });
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    // Moderation edit: trims profanity/contacts out of the text
    let save_edit = move |id: i64| {
        let text = edit_text.get_untracked().trim().to_string();
        if text.is_empty() {
            return;
        }
        spawn_local(async move {
            let patch = ReviewPatch { rating: None, text: Some(text) };
            match reviews::update(id, &patch).await {
                Ok(updated) => {
                    edit_for.set(None);
                    set_items.update(|all| {
                        if let Some(slot) = all.iter_mut().find(|r| r.id == id) {
                            *slot = updated;
                        }
                    });
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let delete = move |id: i64| {
        spawn_local(async move {
            match reviews::remove(id).await {
                Ok(_) => set_items.update(|all| all.retain(|r| r.id != id)),
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <div class="admin-pane">
            {move || {
                error
                    .get()
                    .map(|message| view! { <div class="banner banner-error">{message}</div> })
            }}
            <Show when=move || !loading.get() fallback=|| view! { <Loading/> }>
                <div class="admin-rows">
                    {move || {
                        items
                            .get()
                            .into_iter()
                            .map(|review| {
                                let id = review.id;
                                let has_reply = review.reply.is_some();
                                let original_text = review.text.clone();
                                view! {
                                    <div class="card admin-row">
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
                                            .as_ref()
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
                                        <div class="admin-row-actions">
                                            {(!has_reply)
                                                .then(|| {
                                                    view! {
                                                        <button
                                                            class="btn btn-ghost btn-small"
                                                            on:click=move |_| {
                                                                reply_for.set(Some(id));
                                                                reply_text.set(String::new());
                                                            }
                                                        >
                                                            "Ответить"
                                                        </button>
                                                    }
                                                })}
                                            <button
                                                class="btn btn-ghost btn-small"
                                                on:click=move |_| {
                                                    edit_for.set(Some(id));
                                                    edit_text.set(original_text.clone());
                                                }
                                            >
                                                "Редактировать"
                                            </button>
                                            <button
                                                class="btn btn-ghost btn-small btn-danger"
                                                on:click=move |_| delete(id)
                                            >
                                                "Удалить"
                                            </button>
                                        </div>
                                        <Show when=move || edit_for.get() == Some(id)>
                                            <div class="reply-editor">
                                                <textarea
                                                    class="form-input form-textarea"
                                                    prop:value=move || edit_text.get()
                                                    on:input=move |ev| {
                                                        edit_text.set(event_target_value(&ev));
                                                    }
                                                ></textarea>
                                                <button
                                                    class="btn btn-small"
                                                    on:click=move |_| save_edit(id)
                                                >
                                                    "Сохранить"
                                                </button>
                                            </div>
                                        </Show>
                                        <Show when=move || reply_for.get() == Some(id)>
                                            <div class="reply-editor">
                                                <textarea
                                                    class="form-input form-textarea"
                                                    placeholder="Текст ответа"
                                                    prop:value=move || reply_text.get()
                                                    on:input=move |ev| {
                                                        reply_text.set(event_target_value(&ev));
                                                    }
                                                ></textarea>
                                                <button
                                                    class="btn btn-small"
                                                    on:click=move |_| send_reply(id)
                                                >
                                                    "Отправить ответ"
                                                </button>
                                            </div>
                                        </Show>
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
