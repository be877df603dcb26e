//! Star rating display and picker.

use leptos::prelude::*;

#[component]
pub fn RatingStars(rating: u8) -> impl IntoView {
    let rating = rating.min(5);
    view! {
        <span class="rating">
            {(1..=5)
                .map(|star| {
                    let class = if star <= rating { "star star-filled" } else { "star" };
                    view! { <span class=class>"★"</span> }
                })
                .collect_view()}
        </span>
    }
}

#[component]
pub fn RatingPicker(value: RwSignal<u8>) -> impl IntoView {
    view! {
        <div class="rating rating-picker">
            {(1..=5u8)
                .map(|star| {
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if star <= value.get() { "star star-filled" } else { "star" }
                            }
                            on:click=move |_| value.set(star)
                        >
                            "★"
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
