//! Catalog pagination.

use leptos::prelude::*;

#[component]
pub fn Pagination(
    page: Signal<u32>,
    total_pages: Signal<u32>,
    #[prop(into)] on_change: Callback<u32>,
) -> impl IntoView {
    let go = move |target: u32| {
        if target >= 1 && target <= total_pages.get_untracked() && target != page.get_untracked() {
            on_change.run(target);
        }
    };

    view! {
        <Show when=move || (total_pages.get() > 1)>
            <div class="pagination">
                <button
                    class="pagination-btn"
                    disabled=move || page.get() <= 1
                    on:click=move |_| go(page.get_untracked() - 1)
                >
                    "‹"
                </button>
                <span class="pagination-status">
                    {move || format!("{} / {}", page.get(), total_pages.get())}
                </span>
                <button
                    class="pagination-btn"
                    disabled=move || page.get() >= total_pages.get()
                    on:click=move |_| go(page.get_untracked() + 1)
                >
                    "›"
                </button>
            </div>
        </Show>
    }
}

/// Pages needed for `total` records at `page_size` per page.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 1;
    }
    ((total + u64::from(page_size) - 1) / u64::from(page_size)).max(1) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_up_partial_pages() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(95, 10), 10);
    }
}
