//! Form field primitives shared by the application forms.

use leptos::prelude::*;

/// Labelled text input with an optional validation error underneath.
#[component]
pub fn TextField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(default = "")] placeholder: &'static str,
    #[prop(default = false)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">
                {label}
                {required.then(|| view! { <span class="form-required">" *"</span> })}
            </label>
            <input
                class="form-input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {error.map(|error| {
                view! {
                    <Show when=move || error.with(Option::is_some)>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                }
            })}
        </div>
    }
}

/// Labelled multi-line input.
#[component]
pub fn TextAreaField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(default = "")] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <textarea
                class="form-input form-textarea"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

/// Labelled select over static `(value, label)` options.
#[component]
pub fn SelectField(
    label: &'static str,
    value: RwSignal<String>,
    options: &'static [(&'static str, &'static str)],
    #[prop(optional, into)] error: Option<Signal<Option<String>>>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{label}</label>
            <select
                class="form-input"
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                <option value="">"— выберите —"</option>
                {options
                    .iter()
                    .map(|(option_value, option_label)| {
                        view! { <option value=*option_value>{*option_label}</option> }
                    })
                    .collect_view()}
            </select>
            {error.map(|error| {
                view! {
                    <Show when=move || error.with(Option::is_some)>
                        <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                }
            })}
        </div>
    }
}
