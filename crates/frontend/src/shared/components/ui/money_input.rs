use leptos::prelude::*;

use crate::shared::number_format::{group_digits, sanitize_money};

/// Integer text input with live thousands grouping and an optional
/// currency glyph.
///
/// The field accepts digits only; every other keystroke is rejected by
/// restoring the last accepted text. The form holds the raw digit string,
/// the visible text always carries comma separators.
#[component]
pub fn MoneyInput(
    /// Raw digit string held by the form (no separators).
    #[prop(into)]
    value: Signal<String>,
    /// Receives the raw digit string after each accepted keystroke.
    on_input: Callback<String>,
    /// Currency glyph rendered inside the field, when present.
    #[prop(optional, into)]
    prefix: Option<Signal<String>>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Renders the error outline when true.
    #[prop(optional, into)]
    invalid: Signal<bool>,
    /// ID for the input element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let has_prefix = prefix.is_some();
    let input_class = move || {
        let mut class = String::from("form__input");
        if has_prefix {
            class.push_str(" form__input--with-prefix");
        }
        if invalid.get() {
            class.push_str(" form__input--invalid");
        }
        class
    };

    let handle_input = move |ev: leptos::ev::Event| {
        let el = event_target::<web_sys::HtmlInputElement>(&ev);
        match sanitize_money(&el.value()) {
            Some(raw) => {
                el.set_value(&group_digits(&raw));
                on_input.run(raw);
            }
            // Rejected keystroke: restore the last accepted text.
            None => el.set_value(&group_digits(&value.get_untracked())),
        }
    };

    view! {
        <div class="form__affix-wrap">
            {prefix.map(|p| view! { <span class="form__prefix">{move || p.get()}</span> })}
            <input
                id=input_id
                class=input_class
                type="text"
                inputmode="numeric"
                prop:value=move || group_digits(&value.get())
                placeholder=input_placeholder
                on:input=handle_input
            />
        </div>
    }
}
