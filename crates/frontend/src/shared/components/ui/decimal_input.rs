use leptos::prelude::*;

use crate::shared::number_format::{normalize_decimal_on_blur, sanitize_decimal};

/// Bounded decimal text input (percent, hours).
///
/// Keystrokes outside the shape `digits [. digits]` or over the cap are
/// rejected in place. A trailing decimal point survives while typing and is
/// normalized away on blur.
#[component]
pub fn DecimalInput(
    /// Field text exactly as accepted so far.
    #[prop(into)]
    value: Signal<String>,
    /// Receives the accepted text after each keystroke and after blur.
    on_input: Callback<String>,
    /// Maximum number of fraction digits.
    max_decimals: usize,
    /// Upper bound enforced while typing.
    max_value: f64,
    /// Suffix glyph rendered inside the field, e.g. `%`.
    #[prop(optional, into)]
    suffix: MaybeProp<String>,
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
    let has_suffix = suffix.get_untracked().is_some();
    let input_class = move || {
        let mut class = String::from("form__input");
        if has_suffix {
            class.push_str(" form__input--with-suffix");
        }
        if invalid.get() {
            class.push_str(" form__input--invalid");
        }
        class
    };

    let handle_input = move |ev: leptos::ev::Event| {
        let el = event_target::<web_sys::HtmlInputElement>(&ev);
        let accepted = sanitize_decimal(&value.get_untracked(), &el.value(), max_decimals, max_value);
        el.set_value(&accepted);
        on_input.run(accepted);
    };

    let handle_blur = move |_| {
        let current = value.get_untracked();
        let normalized = normalize_decimal_on_blur(&current);
        if normalized != current {
            on_input.run(normalized);
        }
    };

    view! {
        <div class="form__affix-wrap">
            <input
                id=input_id
                class=input_class
                type="text"
                inputmode="decimal"
                prop:value=move || value.get()
                placeholder=input_placeholder
                on:input=handle_input
                on:blur=handle_blur
            />
            {move || suffix.get().map(|s| view! { <span class="form__suffix">{s}</span> })}
        </div>
    }
}
