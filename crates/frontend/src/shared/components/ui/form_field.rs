use leptos::prelude::*;

use crate::shared::icons::icon;

/// Hover explainer rendered next to a field caption.
#[component]
pub fn InfoTip(#[prop(into)] text: String) -> impl IntoView {
    view! {
        <span class="info-tip" tabindex="0">
            {icon("info")}
            <span class="info-tip__bubble" role="tooltip">{text}</span>
        </span>
    }
}

/// Field wrapper: caption with optional explainer above the control,
/// validation message underneath.
#[component]
pub fn FormField(
    /// Field caption rendered above the control.
    #[prop(into)]
    label: String,
    /// Explainer text shown on hover next to the caption.
    #[prop(optional, into)]
    tip: MaybeProp<String>,
    /// Validation message for the field, `None` when valid.
    #[prop(optional, into)]
    error: Signal<Option<&'static str>>,
    /// Extra class for the group wrapper (layout modifiers).
    #[prop(optional, into)]
    class: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    let group_class = move || match class.get() {
        Some(extra) => format!("form__group {extra}"),
        None => "form__group".to_string(),
    };

    view! {
        <div class=group_class>
            <label class="form__label">
                <span>{label}</span>
                {move || tip.get().map(|t| view! { <InfoTip text=t /> })}
            </label>
            {children()}
            {move || {
                error
                    .get()
                    .map(|msg| view! { <span class="form__error">{format!("⚠️ {msg}")}</span> })
            }}
        </div>
    }
}
