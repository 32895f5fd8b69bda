use leptos::prelude::*;

/// Range slider for percentage inputs, with the live value on the right and
/// the scale bounds underneath.
#[component]
pub fn PercentSlider(
    /// Current slider position.
    #[prop(into)]
    value: Signal<f64>,
    /// Receives the new position on every drag step.
    on_input: Callback<f64>,
    /// Upper bound of the scale; the lower bound is always 0.
    max: f64,
    /// Accent modifier appended to the slider classes, e.g. `green`.
    #[prop(optional, into)]
    accent: MaybeProp<String>,
) -> impl IntoView {
    let slider_class = move || match accent.get() {
        Some(a) => format!("slider slider--{}", a),
        None => "slider".to_string(),
    };
    let value_class = move || match accent.get() {
        Some(a) => format!("slider__value slider__value--{}", a),
        None => "slider__value".to_string(),
    };
    let max_caption = format!("{}%", max);

    view! {
        <div class="slider__wrap">
            <div class="slider__row">
                <input
                    type="range"
                    class=slider_class
                    min="0"
                    max=max.to_string()
                    step="1"
                    prop:value=move || value.get().to_string()
                    on:input=move |ev| {
                        if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                            on_input.run(v);
                        }
                    }
                />
                <span class=value_class>{move || format!("{}%", value.get())}</span>
            </div>
            <div class="slider__scale">
                <span>"0%"</span>
                <span>{max_caption}</span>
            </div>
        </div>
    }
}
