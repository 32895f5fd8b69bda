//! Count-up number used by the benefit cards in the results modal.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::number_format::format_money_int;

const STEPS: u32 = 60;

/// Animates from zero to `value` in [`STEPS`] ticks, then snaps to the exact
/// target. The rendered number is rounded to whole units with thousands
/// separators; `prefix`/`suffix` carry the currency glyph or `%`.
#[component]
pub fn AnimatedNumber(
    /// Target value, fixed for the lifetime of the component.
    value: f64,
    /// Glyph rendered before the number.
    #[prop(optional, into)]
    prefix: MaybeProp<String>,
    /// Glyph rendered after the number.
    #[prop(optional, into)]
    suffix: MaybeProp<String>,
    /// Full animation length in milliseconds.
    #[prop(optional)]
    duration_ms: Option<u32>,
) -> impl IntoView {
    let duration_ms = duration_ms.unwrap_or(1500);
    let display = RwSignal::new(0.0_f64);

    Effect::new(move |_| {
        let step_ms = duration_ms / STEPS;
        spawn_local(async move {
            let increment = value / STEPS as f64;
            let mut current = 0.0_f64;
            loop {
                TimeoutFuture::new(step_ms).await;
                current += increment;
                if current >= value {
                    _ = display.try_set(value);
                    return;
                }
                // `try_set` fails once the modal is gone; stop ticking then.
                if display.try_set(current).is_some() {
                    return;
                }
            }
        });
    });

    view! {
        <span class="animated-number">
            {move || prefix.get().unwrap_or_default()}
            {move || format_money_int(display.get())}
            {move || suffix.get().unwrap_or_default()}
        </span>
    }
}
