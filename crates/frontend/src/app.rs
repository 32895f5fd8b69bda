use leptos::prelude::*;

use crate::calculator::CalculatorPage;

#[component]
pub fn App() -> impl IntoView {
    view! { <CalculatorPage /> }
}
