//! Calculator page: hero, the four form sections and the results modal.

use leptos::prelude::*;

use engine::currency_symbol;

use crate::calculator::results::ResultsModal;
use crate::calculator::view_model::{currency_options, CalculatorViewModel, INDUSTRY_OPTIONS};
use crate::shared::components::ui::{
    DecimalInput, FormField, MoneyInput, PercentSlider, SelectField,
};
use crate::shared::icons::icon;

/// Single-page ROI calculator.
///
/// The form is uncontrolled at the page level: every field binds straight
/// into the [`CalculatorViewModel`] draft, and submit either surfaces
/// per-field errors or opens the results modal.
#[component]
pub fn CalculatorPage() -> impl IntoView {
    let vm = CalculatorViewModel::new();
    let draft = vm.draft;
    let errors = vm.errors;

    let symbol = Signal::derive(move || {
        draft.with(|d| currency_symbol(&d.currency).to_string())
    });

    let currency_opts = Signal::derive(currency_options);
    let industry_opts = Signal::derive(|| {
        INDUSTRY_OPTIONS
            .iter()
            .map(|(value, label)| (value.to_string(), label.to_string()))
            .collect::<Vec<_>>()
    });

    view! {
        <div class="page">
            <div class="page__inner">
                <header class="hero">
                    <div class="hero__logo">{icon("trending-up")}</div>
                    <h1 class="hero__title">"ROI Calculator"</h1>
                    <p class="hero__tagline">
                        "Discover the financial impact of AI implementation on your business"
                    </p>
                </header>

                <div class="card">
                    <form
                        class="form"
                        on:submit=move |ev| {
                            ev.prevent_default();
                            vm.submit();
                        }
                    >
                        <section class="form__section">
                            <div class="form__section-head">
                                <span class="form__section-icon form__section-icon--purple">
                                    {icon("dollar-sign")}
                                </span>
                                <h2 class="form__section-title">"General Information"</h2>
                            </div>
                            <div class="form__grid">
                                <FormField label="Currency">
                                    <SelectField
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.currency.clone())
                                        })
                                        on_change=Callback::new(move |code: String| {
                                            draft.update(|d| d.currency = code)
                                        })
                                        options=currency_opts
                                    />
                                </FormField>
                                <FormField label="Industry Sector">
                                    <SelectField
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.industry.clone())
                                        })
                                        on_change=Callback::new(move |sector: String| {
                                            draft.update(|d| d.industry = sector)
                                        })
                                        options=industry_opts
                                    />
                                </FormField>
                            </div>
                        </section>

                        <section class="form__section">
                            <div class="form__section-head">
                                <span class="form__section-icon form__section-icon--green">
                                    {icon("package")}
                                </span>
                                <h2 class="form__section-title">"Financial Metrics"</h2>
                            </div>
                            <div class="form__grid">
                                <FormField
                                    label="Annual Revenue"
                                    tip="Total yearly revenue generated by your business. This is used to calculate percentage-based ROI metrics."
                                    error=Signal::derive(move || {
                                        errors.with(|e| e.annual_revenue)
                                    })
                                >
                                    <MoneyInput
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.annual_revenue.clone())
                                        })
                                        on_input=Callback::new(move |raw: String| {
                                            draft.update(|d| d.annual_revenue = raw)
                                        })
                                        prefix=symbol
                                        placeholder="1,000,000"
                                        invalid=Signal::derive(move || {
                                            errors.with(|e| e.annual_revenue.is_some())
                                        })
                                    />
                                </FormField>
                                <FormField
                                    label="Gross Margin %"
                                    tip="Your gross profit margin as a percentage. This represents the difference between revenue and cost of goods sold, divided by revenue."
                                    error=Signal::derive(move || {
                                        errors.with(|e| e.gross_margin_pct)
                                    })
                                >
                                    <DecimalInput
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.gross_margin_pct.clone())
                                        })
                                        on_input=Callback::new(move |raw: String| {
                                            draft.update(|d| d.gross_margin_pct = raw)
                                        })
                                        max_decimals=2
                                        max_value=100.0
                                        suffix="%"
                                        placeholder="25.5"
                                        invalid=Signal::derive(move || {
                                            errors.with(|e| e.gross_margin_pct.is_some())
                                        })
                                    />
                                </FormField>
                                <FormField
                                    label="Average Inventory Value"
                                    tip="The average value of inventory you keep in stock. This includes raw materials, work-in-progress, and finished goods."
                                    error=Signal::derive(move || {
                                        errors.with(|e| e.avg_inventory)
                                    })
                                >
                                    <MoneyInput
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.avg_inventory.clone())
                                        })
                                        on_input=Callback::new(move |raw: String| {
                                            draft.update(|d| d.avg_inventory = raw)
                                        })
                                        prefix=symbol
                                        placeholder="500,000"
                                        invalid=Signal::derive(move || {
                                            errors.with(|e| e.avg_inventory.is_some())
                                        })
                                    />
                                </FormField>
                                <FormField
                                    label="Inventory Carrying Cost (%)"
                                    tip="Annual cost to hold inventory as a percentage. Includes storage, insurance, depreciation, and opportunity costs. Typically 15-30%."
                                >
                                    <PercentSlider
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.carrying_cost_pct)
                                        })
                                        on_input=Callback::new(move |v: f64| {
                                            draft.update(|d| d.carrying_cost_pct = v)
                                        })
                                        max=50.0
                                        accent="purple"
                                    />
                                </FormField>
                                <FormField
                                    label="Expected Reduction in Excess Inventory (%)"
                                    tip="Percentage of excess inventory you expect to eliminate with AI-powered demand forecasting and optimization. Industry average: 10-20%."
                                >
                                    <PercentSlider
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.expected_reduction_pct)
                                        })
                                        on_input=Callback::new(move |v: f64| {
                                            draft.update(|d| d.expected_reduction_pct = v)
                                        })
                                        max=30.0
                                        accent="green"
                                    />
                                </FormField>
                            </div>
                        </section>

                        <section class="form__section">
                            <div class="form__section-head">
                                <span class="form__section-icon form__section-icon--blue">
                                    {icon("users")}
                                </span>
                                <h2 class="form__section-title">"Labor & Operations"</h2>
                            </div>
                            <div class="form__grid">
                                <FormField
                                    label="Staff Count"
                                    tip="Number of employees involved in inventory management, planning, and related operations."
                                    error=Signal::derive(move || errors.with(|e| e.staff_count))
                                >
                                    <MoneyInput
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.staff_count.clone())
                                        })
                                        on_input=Callback::new(move |raw: String| {
                                            draft.update(|d| d.staff_count = raw)
                                        })
                                        placeholder="5"
                                        invalid=Signal::derive(move || {
                                            errors.with(|e| e.staff_count.is_some())
                                        })
                                    />
                                </FormField>
                                <FormField
                                    label="Average Annual Cost per Person"
                                    tip="Total annual employment cost per person including salary, benefits, taxes, and overhead."
                                    error=Signal::derive(move || {
                                        errors.with(|e| e.avg_cost_per_person)
                                    })
                                >
                                    <MoneyInput
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.avg_cost_per_person.clone())
                                        })
                                        on_input=Callback::new(move |raw: String| {
                                            draft.update(|d| d.avg_cost_per_person = raw)
                                        })
                                        prefix=symbol
                                        placeholder="60,000"
                                        invalid=Signal::derive(move || {
                                            errors.with(|e| e.avg_cost_per_person.is_some())
                                        })
                                    />
                                </FormField>
                                <FormField
                                    label="Hours/Week on Manual Tasks"
                                    tip="Average hours per week each employee spends on manual, repetitive inventory-related tasks that could be automated."
                                    error=Signal::derive(move || {
                                        errors.with(|e| e.hours_per_week_manual)
                                    })
                                >
                                    <DecimalInput
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.hours_per_week_manual.clone())
                                        })
                                        on_input=Callback::new(move |raw: String| {
                                            draft.update(|d| d.hours_per_week_manual = raw)
                                        })
                                        max_decimals=1
                                        max_value=40.0
                                        placeholder="20"
                                        invalid=Signal::derive(move || {
                                            errors.with(|e| e.hours_per_week_manual.is_some())
                                        })
                                    />
                                </FormField>
                                <FormField
                                    label="% Manual Time Reducible with AI"
                                    tip="Percentage of manual work time that can be automated or significantly reduced using AI. Conservative estimate: 40-60%."
                                >
                                    <PercentSlider
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.pct_manual_time_reducible)
                                        })
                                        on_input=Callback::new(move |v: f64| {
                                            draft.update(|d| d.pct_manual_time_reducible = v)
                                        })
                                        max=80.0
                                        accent="blue"
                                    />
                                </FormField>
                            </div>
                        </section>

                        <section class="form__section">
                            <div class="form__section-head">
                                <span class="form__section-icon form__section-icon--orange">
                                    {icon("shopping-cart")}
                                </span>
                                <h2 class="form__section-title">"Sales Impact"</h2>
                            </div>
                            <div class="form__grid">
                                <FormField
                                    label="% Orders Late/Incomplete/Rushed"
                                    tip="Percentage of orders that are delayed, incomplete, or require rush processing due to inventory issues. This impacts customer satisfaction."
                                >
                                    <PercentSlider
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.pct_orders_late_or_incomplete)
                                        })
                                        on_input=Callback::new(move |v: f64| {
                                            draft.update(|d| d.pct_orders_late_or_incomplete = v)
                                        })
                                        max=30.0
                                        accent="orange"
                                    />
                                </FormField>
                                <FormField
                                    label="% Sales Lost Due to Stockouts/Delays"
                                    tip="Percentage of potential sales lost when products are out of stock or delivery is delayed. Customers may go to competitors."
                                >
                                    <PercentSlider
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.pct_sales_lost)
                                        })
                                        on_input=Callback::new(move |v: f64| {
                                            draft.update(|d| d.pct_sales_lost = v)
                                        })
                                        max=20.0
                                        accent="red"
                                    />
                                </FormField>
                                <FormField
                                    label="% Lost Sales Recoverable with AI"
                                    tip="Percentage of lost sales you can recover by improving inventory availability and forecasting with AI technology. Typical range: 60-80%."
                                    class="form__group--wide"
                                >
                                    <PercentSlider
                                        value=Signal::derive(move || {
                                            draft.with(|d| d.pct_recoverable)
                                        })
                                        on_input=Callback::new(move |v: f64| {
                                            draft.update(|d| d.pct_recoverable = v)
                                        })
                                        max=90.0
                                        accent="emerald"
                                    />
                                </FormField>
                            </div>
                        </section>

                        <button type="submit" class="form__submit">
                            <span>"Calculate ROI"</span>
                            {icon("trending-up")}
                        </button>
                    </form>
                </div>
            </div>

            {move || {
                vm.projection
                    .get()
                    .map(|projection| {
                        view! {
                            <ResultsModal
                                projection=projection
                                on_close=Callback::new(move |_| vm.close_and_reset())
                            />
                        }
                    })
            }}
        </div>
    }
}
