//! Results modal: projected benefits, charts, input recap and report
//! delivery (email send + file download).

use chrono::Utc;
use gloo_timers::future::TimeoutFuture;
use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use engine::currency_symbol;

use crate::calculator::delivery::{send_report, DeliveryConfig, ReportParams};
use crate::calculator::results::charts::{BenefitsBarChart, ContributionPieChart};
use crate::calculator::view_model::Projection;
use crate::shared::components::AnimatedNumber;
use crate::shared::export::{download_report, printable_document, report_filename};
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::number_format::format_money_int;

#[derive(Debug, Clone, Copy, PartialEq)]
enum DeliveryStatus {
    Idle,
    Success,
    Error,
}

/// Snapshots the rendered report section and hands it to the browser as a
/// standalone printable file.
fn export_report(report_ref: &NodeRef<Div>) -> Result<(), String> {
    let node = report_ref.get_untracked().ok_or("Report is not rendered")?;
    let document = printable_document("ROI Calculation Results", &node.outer_html());
    let filename = report_filename(Utc::now().date_naive());
    download_report(&document, &filename)
}

/// Modal shown after a successful calculation.
///
/// The component owns the delivery state (email draft, in-flight flags,
/// status banner); the projection itself is immutable for the lifetime of
/// the modal, so a re-calculation mounts a fresh instance.
#[component]
pub fn ResultsModal(projection: Projection, on_close: Callback<()>) -> impl IntoView {
    let Projection { inputs, results } = projection;

    let symbol = currency_symbol(&inputs.currency);
    let streams = [
        results.inventory_savings,
        results.labor_savings,
        results.recovered_margin,
    ];

    let email = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let downloading = RwSignal::new(false);
    let status = RwSignal::new(DeliveryStatus::Idle);
    let status_message = RwSignal::new(String::new());
    // Every status change bumps the epoch; a pending auto-reset compares it
    // before clearing so it never wipes a newer message.
    let status_epoch = RwSignal::new(0_u32);

    let report_ref = NodeRef::<Div>::new();

    let delivery_config = DeliveryConfig::from_page();
    let delivery_available = delivery_config.is_some();

    let recap: Vec<(&'static str, String)> = vec![
        ("Currency:", inputs.currency.clone()),
        ("Industry:", inputs.industry.clone()),
        (
            "Annual Revenue:",
            format!("{}{}", symbol, format_money_int(inputs.annual_revenue)),
        ),
        ("Gross Margin:", format!("{}%", inputs.gross_margin_pct)),
        (
            "Avg Inventory:",
            format!("{}{}", symbol, format_money_int(inputs.avg_inventory)),
        ),
        ("Carrying Cost:", format!("{}%", inputs.carrying_cost_pct)),
        ("Staff Count:", format!("{}", inputs.staff_count)),
        (
            "Hours/Week Manual:",
            format!("{}", inputs.hours_per_week_manual),
        ),
    ];

    let handle_send = {
        let inputs = inputs.clone();
        let results = results.clone();
        let config = delivery_config.clone();
        move |_| {
            let to = email.with_untracked(|e| e.trim().to_string());
            if to.is_empty() || sending.get_untracked() {
                return;
            }
            let Some(config) = config.clone() else {
                return;
            };
            let params = ReportParams::build(&to, &inputs, &results);
            sending.set(true);
            spawn_local(async move {
                let outcome = send_report(&config, params).await;
                // The modal may have been closed while the request was in
                // flight; its signals are gone then.
                if sending.try_set(false).is_some() {
                    return;
                }
                let run = status_epoch.get_untracked() + 1;
                status_epoch.set(run);
                match outcome {
                    Ok(()) => {
                        status.set(DeliveryStatus::Success);
                        status_message.set(format!("Report successfully sent to {to}!"));
                        TimeoutFuture::new(3000).await;
                        if status_epoch.try_get_untracked() == Some(run) {
                            email.set(String::new());
                            status.set(DeliveryStatus::Idle);
                            status_message.set(String::new());
                        }
                    }
                    Err(err) => {
                        log::error!("Failed to send report: {err}");
                        status.set(DeliveryStatus::Error);
                        status_message.set(
                            "Failed to send report. Please try again or check your email configuration."
                                .to_string(),
                        );
                    }
                }
            });
        }
    };

    let handle_download = move |_| {
        if downloading.get_untracked() {
            return;
        }
        downloading.set(true);
        spawn_local(async move {
            // One macrotask so the busy label paints before the synchronous
            // snapshot work.
            TimeoutFuture::new(0).await;
            let outcome = export_report(&report_ref);
            if downloading.try_set(false).is_some() {
                return;
            }
            let run = status_epoch.get_untracked() + 1;
            status_epoch.set(run);
            match outcome {
                Ok(()) => {
                    status.set(DeliveryStatus::Success);
                    status_message.set("Report downloaded successfully!".to_string());
                }
                Err(err) => {
                    log::error!("Failed to download report: {err}");
                    status.set(DeliveryStatus::Error);
                    status_message.set("Failed to download report. Please try again.".to_string());
                }
            }
            TimeoutFuture::new(3000).await;
            if status_epoch.try_get_untracked() == Some(run) {
                status.set(DeliveryStatus::Idle);
                status_message.set(String::new());
            }
        });
    };

    let send_disabled = Signal::derive(move || {
        email.with(|e| e.trim().is_empty()) || sending.get() || !delivery_available
    });

    view! {
        <ModalFrame on_close=on_close modal_class="modal--results".to_string()>
            <header class="results__header">
                <button
                    type="button"
                    class="results__close"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    {icon("x")}
                </button>
                <div class="results__title">
                    {icon("trending-up")}
                    <h2>"ROI Calculation Results"</h2>
                </div>
                <p class="results__subtitle">
                    "Based on your inputs, here's your projected return on investment"
                </p>
            </header>

            <div class="results__body">
                <div class="report" node_ref=report_ref>
                    <section class="report__section">
                        <h3 class="report__section-title">"💰 Annual Benefits"</h3>
                        <div class="report__cards">
                            <div class="stat-card stat-card--green">
                                <div class="stat-card__label">"Inventory Savings"</div>
                                <div class="stat-card__value">
                                    <AnimatedNumber value=results.inventory_savings prefix=symbol />
                                </div>
                            </div>
                            <div class="stat-card stat-card--blue">
                                <div class="stat-card__label">"Labor Savings"</div>
                                <div class="stat-card__value">
                                    <AnimatedNumber value=results.labor_savings prefix=symbol />
                                </div>
                            </div>
                            <div class="stat-card stat-card--purple">
                                <div class="stat-card__label">"Recovered Margin"</div>
                                <div class="stat-card__value">
                                    <AnimatedNumber value=results.recovered_margin prefix=symbol />
                                </div>
                            </div>
                            <div class="stat-card stat-card--total">
                                <div class="stat-card__label">"Total Annual Benefit"</div>
                                <div class="stat-card__value">
                                    <AnimatedNumber
                                        value=results.total_annual_benefit
                                        prefix=symbol
                                    />
                                </div>
                            </div>
                        </div>
                        <div class="report__roi">
                            <span class="report__roi-caption">"ROI as % of Revenue: "</span>
                            <AnimatedNumber
                                value=results.total_benefit_percent_of_revenue
                                suffix="%"
                            />
                        </div>
                    </section>

                    <div class="report__charts">
                        <div class="chart-panel">
                            <h4 class="chart-panel__title">"Benefits Breakdown"</h4>
                            <BenefitsBarChart values=streams symbol=symbol.to_string() />
                        </div>
                        <div class="chart-panel">
                            <h4 class="chart-panel__title">"Contribution Distribution"</h4>
                            <ContributionPieChart values=streams />
                        </div>
                    </div>

                    <section class="report__section">
                        <h3 class="report__section-title">"📋 Your Inputs"</h3>
                        <div class="report__recap">
                            {recap
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="report__recap-item">
                                            <span class="report__recap-label">{label}</span>
                                            <span class="report__recap-value">{value}</span>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </section>
                </div>

                <div class="delivery">
                    <label class="delivery__label" for="report-email">
                        {icon("mail")}
                        <span>"Email Address (to receive report)"</span>
                    </label>
                    <div class="delivery__row">
                        <input
                            id="report-email"
                            type="email"
                            class="form__input"
                            placeholder="your@email.com"
                            prop:value=email
                            disabled=move || sending.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=send_disabled
                            on_click=handle_send
                        >
                            {move || {
                                if sending.get() {
                                    view! {
                                        <Spinner size=SpinnerSize::Small />
                                        <span>"Sending..."</span>
                                    }
                                        .into_any()
                                } else {
                                    view! { <span>"Send Report"</span> }.into_any()
                                }
                            }}
                        </Button>
                    </div>
                    {(!delivery_available)
                        .then(|| {
                            view! {
                                <p class="delivery__hint">
                                    "Email delivery is not configured for this deployment."
                                </p>
                            }
                        })}
                    {move || match status.get() {
                        DeliveryStatus::Idle => ().into_any(),
                        DeliveryStatus::Success => {
                            view! {
                                <div class="alert alert--success">
                                    {icon("check-circle")} <span>{status_message.get()}</span>
                                </div>
                            }
                                .into_any()
                        }
                        DeliveryStatus::Error => {
                            view! {
                                <div class="alert alert--error">
                                    {icon("alert-circle")} <span>{status_message.get()}</span>
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>

            <footer class="results__footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    disabled=Signal::derive(move || downloading.get())
                    on_click=handle_download
                >
                    {move || {
                        if downloading.get() {
                            view! {
                                <Spinner size=SpinnerSize::Small />
                                <span>"Generating Report..."</span>
                            }
                                .into_any()
                        } else {
                            view! {
                                {icon("download")}
                                <span>"Download Report"</span>
                            }
                                .into_any()
                        }
                    }}
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close.run(())>
                    "Close & Reset"
                </Button>
            </footer>
        </ModalFrame>
    }
}
