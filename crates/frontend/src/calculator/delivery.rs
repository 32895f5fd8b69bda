//! Email delivery of the calculation report through the EmailJS REST API.

use engine::{currency_symbol, RoiInputs, RoiResults};
use gloo_net::http::Request;
use serde::Serialize;

use crate::shared::number_format::{format_money_int, format_percent2};

/// EmailJS send endpoint.
const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

/// Credentials for the EmailJS account.
///
/// These are deployment configuration, not code: the host page carries them
/// in `<meta>` tags so they can be rotated without a rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliveryConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl DeliveryConfig {
    /// Reads the config from the host page meta tags. `None` when any tag
    /// is missing or empty, which disables sending in the UI.
    pub fn from_page() -> Option<Self> {
        let service_id = meta_content("emailjs-service-id")?;
        let template_id = meta_content("emailjs-template-id")?;
        let public_key = meta_content("emailjs-public-key")?;
        Some(Self {
            service_id,
            template_id,
            public_key,
        })
    }
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name='{}']", name))
        .ok()??;
    let content = element.get_attribute("content")?;
    let trimmed = content.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Request body for the EmailJS send endpoint.
#[derive(Debug, Serialize)]
struct SendEmailRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: ReportParams,
}

/// Template variables for the report email. Field names match the variable
/// names in the mail template, so renaming any of them breaks delivery.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportParams {
    pub to_email: String,
    pub subject: String,
    pub inventory_savings: String,
    pub labor_savings: String,
    pub recovered_margin: String,
    pub total_annual_benefit: String,
    pub roi_percentage: String,
    pub currency: String,
    pub industry: String,
    pub annual_revenue: String,
    pub gross_margin: String,
    pub avg_inventory: String,
    pub carrying_cost: String,
    pub staff_count: String,
    pub hours_manual: String,
    pub expected_reduction: String,
    pub manual_time_reducible: String,
    pub orders_late: String,
    pub sales_lost: String,
    pub recoverable: String,
}

impl ReportParams {
    /// Renders inputs and results into the template variables: monetary
    /// values rounded to whole units with the currency glyph, percentages
    /// with a `%` suffix, the ROI share with two decimals.
    pub fn build(to_email: &str, inputs: &RoiInputs, results: &RoiResults) -> Self {
        let symbol = currency_symbol(&inputs.currency);
        let money = |v: f64| format!("{}{}", symbol, format_money_int(v));
        let pct = |v: f64| format!("{}%", v);

        Self {
            to_email: to_email.to_string(),
            subject: "Your ROI Calculation Results".to_string(),
            inventory_savings: money(results.inventory_savings),
            labor_savings: money(results.labor_savings),
            recovered_margin: money(results.recovered_margin),
            total_annual_benefit: money(results.total_annual_benefit),
            roi_percentage: format_percent2(results.total_benefit_percent_of_revenue),
            currency: inputs.currency.clone(),
            industry: inputs.industry.clone(),
            annual_revenue: money(inputs.annual_revenue),
            gross_margin: pct(inputs.gross_margin_pct),
            avg_inventory: money(inputs.avg_inventory),
            carrying_cost: pct(inputs.carrying_cost_pct),
            staff_count: format!("{}", inputs.staff_count),
            hours_manual: format!("{}", inputs.hours_per_week_manual),
            expected_reduction: pct(inputs.expected_reduction_pct),
            manual_time_reducible: pct(inputs.pct_manual_time_reducible),
            orders_late: pct(inputs.pct_orders_late_or_incomplete),
            sales_lost: pct(inputs.pct_sales_lost),
            recoverable: pct(inputs.pct_recoverable),
        }
    }
}

/// Sends the report email. The endpoint replies with plain text, so only
/// the HTTP status is inspected.
pub async fn send_report(config: &DeliveryConfig, params: ReportParams) -> Result<(), String> {
    let request = SendEmailRequest {
        service_id: config.service_id.clone(),
        template_id: config.template_id.clone(),
        user_id: config.public_key.clone(),
        template_params: params,
    };

    let response = Request::post(EMAILJS_SEND_URL)
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Email delivery failed: {}", response.status()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use engine::compute_roi;

    fn sample_inputs() -> RoiInputs {
        RoiInputs {
            currency: "EUR".to_string(),
            industry: "Retail".to_string(),
            annual_revenue: 1_000_000.0,
            gross_margin_pct: 25.0,
            avg_inventory: 500_000.0,
            carrying_cost_pct: 20.0,
            expected_reduction_pct: 15.0,
            staff_count: 5.0,
            avg_cost_per_person: 60_000.0,
            hours_per_week_manual: 20.0,
            pct_manual_time_reducible: 60.0,
            pct_orders_late_or_incomplete: 10.0,
            pct_sales_lost: 5.0,
            pct_recoverable: 70.0,
        }
    }

    #[test]
    fn test_report_params_formatting() {
        let inputs = sample_inputs();
        let results = compute_roi(&inputs);
        let params = ReportParams::build("someone@example.com", &inputs, &results);

        assert_eq!(params.to_email, "someone@example.com");
        assert_eq!(params.subject, "Your ROI Calculation Results");
        assert_eq!(params.inventory_savings, "€15,000");
        assert_eq!(params.labor_savings, "€90,000");
        assert_eq!(params.recovered_margin, "€8,750");
        assert_eq!(params.total_annual_benefit, "€113,750");
        assert_eq!(params.roi_percentage, "11.38%");
        assert_eq!(params.annual_revenue, "€1,000,000");
        assert_eq!(params.gross_margin, "25%");
        assert_eq!(params.carrying_cost, "20%");
        assert_eq!(params.staff_count, "5");
        assert_eq!(params.hours_manual, "20");
        assert_eq!(params.recoverable, "70%");
    }

    #[test]
    fn test_send_request_body_shape() {
        let inputs = sample_inputs();
        let results = compute_roi(&inputs);
        let request = SendEmailRequest {
            service_id: "service_x".to_string(),
            template_id: "template_y".to_string(),
            user_id: "key_z".to_string(),
            template_params: ReportParams::build("a@b.c", &inputs, &results),
        };

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["service_id"], "service_x");
        assert_eq!(body["template_id"], "template_y");
        assert_eq!(body["user_id"], "key_z");
        assert_eq!(body["template_params"]["to_email"], "a@b.c");
        assert_eq!(body["template_params"]["orders_late"], "10%");
        assert_eq!(body["template_params"]["sales_lost"], "5%");
    }
}
