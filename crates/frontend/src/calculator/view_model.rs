use engine::{compute_roi, RoiInputs, RoiResults, SUPPORTED_CURRENCIES};
use leptos::prelude::*;

use crate::shared::number_format::parse_loose;

pub const REQUIRED_MSG: &str = "This field is required";
pub const PCT_RANGE_MSG: &str = "Must be between 0-100";
pub const HOURS_RANGE_MSG: &str = "Must be between 0-40";

/// Industry options offered by the form: stored value and display label.
pub const INDUSTRY_OPTIONS: &[(&str, &str)] = &[
    ("Apparel manufacturing", "\u{1F454} Apparel manufacturing"),
    ("Other manufacturing", "\u{1F3ED} Other manufacturing"),
    ("Wholesale/distribution", "\u{1F4E6} Wholesale/distribution"),
    ("Retail", "\u{1F6CD}\u{FE0F} Retail"),
];

/// Currency options for the form select, built from the engine catalog.
pub fn currency_options() -> Vec<(String, String)> {
    SUPPORTED_CURRENCIES
        .iter()
        .map(|c| {
            let flag = match c.code {
                "USD" => "\u{1F1FA}\u{1F1F8}",
                "EUR" => "\u{1F1EA}\u{1F1FA}",
                "GBP" => "\u{1F1EC}\u{1F1E7}",
                "INR" => "\u{1F1EE}\u{1F1F3}",
                "AUD" => "\u{1F1E6}\u{1F1FA}",
                "ZAR" => "\u{1F1FF}\u{1F1E6}",
                _ => "",
            };
            (
                c.code.to_string(),
                format!("{} {} ({})", flag, c.name, c.code),
            )
        })
        .collect()
}

/// Raw form draft exactly as typed: money fields keep their digit strings,
/// decimal fields keep the text including an unfinished trailing dot,
/// sliders hold numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    pub currency: String,
    pub industry: String,
    pub annual_revenue: String,
    pub gross_margin_pct: String,
    pub avg_inventory: String,
    pub carrying_cost_pct: f64,
    pub expected_reduction_pct: f64,
    pub staff_count: String,
    pub avg_cost_per_person: String,
    pub hours_per_week_manual: String,
    pub pct_manual_time_reducible: f64,
    pub pct_orders_late_or_incomplete: f64,
    pub pct_sales_lost: f64,
    pub pct_recoverable: f64,
}

impl Default for FormDraft {
    fn default() -> Self {
        // Slider positions and the two selects start at the engine presets;
        // typed fields start empty.
        let presets = RoiInputs::default();
        Self {
            currency: presets.currency,
            industry: presets.industry,
            annual_revenue: String::new(),
            gross_margin_pct: String::new(),
            avg_inventory: String::new(),
            carrying_cost_pct: presets.carrying_cost_pct,
            expected_reduction_pct: presets.expected_reduction_pct,
            staff_count: String::new(),
            avg_cost_per_person: String::new(),
            hours_per_week_manual: String::new(),
            pct_manual_time_reducible: presets.pct_manual_time_reducible,
            pct_orders_late_or_incomplete: presets.pct_orders_late_or_incomplete,
            pct_sales_lost: presets.pct_sales_lost,
            pct_recoverable: presets.pct_recoverable,
        }
    }
}

/// Validation messages for the typed fields, `None` when the field is fine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub annual_revenue: Option<&'static str>,
    pub gross_margin_pct: Option<&'static str>,
    pub avg_inventory: Option<&'static str>,
    pub staff_count: Option<&'static str>,
    pub avg_cost_per_person: Option<&'static str>,
    pub hours_per_week_manual: Option<&'static str>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.annual_revenue.is_none()
            && self.gross_margin_pct.is_none()
            && self.avg_inventory.is_none()
            && self.staff_count.is_none()
            && self.avg_cost_per_person.is_none()
            && self.hours_per_week_manual.is_none()
    }
}

/// Validates the draft and converts it into an engine input record.
pub fn build_inputs(draft: &FormDraft) -> Result<RoiInputs, FieldErrors> {
    let mut errors = FieldErrors::default();

    let annual_revenue = parse_loose(&draft.annual_revenue);
    if annual_revenue.is_none() {
        errors.annual_revenue = Some(REQUIRED_MSG);
    }

    let gross_margin_pct = parse_loose(&draft.gross_margin_pct);
    match gross_margin_pct {
        Some(v) if (0.0..=100.0).contains(&v) => {}
        _ => errors.gross_margin_pct = Some(PCT_RANGE_MSG),
    }

    let avg_inventory = parse_loose(&draft.avg_inventory);
    if avg_inventory.is_none() {
        errors.avg_inventory = Some(REQUIRED_MSG);
    }

    let staff_count = parse_loose(&draft.staff_count);
    if staff_count.is_none() {
        errors.staff_count = Some(REQUIRED_MSG);
    }

    let avg_cost_per_person = parse_loose(&draft.avg_cost_per_person);
    if avg_cost_per_person.is_none() {
        errors.avg_cost_per_person = Some(REQUIRED_MSG);
    }

    let hours_per_week_manual = parse_loose(&draft.hours_per_week_manual);
    match hours_per_week_manual {
        Some(v) if (0.0..=40.0).contains(&v) => {}
        _ => errors.hours_per_week_manual = Some(HOURS_RANGE_MSG),
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(RoiInputs {
        currency: draft.currency.clone(),
        industry: draft.industry.clone(),
        annual_revenue: annual_revenue.unwrap_or(0.0),
        gross_margin_pct: gross_margin_pct.unwrap_or(0.0),
        avg_inventory: avg_inventory.unwrap_or(0.0),
        carrying_cost_pct: draft.carrying_cost_pct,
        expected_reduction_pct: draft.expected_reduction_pct,
        staff_count: staff_count.unwrap_or(0.0),
        avg_cost_per_person: avg_cost_per_person.unwrap_or(0.0),
        hours_per_week_manual: hours_per_week_manual.unwrap_or(0.0),
        pct_manual_time_reducible: draft.pct_manual_time_reducible,
        pct_orders_late_or_incomplete: draft.pct_orders_late_or_incomplete,
        pct_sales_lost: draft.pct_sales_lost,
        pct_recoverable: draft.pct_recoverable,
    })
}

/// Inputs and results pair handed to the results modal.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    pub inputs: RoiInputs,
    pub results: RoiResults,
}

/// ViewModel for the calculator form and the results modal handoff.
#[derive(Clone, Copy)]
pub struct CalculatorViewModel {
    pub draft: RwSignal<FormDraft>,
    pub errors: RwSignal<FieldErrors>,
    /// `Some` while the results modal is open.
    pub projection: RwSignal<Option<Projection>>,
}

impl CalculatorViewModel {
    pub fn new() -> Self {
        Self {
            draft: RwSignal::new(FormDraft::default()),
            errors: RwSignal::new(FieldErrors::default()),
            projection: RwSignal::new(None),
        }
    }

    /// Validate the draft; on success compute the projection and open the
    /// results modal, otherwise surface the field errors inline.
    pub fn submit(&self) {
        match build_inputs(&self.draft.get_untracked()) {
            Ok(inputs) => {
                self.errors.set(FieldErrors::default());
                let results = compute_roi(&inputs);
                log::info!(
                    "ROI computed: total {:.2}, {:.2}% of revenue",
                    results.total_annual_benefit,
                    results.total_benefit_percent_of_revenue
                );
                self.projection.set(Some(Projection { inputs, results }));
            }
            Err(errors) => self.errors.set(errors),
        }
    }

    /// Close the modal and return the form to its presets.
    pub fn close_and_reset(&self) {
        self.projection.set(None);
        self.draft.set(FormDraft::default());
        self.errors.set(FieldErrors::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> FormDraft {
        FormDraft {
            annual_revenue: "1000000".to_string(),
            gross_margin_pct: "25".to_string(),
            avg_inventory: "500000".to_string(),
            staff_count: "5".to_string(),
            avg_cost_per_person: "60000".to_string(),
            hours_per_week_manual: "20".to_string(),
            ..FormDraft::default()
        }
    }

    #[test]
    fn test_default_draft_carries_presets() {
        let draft = FormDraft::default();
        assert_eq!(draft.currency, "USD");
        assert_eq!(draft.industry, "Apparel manufacturing");
        assert_eq!(draft.carrying_cost_pct, 20.0);
        assert_eq!(draft.expected_reduction_pct, 15.0);
        assert_eq!(draft.pct_manual_time_reducible, 60.0);
        assert_eq!(draft.pct_orders_late_or_incomplete, 10.0);
        assert_eq!(draft.pct_sales_lost, 5.0);
        assert_eq!(draft.pct_recoverable, 70.0);
        assert!(draft.annual_revenue.is_empty());
    }

    #[test]
    fn test_build_inputs_happy_path() {
        let inputs = build_inputs(&filled_draft()).unwrap();
        assert_eq!(inputs.annual_revenue, 1_000_000.0);
        assert_eq!(inputs.gross_margin_pct, 25.0);
        assert_eq!(inputs.avg_inventory, 500_000.0);
        assert_eq!(inputs.staff_count, 5.0);
        assert_eq!(inputs.avg_cost_per_person, 60_000.0);
        assert_eq!(inputs.hours_per_week_manual, 20.0);

        let results = compute_roi(&inputs);
        assert!((results.total_annual_benefit - 113_750.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_inputs_requires_typed_fields() {
        let errors = build_inputs(&FormDraft::default()).unwrap_err();
        assert_eq!(errors.annual_revenue, Some(REQUIRED_MSG));
        assert_eq!(errors.gross_margin_pct, Some(PCT_RANGE_MSG));
        assert_eq!(errors.avg_inventory, Some(REQUIRED_MSG));
        assert_eq!(errors.staff_count, Some(REQUIRED_MSG));
        assert_eq!(errors.avg_cost_per_person, Some(REQUIRED_MSG));
        assert_eq!(errors.hours_per_week_manual, Some(HOURS_RANGE_MSG));
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_build_inputs_checks_ranges() {
        let mut draft = filled_draft();
        draft.gross_margin_pct = "150".to_string();
        draft.hours_per_week_manual = "45".to_string();
        let errors = build_inputs(&draft).unwrap_err();
        assert_eq!(errors.gross_margin_pct, Some(PCT_RANGE_MSG));
        assert_eq!(errors.hours_per_week_manual, Some(HOURS_RANGE_MSG));
        assert!(errors.annual_revenue.is_none());
    }

    #[test]
    fn test_build_inputs_tolerates_trailing_dot() {
        let mut draft = filled_draft();
        draft.gross_margin_pct = "25.".to_string();
        let inputs = build_inputs(&draft).unwrap();
        assert_eq!(inputs.gross_margin_pct, 25.0);
    }

    #[test]
    fn test_build_inputs_accepts_bounds() {
        let mut draft = filled_draft();
        draft.gross_margin_pct = "0".to_string();
        draft.hours_per_week_manual = "40".to_string();
        let inputs = build_inputs(&draft).unwrap();
        assert_eq!(inputs.gross_margin_pct, 0.0);
        assert_eq!(inputs.hours_per_week_manual, 40.0);
    }

    #[test]
    fn test_currency_options_cover_catalog() {
        let options = currency_options();
        assert_eq!(options.len(), SUPPORTED_CURRENCIES.len());
        assert_eq!(options[0].0, "USD");
        assert!(options[0].1.contains("United States Dollar (USD)"));
    }
}
