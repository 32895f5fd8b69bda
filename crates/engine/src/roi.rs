//! ROI projection over three independent benefit streams: inventory
//! carrying-cost savings, labor savings on reducible manual work, and
//! margin recovered from lost sales.

use serde::{Deserialize, Serialize};

/// Hours in the standard work week that the labor stream is normalized
/// against. Fixed by the model, never derived from input.
pub const STANDARD_WORKWEEK_HOURS: f64 = 40.0;

// ---------------------------------------------------------------------------
// Input record
// ---------------------------------------------------------------------------

/// Business metrics collected by the calculator form.
///
/// The engine trusts its caller: range checks belong to the form layer, and
/// values outside the expected ranges are computed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiInputs {
    /// Currency code from the supported set. Display only; codes outside
    /// the set render with the default glyph.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Industry sector label. Display only, never used in arithmetic.
    #[serde(default = "default_industry")]
    pub industry: String,
    /// Gross annual revenue in the selected currency.
    pub annual_revenue: f64,
    /// Percent of revenue retained after cost of goods sold, 0-100.
    pub gross_margin_pct: f64,
    /// Average inventory value held over the year.
    pub avg_inventory: f64,
    /// Annual cost of holding inventory, as a percent of its value.
    #[serde(default = "default_carrying_cost_pct")]
    pub carrying_cost_pct: f64,
    /// Projected inventory reduction, as a percent of current inventory.
    #[serde(default = "default_expected_reduction_pct")]
    pub expected_reduction_pct: f64,
    /// Headcount involved in manual planning and tracking work.
    pub staff_count: f64,
    /// Fully loaded annual cost per involved person.
    pub avg_cost_per_person: f64,
    /// Weekly hours each person spends on that manual work, 0-40.
    pub hours_per_week_manual: f64,
    /// Share of the manual time that automation can absorb, 0-100.
    #[serde(default = "default_pct_manual_time_reducible")]
    pub pct_manual_time_reducible: f64,
    /// Share of orders shipped late or incomplete, 0-100. Collected for
    /// reporting only; not consumed by the projection.
    #[serde(default = "default_pct_orders_late_or_incomplete")]
    pub pct_orders_late_or_incomplete: f64,
    /// Revenue lost to stockouts and delays, as a percent of revenue.
    #[serde(default = "default_pct_sales_lost")]
    pub pct_sales_lost: f64,
    /// Share of that lost revenue considered recoverable, 0-100.
    #[serde(default = "default_pct_recoverable")]
    pub pct_recoverable: f64,
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_industry() -> String {
    "Apparel manufacturing".to_string()
}

fn default_carrying_cost_pct() -> f64 {
    20.0
}

fn default_expected_reduction_pct() -> f64 {
    15.0
}

fn default_pct_manual_time_reducible() -> f64 {
    60.0
}

fn default_pct_orders_late_or_incomplete() -> f64 {
    10.0
}

fn default_pct_sales_lost() -> f64 {
    5.0
}

fn default_pct_recoverable() -> f64 {
    70.0
}

impl Default for RoiInputs {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            industry: default_industry(),
            annual_revenue: 0.0,
            gross_margin_pct: 0.0,
            avg_inventory: 0.0,
            carrying_cost_pct: default_carrying_cost_pct(),
            expected_reduction_pct: default_expected_reduction_pct(),
            staff_count: 0.0,
            avg_cost_per_person: 0.0,
            hours_per_week_manual: 0.0,
            pct_manual_time_reducible: default_pct_manual_time_reducible(),
            pct_orders_late_or_incomplete: default_pct_orders_late_or_incomplete(),
            pct_sales_lost: default_pct_sales_lost(),
            pct_recoverable: default_pct_recoverable(),
        }
    }
}

// ---------------------------------------------------------------------------
// Results record
// ---------------------------------------------------------------------------

/// Projected annual benefit, broken down by stream.
///
/// All values are full-precision; callers round for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResults {
    /// Carrying cost released by reducing inventory.
    pub inventory_savings: f64,
    /// Cost of manual hours that automation absorbs.
    pub labor_savings: f64,
    /// Margin on recovered lost sales.
    pub recovered_margin: f64,
    /// Exact sum of the three streams above, no intermediate rounding.
    pub total_annual_benefit: f64,
    /// Total benefit relative to annual revenue, in percent.
    /// `0.0` when revenue is zero.
    pub total_benefit_percent_of_revenue: f64,
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

/// Computes the annual ROI projection for one set of inputs.
///
/// Deterministic and side-effect free: equal inputs produce bit-identical
/// results.
pub fn compute_roi(inputs: &RoiInputs) -> RoiResults {
    // Inventory stream: carrying cost of the stock we no longer hold.
    let carrying_cost = inputs.avg_inventory * (inputs.carrying_cost_pct / 100.0);
    let inventory_savings = carrying_cost * (inputs.expected_reduction_pct / 100.0);

    // Labor stream: manual hours as a share of the standard week, priced at
    // the loaded cost per person, across the whole team.
    let manual_share_of_week = inputs.hours_per_week_manual / STANDARD_WORKWEEK_HOURS;
    let manual_cost_per_person = inputs.avg_cost_per_person * manual_share_of_week;
    let team_manual_cost = manual_cost_per_person * inputs.staff_count;
    let labor_savings = team_manual_cost * (inputs.pct_manual_time_reducible / 100.0);

    // Sales stream: recoverable slice of lost revenue, taken at gross margin.
    let lost_revenue = inputs.annual_revenue * (inputs.pct_sales_lost / 100.0);
    let recoverable_revenue = lost_revenue * (inputs.pct_recoverable / 100.0);
    let recovered_margin = recoverable_revenue * (inputs.gross_margin_pct / 100.0);

    let total_annual_benefit = inventory_savings + labor_savings + recovered_margin;
    let total_benefit_percent_of_revenue = if inputs.annual_revenue > 0.0 {
        total_annual_benefit / inputs.annual_revenue * 100.0
    } else {
        0.0
    };

    RoiResults {
        inventory_savings,
        labor_savings,
        recovered_margin,
        total_annual_benefit,
        total_benefit_percent_of_revenue,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    fn baseline_inputs() -> RoiInputs {
        RoiInputs {
            currency: "USD".to_string(),
            industry: "Apparel manufacturing".to_string(),
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
    fn test_inventory_savings() {
        let results = compute_roi(&baseline_inputs());
        // 500_000 * 20% carrying cost * 15% reduction
        assert_close(results.inventory_savings, 15_000.0);
    }

    #[test]
    fn test_labor_savings() {
        let results = compute_roi(&baseline_inputs());
        // 60_000 * (20h / 40h) * 5 people * 60% reducible
        assert_close(results.labor_savings, 90_000.0);
    }

    #[test]
    fn test_recovered_margin() {
        let results = compute_roi(&baseline_inputs());
        // 1_000_000 * 5% lost * 70% recoverable * 25% margin
        assert_close(results.recovered_margin, 8_750.0);
    }

    #[test]
    fn test_total_benefit_and_percent_of_revenue() {
        let results = compute_roi(&baseline_inputs());
        assert_close(results.total_annual_benefit, 113_750.0);
        assert_close(results.total_benefit_percent_of_revenue, 11.375);
    }

    #[test]
    fn test_total_is_exact_sum_of_streams() {
        let mut inputs = baseline_inputs();
        inputs.annual_revenue = 777_777.0;
        inputs.avg_inventory = 333_333.0;
        inputs.avg_cost_per_person = 55_555.0;
        inputs.hours_per_week_manual = 13.0;
        inputs.gross_margin_pct = 37.5;
        let results = compute_roi(&inputs);
        // Bit-identical, not merely close: the total must be the plain sum.
        assert_eq!(
            results.total_annual_benefit,
            results.inventory_savings + results.labor_savings + results.recovered_margin
        );
    }

    #[test]
    fn test_zero_revenue_yields_zero_percent() {
        let mut inputs = baseline_inputs();
        inputs.annual_revenue = 0.0;
        let results = compute_roi(&inputs);
        assert_eq!(results.recovered_margin, 0.0);
        assert_eq!(results.total_benefit_percent_of_revenue, 0.0);
        // The other streams are untouched by revenue.
        assert_close(results.inventory_savings, 15_000.0);
        assert_close(results.labor_savings, 90_000.0);
    }

    #[test]
    fn test_deterministic_for_equal_inputs() {
        let inputs = baseline_inputs();
        assert_eq!(compute_roi(&inputs), compute_roi(&inputs));
    }

    #[test]
    fn test_out_of_range_values_compute_through() {
        // The engine does not clamp; the form owns validation.
        let mut inputs = baseline_inputs();
        inputs.gross_margin_pct = 250.0;
        inputs.hours_per_week_manual = 80.0;
        let results = compute_roi(&inputs);
        assert_close(results.recovered_margin, 87_500.0);
        assert_close(results.labor_savings, 360_000.0);
    }

    #[test]
    fn test_late_orders_share_does_not_affect_projection() {
        let mut inputs = baseline_inputs();
        inputs.pct_orders_late_or_incomplete = 0.0;
        let low = compute_roi(&inputs);
        inputs.pct_orders_late_or_incomplete = 30.0;
        let high = compute_roi(&inputs);
        assert_eq!(low, high);
    }

    #[test]
    fn test_defaults_match_form_presets() {
        let inputs = RoiInputs::default();
        assert_eq!(inputs.currency, "USD");
        assert_eq!(inputs.industry, "Apparel manufacturing");
        assert_eq!(inputs.carrying_cost_pct, 20.0);
        assert_eq!(inputs.expected_reduction_pct, 15.0);
        assert_eq!(inputs.pct_manual_time_reducible, 60.0);
        assert_eq!(inputs.pct_orders_late_or_incomplete, 10.0);
        assert_eq!(inputs.pct_sales_lost, 5.0);
        assert_eq!(inputs.pct_recoverable, 70.0);
    }
}
