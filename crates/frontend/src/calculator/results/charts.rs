//! SVG charts for the results modal: a bar chart of the three benefit
//! streams and a pie chart of their contribution shares.
//!
//! Geometry is kept in plain functions so the scaling and the slice paths
//! stay testable without a DOM.

use std::f64::consts::{FRAC_PI_2, TAU};

use leptos::prelude::*;

use crate::shared::number_format::format_money_int;

/// One fill per benefit stream, in stream order.
pub const CHART_COLORS: [&str; 3] = ["#10b981", "#3b82f6", "#8b5cf6"];

/// Stream captions, in the same order as [`CHART_COLORS`].
pub const STREAM_LABELS: [&str; 3] = ["Inventory Savings", "Labor Savings", "Recovered Margin"];

/// Scales bar values into `plot_height`, tallest bar filling it.
/// All-zero input yields zero heights.
pub fn bar_heights(values: &[f64], plot_height: f64) -> Vec<f64> {
    let max = values.iter().cloned().fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / max * plot_height).collect()
}

/// Each value's share of the total, in `0.0..=1.0`. All-zero input yields
/// all-zero shares.
pub fn shares(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total <= 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| v / total).collect()
}

/// Cumulative `(start, end)` turn fractions for the pie slices.
pub fn slice_ranges(shares: &[f64]) -> Vec<(f64, f64)> {
    let mut start = 0.0;
    shares
        .iter()
        .map(|share| {
            let range = (start, start + share);
            start += share;
            range
        })
        .collect()
}

/// Point on a circle at `frac` of a full turn, measured clockwise from
/// 12 o'clock (SVG y grows downward).
fn polar(cx: f64, cy: f64, r: f64, frac: f64) -> (f64, f64) {
    let angle = frac * TAU - FRAC_PI_2;
    (cx + r * angle.cos(), cy + r * angle.sin())
}

/// SVG path for one pie slice covering `start..end` turn fractions.
/// A full-turn slice is shrunk by an epsilon; coincident arc endpoints
/// would otherwise render as nothing.
pub fn pie_slice_path(cx: f64, cy: f64, r: f64, start: f64, end: f64) -> String {
    let sweep = (end - start).min(0.9999);
    let end = start + sweep;
    let (x1, y1) = polar(cx, cy, r, start);
    let (x2, y2) = polar(cx, cy, r, end);
    let large_arc = i32::from(sweep > 0.5);
    format!(
        "M {:.2} {:.2} L {:.2} {:.2} A {:.2} {:.2} 0 {} 1 {:.2} {:.2} Z",
        cx, cy, x1, y1, r, r, large_arc, x2, y2
    )
}

/// Bar chart of the three benefit streams, value captions above the bars.
#[component]
pub fn BenefitsBarChart(values: [f64; 3], symbol: String) -> impl IntoView {
    const PLOT_HEIGHT: f64 = 150.0;
    const BASE_Y: f64 = 190.0;
    const SLOT_WIDTH: f64 = 120.0;
    const BAR_WIDTH: f64 = 64.0;

    let heights = bar_heights(&values, PLOT_HEIGHT);

    let gridlines = [0.25, 0.5, 0.75, 1.0]
        .iter()
        .map(|frac| {
            let y = BASE_Y - PLOT_HEIGHT * frac;
            view! {
                <line
                    x1="10"
                    y1=y.to_string()
                    x2="350"
                    y2=y.to_string()
                    stroke="#e5e7eb"
                    stroke-dasharray="3 3"
                />
            }
        })
        .collect_view();

    let bars = values
        .iter()
        .zip(heights)
        .enumerate()
        .map(|(i, (value, height))| {
            let center_x = SLOT_WIDTH * i as f64 + SLOT_WIDTH / 2.0;
            let bar_x = center_x - BAR_WIDTH / 2.0;
            let caption = format!("{}{}", symbol, format_money_int(*value));
            view! {
                <rect
                    x=format!("{:.1}", bar_x)
                    y=format!("{:.1}", BASE_Y - height)
                    width=BAR_WIDTH.to_string()
                    height=format!("{:.1}", height)
                    rx="6"
                    fill=CHART_COLORS[i]
                />
                <text
                    x=format!("{:.1}", center_x)
                    y=format!("{:.1}", BASE_Y - height - 8.0)
                    text-anchor="middle"
                    font-size="12"
                    font-weight="600"
                    fill="#374151"
                >
                    {caption}
                </text>
                <text
                    x=format!("{:.1}", center_x)
                    y=(BASE_Y + 18.0).to_string()
                    text-anchor="middle"
                    font-size="10"
                    fill="#6b7280"
                >
                    {STREAM_LABELS[i]}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg viewBox="0 0 360 215" role="img" aria-label="Benefits breakdown">
            {gridlines}
            <line x1="10" y1=BASE_Y.to_string() x2="350" y2=BASE_Y.to_string() stroke="#9ca3af" />
            {bars}
        </svg>
    }
}

/// Pie chart of the contribution shares, percent captions at each slice and
/// a dot legend underneath.
#[component]
pub fn ContributionPieChart(values: [f64; 3]) -> impl IntoView {
    const CX: f64 = 140.0;
    const CY: f64 = 105.0;
    const RADIUS: f64 = 85.0;

    let share_values = shares(&values);
    let ranges = slice_ranges(&share_values);

    let slices = ranges
        .iter()
        .enumerate()
        .filter(|(_, (start, end))| end - start > 0.0)
        .map(|(i, (start, end))| {
            let path = pie_slice_path(CX, CY, RADIUS, *start, *end);
            let mid = (start + end) / 2.0;
            let (lx, ly) = polar(CX, CY, RADIUS + 16.0, mid);
            let caption = format!("{:.0}%", share_values[i] * 100.0);
            view! {
                <path d=path fill=CHART_COLORS[i] stroke="#ffffff" stroke-width="1" />
                <text
                    x=format!("{:.1}", lx)
                    y=format!("{:.1}", ly + 4.0)
                    text-anchor="middle"
                    font-size="11"
                    fill="#374151"
                >
                    {caption}
                </text>
            }
        })
        .collect_view();

    let legend = STREAM_LABELS
        .iter()
        .enumerate()
        .map(|(i, label)| {
            view! {
                <span>
                    <span
                        class="chart-legend__dot"
                        style=format!("background: {};", CHART_COLORS[i])
                    ></span>
                    {*label}
                </span>
            }
        })
        .collect_view();

    view! {
        <div>
            <svg viewBox="0 0 280 212" role="img" aria-label="Contribution distribution">
                {slices}
            </svg>
            <div class="chart-legend">{legend}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_heights_scale_to_tallest() {
        assert_eq!(bar_heights(&[5.0, 10.0, 2.5], 170.0), vec![85.0, 170.0, 42.5]);
    }

    #[test]
    fn test_bar_heights_all_zero() {
        assert_eq!(bar_heights(&[0.0, 0.0, 0.0], 170.0), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_shares_sum_to_one() {
        let s = shares(&[1.0, 1.0, 2.0]);
        assert_eq!(s, vec![0.25, 0.25, 0.5]);
        assert_eq!(s.iter().sum::<f64>(), 1.0);
    }

    #[test]
    fn test_shares_all_zero_guard() {
        assert_eq!(shares(&[0.0, 0.0, 0.0]), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_slice_ranges_are_cumulative() {
        let ranges = slice_ranges(&[0.25, 0.25, 0.5]);
        assert_eq!(ranges, vec![(0.0, 0.25), (0.25, 0.5), (0.5, 1.0)]);
    }

    #[test]
    fn test_pie_slice_path_quarter() {
        // Quarter slice from 12 to 3 o'clock on a unit-100 circle at origin.
        let path = pie_slice_path(0.0, 0.0, 100.0, 0.0, 0.25);
        assert!(path.starts_with("M 0.00 0.00"));
        assert!(path.contains("L 0.00 -100.00"));
        assert!(path.contains("A 100.00 100.00 0 0 1 100.00 0.00"));
        assert!(path.ends_with("Z"));
    }

    #[test]
    fn test_pie_slice_path_majority_uses_large_arc() {
        let path = pie_slice_path(0.0, 0.0, 100.0, 0.0, 0.75);
        assert!(path.contains(" 0 1 1 "));
    }

    #[test]
    fn test_pie_slice_path_full_turn_stays_visible() {
        let path = pie_slice_path(0.0, 0.0, 100.0, 0.0, 1.0);
        // Shrunk below a full turn, so the arc endpoints differ.
        assert!(path.contains(" 0 1 1 "));
        assert!(!path.contains("A 100.00 100.00 0 1 1 0.00 -100.00"));
    }
}
