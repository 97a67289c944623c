// src/services/sip.rs
use crate::models::{PricePoint, WindowResult};
use super::calculations::{calculate_cagr_percent, months_required, round2, window_count};

/// Invest `monthly_amount` at every month's close across each rolling window.
///
/// Months with a non-positive close are skipped: nothing is bought and
/// nothing counts as invested. The window itself is still reported.
pub fn simulate_sip(series: &[PricePoint], monthly_amount: f64, years: u32) -> Vec<WindowResult> {
    let months = months_required(years);

    (0..window_count(series.len(), years))
        .map(|offset| simulate_window(&series[offset..offset + months], monthly_amount, years))
        .collect()
}

fn simulate_window(window: &[PricePoint], monthly_amount: f64, years: u32) -> WindowResult {
    let first = window[0];
    let last = window[window.len() - 1];

    let (total_units, total_invested) = window
        .iter()
        .filter(|p| p.close > 0.0)
        .fold((0.0, 0.0), |(units, invested), p| {
            (units + monthly_amount / p.close, invested + monthly_amount)
        });

    let final_value = total_units * last.close;
    let cagr = if total_invested > 0.0 {
        calculate_cagr_percent(total_invested, final_value, years)
    } else {
        0.0
    };

    WindowResult {
        start: first.date,
        end: last.date,
        final_value: round2(final_value),
        invested: round2(total_invested),
        cagr_percent: round2(cagr),
        initial_price: round2(first.close),
        final_price: round2(last.close),
    }
}
