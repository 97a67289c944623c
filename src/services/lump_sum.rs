// src/services/lump_sum.rs
use log::debug;

use crate::models::{PricePoint, WindowResult};
use super::calculations::{calculate_cagr_percent, months_required, round2, window_count};

/// Invest `amount` once at the start of each rolling window.
///
/// A window whose first or last close is not positive is dropped entirely.
pub fn simulate_lump_sum(series: &[PricePoint], amount: f64, years: u32) -> Vec<WindowResult> {
    let months = months_required(years);
    let windows = window_count(series.len(), years);

    let results: Vec<WindowResult> = (0..windows)
        .filter_map(|offset| simulate_window(&series[offset..offset + months], amount, years))
        .collect();

    if results.len() < windows {
        debug!(
            "Skipped {} lump-sum windows with non-positive boundary prices",
            windows - results.len()
        );
    }
    results
}

fn simulate_window(window: &[PricePoint], amount: f64, years: u32) -> Option<WindowResult> {
    let first = window[0];
    let last = window[window.len() - 1];
    let (start_price, end_price) = (first.close, last.close);

    if start_price <= 0.0 || end_price <= 0.0 {
        return None;
    }

    let units = amount / start_price;
    let final_value = units * end_price;
    let cagr = calculate_cagr_percent(amount, final_value, years);

    Some(WindowResult {
        start: first.date,
        end: last.date,
        final_value: round2(final_value),
        invested: round2(amount),
        cagr_percent: round2(cagr),
        initial_price: round2(start_price),
        final_price: round2(end_price),
    })
}
