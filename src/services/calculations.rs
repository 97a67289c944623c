// src/services/calculations.rs

/// Round to cents, the precision every monetary and percentage field is reported in.
/// Exact halves go to the even cent, so 10.125 reports as 10.12.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// CAGR in percent. Callers own any guard on `start_value`.
pub fn calculate_cagr_percent(start_value: f64, end_value: f64, years: u32) -> f64 {
    ((end_value / start_value).powf(1.0 / years as f64) - 1.0) * 100.0
}

pub fn calculate_average(values: impl ExactSizeIterator<Item = f64>) -> f64 {
    let len = values.len();
    if len == 0 {
        0.0
    } else {
        values.sum::<f64>() / len as f64
    }
}

pub fn months_required(years: u32) -> usize {
    years as usize * 12
}

/// Number of rolling windows in a series. The last full window is
/// deliberately not counted: offsets run over `0..len - months`.
pub fn window_count(series_len: usize, years: u32) -> usize {
    let months = months_required(years);
    if months == 0 {
        return 0;
    }
    series_len.saturating_sub(months)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round2_is_idempotent() {
        for value in [14.869835, 0.005, -3.14159, 6000.0, 1234.5678, 0.0] {
            let once = round2(value);
            assert_eq!(round2(once), once);
        }
    }

    #[test]
    fn round2_sends_exact_halves_to_even() {
        assert_eq!(round2(10.125), 10.12);
        assert_eq!(round2(20.375), 20.38);
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(-4.625), -4.62);
    }

    #[test]
    fn cagr_of_doubling_over_five_years() {
        let cagr = calculate_cagr_percent(1000.0, 2000.0, 5);
        assert_eq!(round2(cagr), 14.87);
    }

    #[test]
    fn cagr_of_flat_value_is_zero() {
        assert_eq!(calculate_cagr_percent(6000.0, 6000.0, 5), 0.0);
    }

    #[test]
    fn average_of_empty_is_zero() {
        assert_eq!(calculate_average(Vec::<f64>::new().into_iter()), 0.0);
        assert_eq!(calculate_average(vec![1.0, 2.0, 6.0].into_iter()), 3.0);
    }

    #[test]
    fn window_count_excludes_last_full_window() {
        assert_eq!(window_count(60, 5), 0);
        assert_eq!(window_count(61, 5), 1);
        assert_eq!(window_count(100, 5), 40);
        assert_eq!(window_count(10, 5), 0);
        assert_eq!(window_count(10, 0), 0);
    }
}
