// src/services/summary.rs
use chrono::Datelike;

use crate::models::{SimulationSummary, WindowResult};
use super::calculations::{calculate_average, round2};

/// Aggregate statistics plus the six narrative facts shown under the chart.
/// Both are empty when there is nothing to summarize.
pub fn summarize(
    results: &[WindowResult],
    symbol: &str,
    years: u32,
) -> (Option<SimulationSummary>, Vec<String>) {
    if results.is_empty() {
        return (None, Vec::new());
    }

    // Stable, so equal CAGRs keep their chronological order. Adding 0.0
    // folds -0.0 into 0.0 so the two count as a tie.
    let mut sorted: Vec<&WindowResult> = results.iter().collect();
    sorted.sort_by(|a, b| (a.cagr_percent + 0.0).total_cmp(&(b.cagr_percent + 0.0)));
    let worst = sorted[0];
    let best = sorted[sorted.len() - 1];

    let avg_cagr = calculate_average(results.iter().map(|r| r.cagr_percent));
    let above = results.iter().filter(|r| r.cagr_percent > avg_cagr).count();
    let prob_above_avg = above as f64 / results.len() as f64 * 100.0;
    let avg_final = calculate_average(results.iter().map(|r| r.final_value));

    let summary = SimulationSummary {
        avg_cagr: round2(avg_cagr),
        avg_final: round2(avg_final),
        prob_above_avg: round2(prob_above_avg),
        min_cagr: worst.cagr_percent,
        max_cagr: best.cagr_percent,
        best_final: best.final_value,
        best_start: best.start,
        best_end: best.end,
        best_initial_price: best.initial_price,
        best_final_price: best.final_price,
        worst_final: worst.final_value,
        worst_start: worst.start,
        worst_end: worst.end,
        worst_initial_price: worst.initial_price,
        worst_final_price: worst.final_price,
    };

    let facts = fun_facts(&summary, prob_above_avg > 50.0, symbol, years);
    (Some(summary), facts)
}

fn fun_facts(summary: &SimulationSummary, mostly_above: bool, symbol: &str, years: u32) -> Vec<String> {
    let closing = if mostly_above {
        format!(
            "📈 Do you know {} had more chances of beating the average than missing it in {}-year periods?",
            symbol, years
        )
    } else {
        format!(
            "📉 Do you know {} had more chances of missing the average than beating it in {}-year periods?",
            symbol, years
        )
    };

    vec![
        format!(
            "📈 Do you know {} gave its highest return over a full {}-year period ending in {}?",
            symbol,
            years,
            summary.best_end.year()
        ),
        format!(
            "📊 Do you know {} gave above average returns in {}% of simulations?",
            symbol,
            number(summary.prob_above_avg)
        ),
        format!(
            "📅 Do you know {} performed best in the month of {}?",
            symbol,
            summary.best_end.format("%b")
        ),
        format!(
            "📉 Do you know {} gave the lowest return in {}?",
            symbol,
            summary.worst_end.format("%b")
        ),
        format!(
            "📐 Do you know the CAGR of {} ranged from {}% to {}% over different {}-year periods?",
            symbol,
            number(summary.min_cagr),
            number(summary.max_cagr),
            years
        ),
        closing,
    ]
}

// `{:?}` keeps a trailing ".0" on whole numbers, so 50 reads as "50.0".
fn number(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn result(end: (i32, u32), cagr: f64, final_value: f64) -> WindowResult {
        let end = NaiveDate::from_ymd_opt(end.0, end.1, 1).unwrap();
        WindowResult {
            start: NaiveDate::from_ymd_opt(end.year() - 5, end.month(), 1).unwrap(),
            end,
            final_value,
            invested: 1000.0,
            cagr_percent: cagr,
            initial_price: 10.0,
            final_price: 20.0,
        }
    }

    #[test]
    fn empty_results_give_empty_summary() {
        let (summary, facts) = summarize(&[], "AAPL", 5);
        assert!(summary.is_none());
        assert!(facts.is_empty());
    }

    #[test]
    fn picks_best_and_worst() {
        let results = vec![
            result((2015, 1), 5.0, 1300.0),
            result((2016, 3), -2.5, 900.0),
            result((2017, 7), 12.0, 1800.0),
            result((2018, 9), 4.0, 1200.0),
        ];
        let (summary, facts) = summarize(&results, "AAPL", 5);
        let summary = summary.unwrap();

        assert_eq!(summary.max_cagr, 12.0);
        assert_eq!(summary.min_cagr, -2.5);
        assert_eq!(summary.best_end, NaiveDate::from_ymd_opt(2017, 7, 1).unwrap());
        assert_eq!(summary.worst_end, NaiveDate::from_ymd_opt(2016, 3, 1).unwrap());
        assert_eq!(summary.avg_cagr, 4.62);
        assert_eq!(summary.avg_final, 1300.0);
        assert_eq!(summary.prob_above_avg, 50.0);

        assert_eq!(facts.len(), 6);
        assert_eq!(
            facts[0],
            "📈 Do you know AAPL gave its highest return over a full 5-year period ending in 2017?"
        );
        assert_eq!(
            facts[1],
            "📊 Do you know AAPL gave above average returns in 50.0% of simulations?"
        );
        assert_eq!(facts[2], "📅 Do you know AAPL performed best in the month of Jul?");
        assert_eq!(facts[3], "📉 Do you know AAPL gave the lowest return in Mar?");
        assert_eq!(
            facts[4],
            "📐 Do you know the CAGR of AAPL ranged from -2.5% to 12.0% over different 5-year periods?"
        );
        assert_eq!(
            facts[5],
            "📉 Do you know AAPL had more chances of missing the average than beating it in 5-year periods?"
        );
    }

    #[test]
    fn equal_cagrs_have_zero_probability_above_average() {
        let results = vec![
            result((2015, 1), 7.0, 1000.0),
            result((2015, 2), 7.0, 1000.0),
            result((2015, 3), 7.0, 1000.0),
        ];
        let (summary, _) = summarize(&results, "X", 5);
        let summary = summary.unwrap();
        assert_eq!(summary.prob_above_avg, 0.0);
        assert_eq!(summary.min_cagr, summary.max_cagr);
        // Ties keep chronological order: first is worst, last is best.
        assert_eq!(summary.worst_end, NaiveDate::from_ymd_opt(2015, 1, 1).unwrap());
        assert_eq!(summary.best_end, NaiveDate::from_ymd_opt(2015, 3, 1).unwrap());
    }

    #[test]
    fn majority_above_average_changes_closing_fact() {
        let results = vec![
            result((2015, 1), -30.0, 500.0),
            result((2015, 2), 10.0, 1500.0),
            result((2015, 3), 11.0, 1600.0),
        ];
        let (summary, facts) = summarize(&results, "msft", 3);
        let summary = summary.unwrap();
        assert_eq!(summary.prob_above_avg, 66.67);
        assert!(summary.prob_above_avg >= 0.0 && summary.prob_above_avg <= 100.0);
        assert_eq!(
            facts[5],
            "📈 Do you know msft had more chances of beating the average than missing it in 3-year periods?"
        );
    }

    #[test]
    fn negative_zero_ties_with_zero() {
        let results = vec![
            result((2015, 1), 0.0, 1000.0),
            result((2015, 2), round2(-0.001), 999.99),
        ];
        let (summary, _) = summarize(&results, "X", 5);
        let summary = summary.unwrap();
        assert_eq!(summary.worst_end, NaiveDate::from_ymd_opt(2015, 1, 1).unwrap());
        assert_eq!(summary.best_end, NaiveDate::from_ymd_opt(2015, 2, 1).unwrap());
    }

    #[test]
    fn best_is_max_and_worst_is_min_with_ties() {
        let results = vec![
            result((2015, 1), 3.0, 1.0),
            result((2015, 2), 9.0, 2.0),
            result((2015, 3), 1.0, 3.0),
            result((2015, 4), 9.0, 4.0),
            result((2015, 5), 1.0, 5.0),
        ];
        let (summary, _) = summarize(&results, "X", 5);
        let summary = summary.unwrap();
        let max = results.iter().map(|r| r.cagr_percent).fold(f64::MIN, f64::max);
        let min = results.iter().map(|r| r.cagr_percent).fold(f64::MAX, f64::min);
        assert_eq!(summary.max_cagr, max);
        assert_eq!(summary.min_cagr, min);
        assert_eq!(summary.best_final, 4.0);
        assert_eq!(summary.worst_final, 3.0);
    }
}
