// src/services/simulation.rs
use log::debug;

use crate::models::{InvestmentType, PricePoint, SimulationRequest, SimulationResponse};
use super::lump_sum::simulate_lump_sum;
use super::sip::simulate_sip;
use super::summary::summarize;

/// Runs the requested strategy over every window of `series` and summarizes it.
pub fn run_simulation(series: &[PricePoint], request: &SimulationRequest) -> SimulationResponse {
    let results = match request.investment_type {
        InvestmentType::Sip => simulate_sip(series, request.amount, request.years),
        InvestmentType::LumpSum => simulate_lump_sum(series, request.amount, request.years),
    };
    debug!(
        "{} {} over {} years: {} windows from {} price points",
        request.symbol,
        request.investment_type,
        request.years,
        results.len(),
        series.len()
    );

    let (summary, fun_facts) = summarize(&results, &request.symbol, request.years);

    SimulationResponse {
        results,
        summary,
        fun_facts,
    }
}
