// src/handlers/simulate.rs
use log::{info, warn};
use std::convert::TryFrom;
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::models::{SimulationRequest, SimulationRequestBody};
use crate::services::loader::PriceStore;
use crate::services::simulation::run_simulation;

pub async fn simulate(body: SimulationRequestBody, store: Arc<PriceStore>) -> Result<Json, Rejection> {
    let request = SimulationRequest::try_from(body).map_err(|e| {
        warn!("Rejected simulation request: {}", e);
        warp::reject::custom(ApiError::bad_request(e.to_string()))
    })?;

    info!(
        "Handling {} simulation for {} ({} years, amount {})",
        request.investment_type, request.symbol, request.years, request.amount
    );

    let series = store.load(&request.symbol);
    if series.is_empty() {
        return Err(warp::reject::custom(ApiError::not_found(format!(
            "No data found for symbol {}",
            request.symbol
        ))));
    }

    let response = run_simulation(&series, &request);
    info!(
        "Simulated {} windows for {}",
        response.results.len(),
        request.symbol
    );
    Ok(warp::reply::json(&response))
}
