// src/routes.rs
use log::{error, info};
use std::convert::Infallible;
use std::sync::Arc;
use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::reject::{MethodNotAllowed, PayloadTooLarge, Rejection};
use warp::{Filter, Reply};

use crate::config::Settings;
use crate::handlers::error::ApiError;
use crate::handlers::simulate::simulate;
use crate::services::loader::PriceStore;

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let api_error = if let Some(api_error) = err.find::<ApiError>() {
        api_error.clone()
    } else if let Some(e) = err.find::<BodyDeserializeError>() {
        ApiError::bad_request(format!("Invalid request body: {}", e))
    } else if err.find::<PayloadTooLarge>().is_some() {
        ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
    } else if err.find::<MethodNotAllowed>().is_some() {
        ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    } else if err.is_not_found() {
        ApiError::not_found("Not Found")
    } else {
        error!("Unhandled rejection: {:?}", err);
        ApiError::internal("Internal Server Error")
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": api_error.message,
        })),
        api_error.status,
    ))
}

pub fn routes(settings: Arc<Settings>) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    info!("Configuring routes...");

    let store = Arc::new(PriceStore::new(settings.data_dir.clone()));
    let store_filter = warp::any().map(move || store.clone());

    let simulate_route = warp::path!("simulate")
        .and(warp::post())
        .and(warp::body::content_length_limit(settings.max_body_bytes))
        .and(warp::body::json())
        .and(store_filter)
        .and_then(simulate);

    // Single-page frontend: unknown paths get index.html so client routing works.
    let index_html = settings.static_dir.join("index.html");
    let frontend_route = warp::get().and(
        warp::fs::dir(settings.static_dir.clone())
            .or(warp::fs::file(index_html))
            .unify(),
    );

    info!("All routes configured successfully.");

    simulate_route
        .or(frontend_route)
        .recover(handle_rejection)
}
