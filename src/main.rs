use log::info;
use std::sync::Arc;
use warp::Filter;

use sip_simulator::config::Settings;
use sip_simulator::routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let settings = Arc::new(Settings::from_env()?);
    let addr = settings.addr();
    info!("Will bind to: {}", addr);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET", "POST"]);

    let api = routes::routes(settings).with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api).run(addr).await;
    Ok(())
}
