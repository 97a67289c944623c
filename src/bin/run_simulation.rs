// src/bin/run_simulation.rs
use anyhow::{anyhow, bail, Result};
use dotenv::dotenv;
use log::{error, info};
use std::convert::TryFrom;
use std::env;

use sip_simulator::config::Settings;
use sip_simulator::models::{NumberOrString, SimulationRequest, SimulationRequestBody};
use sip_simulator::services::loader::PriceStore;
use sip_simulator::services::simulation::run_simulation;

const USAGE: &str = "usage: run_simulation <SYMBOL> <sip|lump_sum> <AMOUNT> [YEARS]";

fn main() -> Result<()> {
    dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    if args.len() < 3 || args.len() > 4 {
        bail!(USAGE);
    }

    let body = SimulationRequestBody {
        symbol: Some(args[0].clone()),
        investment_type: Some(args[1].clone()),
        amount: Some(NumberOrString::Text(args[2].clone())),
        years: args.get(3).cloned().map(NumberOrString::Text),
    };
    let request = SimulationRequest::try_from(body).map_err(|e| anyhow!("{}\n{}", e, USAGE))?;

    let settings = Settings::from_env()?;
    let store = PriceStore::new(settings.data_dir);
    info!("Reading prices from {}", store.data_dir().display());

    let series = store.load(&request.symbol);
    if series.is_empty() {
        error!("No data found for symbol {}", request.symbol);
        bail!("No data found for symbol {}", request.symbol);
    }

    let response = run_simulation(&series, &request);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
