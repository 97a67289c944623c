// src/services/loader.rs
use chrono::NaiveDateTime;
use log::{debug, error, warn};
use serde_json::Value;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::models::PricePoint;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug)]
pub enum LoadError {
    NotFound(PathBuf),
    Io(io::Error),
    Malformed(String),
    MissingField { index: usize, field: &'static str },
    BadTimestamp { index: usize, value: String },
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LoadError::NotFound(path) => write!(f, "data file {} not found", path.display()),
            LoadError::Io(e) => write!(f, "failed to read data file: {}", e),
            LoadError::Malformed(msg) => write!(f, "malformed data file: {}", msg),
            LoadError::MissingField { index, field } => {
                write!(f, "missing '{}' field in record {}", field, index)
            }
            LoadError::BadTimestamp { index, value } => {
                write!(f, "unparsable timestamp '{}' in record {}", value, index)
            }
        }
    }
}

impl std::error::Error for LoadError {}

/// Reads monthly price files laid out as `<data_dir>/<SYMBOL>.json`.
#[derive(Debug, Clone)]
pub struct PriceStore {
    data_dir: PathBuf,
}

impl PriceStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        PriceStore {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Sorted price history for `symbol`, or an empty series when there is
    /// no usable data. Failures are logged, never returned.
    pub fn load(&self, symbol: &str) -> Vec<PricePoint> {
        match self.try_load(symbol) {
            Ok(series) => {
                debug!("Loaded {} price points for {}", series.len(), symbol.to_uppercase());
                series
            }
            Err(LoadError::NotFound(path)) => {
                warn!("Data file for {} not found at {}", symbol, path.display());
                Vec::new()
            }
            Err(e) => {
                error!("Error loading stock data for {}: {}", symbol, e);
                Vec::new()
            }
        }
    }

    pub fn try_load(&self, symbol: &str) -> Result<Vec<PricePoint>, LoadError> {
        let path = self.path_for(symbol)?;
        let text = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.clone()),
            _ => LoadError::Io(e),
        })?;
        parse_series(&text)
    }

    fn path_for(&self, symbol: &str) -> Result<PathBuf, LoadError> {
        let symbol = symbol.trim().to_uppercase();
        let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '^');
        // Anything else could walk out of the data directory.
        if symbol.is_empty() || symbol.starts_with('.') || !symbol.chars().all(allowed) {
            return Err(LoadError::NotFound(self.data_dir.join(symbol)));
        }
        Ok(self.data_dir.join(format!("{}.json", symbol)))
    }
}

/// Parses a JSON array of `{"time": ..., "close": ...}` records and sorts it by date.
pub fn parse_series(text: &str) -> Result<Vec<PricePoint>, LoadError> {
    let rows: Vec<Value> =
        serde_json::from_str(text).map_err(|e| LoadError::Malformed(e.to_string()))?;

    let mut series = rows
        .iter()
        .enumerate()
        .map(|(index, row)| parse_record(index, row))
        .collect::<Result<Vec<_>, _>>()?;

    series.sort_by_key(|p| p.date);
    Ok(series)
}

fn parse_record(index: usize, row: &Value) -> Result<PricePoint, LoadError> {
    let time = row
        .get("time")
        .and_then(Value::as_str)
        .ok_or(LoadError::MissingField { index, field: "time" })?;

    let date = NaiveDateTime::parse_from_str(time, TIMESTAMP_FORMAT)
        .map_err(|_| LoadError::BadTimestamp {
            index,
            value: time.to_string(),
        })?
        .date();

    let close = row
        .get("close")
        .and_then(Value::as_f64)
        .ok_or(LoadError::MissingField { index, field: "close" })?;

    Ok(PricePoint::new(date, close))
}
