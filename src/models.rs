// src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use std::convert::TryFrom;
use std::fmt;

/// One monthly close from a symbol's price history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        PricePoint { date, close }
    }
}

/// Outcome of investing over one rolling window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WindowResult {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub final_value: f64,
    pub invested: f64,
    pub cagr_percent: f64,
    pub initial_price: f64,
    pub final_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSummary {
    pub avg_cagr: f64,
    pub avg_final: f64,
    pub prob_above_avg: f64,
    pub min_cagr: f64,
    pub max_cagr: f64,
    pub best_final: f64,
    pub best_start: NaiveDate,
    pub best_end: NaiveDate,
    pub best_initial_price: f64,
    pub best_final_price: f64,
    pub worst_final: f64,
    pub worst_start: NaiveDate,
    pub worst_end: NaiveDate,
    pub worst_initial_price: f64,
    pub worst_final_price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvestmentType {
    Sip,
    LumpSum,
}

impl InvestmentType {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "sip" => Some(InvestmentType::Sip),
            "lump_sum" => Some(InvestmentType::LumpSum),
            _ => None,
        }
    }
}

impl fmt::Display for InvestmentType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvestmentType::Sip => write!(f, "sip"),
            InvestmentType::LumpSum => write!(f, "lump_sum"),
        }
    }
}

/// Frontends post numbers either as JSON numbers or as the raw text of a form field.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(f64),
    Text(String),
}

impl NumberOrString {
    fn as_f64(&self) -> Option<f64> {
        match self {
            NumberOrString::Number(n) => Some(*n),
            NumberOrString::Text(s) => s.trim().parse::<f64>().ok(),
        }
    }
}

/// Body of `POST /simulate` as it arrives on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SimulationRequestBody {
    pub symbol: Option<String>,
    #[serde(rename = "type")]
    pub investment_type: Option<String>,
    pub amount: Option<NumberOrString>,
    pub years: Option<NumberOrString>,
}

const DEFAULT_YEARS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    pub symbol: String,
    pub investment_type: InvestmentType,
    pub amount: f64,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestError {
    MissingSymbol,
    InvalidInvestmentType,
    InvalidAmount,
    InvalidYears,
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RequestError::MissingSymbol => write!(f, "Missing 'symbol' field."),
            RequestError::InvalidInvestmentType => {
                write!(f, "Invalid investment type. Must be 'sip' or 'lump_sum'.")
            }
            RequestError::InvalidAmount => write!(f, "Amount must be a positive number."),
            RequestError::InvalidYears => write!(f, "Years must be a positive whole number."),
        }
    }
}

impl std::error::Error for RequestError {}

impl TryFrom<SimulationRequestBody> for SimulationRequest {
    type Error = RequestError;

    fn try_from(body: SimulationRequestBody) -> Result<Self, Self::Error> {
        let symbol = body
            .symbol
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or(RequestError::MissingSymbol)?;

        let investment_type = body
            .investment_type
            .as_deref()
            .and_then(InvestmentType::parse)
            .ok_or(RequestError::InvalidInvestmentType)?;

        let amount = match &body.amount {
            Some(value) => value.as_f64().ok_or(RequestError::InvalidAmount)?,
            None => 0.0,
        };
        if !amount.is_finite() || amount <= 0.0 {
            return Err(RequestError::InvalidAmount);
        }

        let years = match &body.years {
            Some(value) => {
                let raw = value.as_f64().ok_or(RequestError::InvalidYears)?;
                if !raw.is_finite() || raw < 1.0 || raw > u32::MAX as f64 {
                    return Err(RequestError::InvalidYears);
                }
                // Fractional years truncate.
                raw.trunc() as u32
            }
            None => DEFAULT_YEARS,
        };

        Ok(SimulationRequest {
            symbol,
            investment_type,
            amount,
            years,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SimulationResponse {
    pub results: Vec<WindowResult>,
    #[serde(serialize_with = "summary_or_empty_object")]
    pub summary: Option<SimulationSummary>,
    pub fun_facts: Vec<String>,
}

fn summary_or_empty_object<S>(summary: &Option<SimulationSummary>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match summary {
        Some(summary) => summary.serialize(serializer),
        None => serde_json::Map::new().serialize(serializer),
    }
}
