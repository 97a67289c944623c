pub mod calculations;
pub mod loader;
pub mod lump_sum;
pub mod simulation;
pub mod sip;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{Months, NaiveDate};

    use crate::models::PricePoint;

    /// One point per month starting January 2000.
    pub fn monthly_series(closes: &[f64]) -> Vec<PricePoint> {
        let origin = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        closes
            .iter()
            .enumerate()
            .map(|(i, close)| PricePoint::new(origin + Months::new(i as u32), *close))
            .collect()
    }
}
