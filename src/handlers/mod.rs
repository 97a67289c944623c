pub mod error;
pub mod simulate;
