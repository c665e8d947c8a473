//! Shared helpers: unit conversions and export dates

pub mod dates;
pub mod units;
