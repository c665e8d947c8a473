//! Shipping cost rules
//!
//! Rate tables live in `rates`. The price of a shipment is a pure function
//! of its service mode, weight, and cargo category; `Shipment` calls it once
//! at construction and stores the result.

pub mod rates;

// Re-exports
pub use rates::{
    heavy_rate_per_kg, loose_base_rate_per_kg, loose_volume_surcharge, total_cost,
    VOLUME_SURCHARGE_THRESHOLD_FEET,
};
