//! Export Registry Core - Rust Engine
//!
//! Validated export-shipment records with category-based cost pricing.
//!
//! # Architecture
//!
//! - **core**: unit conversions and export-date helpers
//! - **models**: domain types (Shipment, Ledger)
//! - **costs**: rate tables and the pure pricing function
//!
//! # Critical Invariants
//!
//! 1. Every field of a `Shipment` is validated before its cost is computed
//! 2. `total_cost` is computed exactly once at construction and is never negative
//! 3. A constructed `Shipment` is immutable; the ledger never mutates entries

// Module declarations
pub mod core;
pub mod costs;
pub mod models;

// Re-exports for convenience
pub use crate::core::dates::{format_dd_mm_yyyy, today};
pub use crate::core::units::{kg_to_grams, kg_to_pounds, kg_to_tonnes, KG_TO_POUNDS};
pub use costs::rates::{
    heavy_rate_per_kg, loose_base_rate_per_kg, loose_volume_surcharge, total_cost,
    VOLUME_SURCHARGE_THRESHOLD_FEET,
};
pub use models::{
    ledger::{Ledger, LedgerSummary},
    shipment::{CargoCategory, CargoClass, ServiceMode, Shipment, ValidationError},
};
