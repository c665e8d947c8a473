//! Domain models for the export registry

pub mod ledger;
pub mod shipment;

// Re-exports
pub use ledger::{Ledger, LedgerSummary};
pub use shipment::{CargoCategory, CargoClass, ServiceMode, Shipment, ValidationError};
