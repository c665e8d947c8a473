//! Shipment ledger
//!
//! In-memory, insertion-ordered store of registered shipments, plus the
//! aggregate figures the grouped report is built from.
//!
//! # Critical Invariants
//!
//! 1. Insertion order is preserved; reports iterate in registration order
//! 2. Aggregates are recomputed from live contents on every call, no caching
//! 3. The ledger never mutates a stored shipment

use serde::{Deserialize, Serialize};

use crate::core::units;
use crate::models::shipment::Shipment;

/// Insertion-ordered, in-memory collection of shipments.
///
/// Single-threaded by design: `append` has no internal synchronization, so a
/// ledger shared across threads needs a single serialized writer.
///
/// # Example
/// ```
/// use export_registry_core::{Ledger, Shipment};
///
/// let mut ledger = Ledger::new();
/// let shipment = Shipment::heavy(
///     "1-2345-6789",
///     "Ana Lopez",
///     "Costa Rica",
///     "barco",
///     10.0,
///     "refrigerated",
/// )
/// .unwrap();
///
/// ledger.append(shipment);
/// assert_eq!(ledger.len(), 1);
/// assert_eq!(ledger.summary().heavy_cost_total, 9500.0);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Ledger {
    /// Registered shipments in insertion order
    shipments: Vec<Shipment>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self {
            shipments: Vec::new(),
        }
    }

    /// Append a shipment.
    ///
    /// No dedup and no re-validation; the shipment was fully validated at
    /// construction.
    pub fn append(&mut self, shipment: Shipment) {
        self.shipments.push(shipment);
    }

    /// Iterate shipments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Shipment> {
        self.shipments.iter()
    }

    /// Look up a shipment by its id.
    pub fn get(&self, id: &str) -> Option<&Shipment> {
        self.shipments.iter().find(|shipment| shipment.id() == id)
    }

    /// Number of registered shipments.
    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    /// Check if nothing has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }

    /// Aggregate report figures over the current contents.
    ///
    /// Recomputed by traversal on every call so the result always reflects
    /// what the ledger holds right now.
    pub fn summary(&self) -> LedgerSummary {
        let mut summary = LedgerSummary::default();

        for shipment in &self.shipments {
            if shipment.is_heavy() {
                summary.heavy_count += 1;
                summary.heavy_cost_total += shipment.total_cost();
            } else {
                summary.loose_count += 1;
                summary.loose_cost_total += shipment.total_cost();
            }
            summary.total_weight_kg += shipment.weight_kg();
        }

        summary.combined_cost_total = summary.heavy_cost_total + summary.loose_cost_total;
        summary.total_weight_grams = units::kg_to_grams(summary.total_weight_kg);
        summary.total_weight_pounds = units::kg_to_pounds(summary.total_weight_kg);
        summary.total_weight_tonnes = units::kg_to_tonnes(summary.total_weight_kg);
        summary
    }
}

/// Aggregate figures for the grouped report.
///
/// Produced by [`Ledger::summary`]; serializable so front ends can emit it
/// as structured output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LedgerSummary {
    /// Number of heavy-cargo shipments
    pub heavy_count: usize,

    /// Number of loose-cargo shipments
    pub loose_count: usize,

    /// Cost total across heavy-cargo shipments
    pub heavy_cost_total: f64,

    /// Cost total across loose-cargo shipments
    pub loose_cost_total: f64,

    /// Cost total across all shipments
    pub combined_cost_total: f64,

    /// Weight total in kilograms
    pub total_weight_kg: f64,

    /// Weight total in grams
    pub total_weight_grams: f64,

    /// Weight total in pounds
    pub total_weight_pounds: f64,

    /// Weight total in tonnes
    pub total_weight_tonnes: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loose(weight_kg: f64) -> Shipment {
        Shipment::loose(
            "1-2345-6789",
            "Ana Lopez",
            "Panama",
            "barco",
            weight_kg,
            10.0,
        )
        .unwrap()
    }

    #[test]
    fn empty_ledger_summarizes_to_zeros() {
        let ledger = Ledger::new();
        assert_eq!(ledger.summary(), LedgerSummary::default());
    }

    #[test]
    fn get_finds_shipments_by_id() {
        let mut ledger = Ledger::new();
        let shipment = loose(5.0);
        let id = shipment.id().to_string();
        ledger.append(shipment);

        assert!(ledger.get(&id).is_some());
        assert!(ledger.get("missing").is_none());
    }
}
