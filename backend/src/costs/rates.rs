//! Rate Tables and Pricing
//!
//! Defines the per-kilogram rates and flat surcharges used to price a
//! shipment, plus `total_cost`, the single pricing entry point keyed on the
//! cargo category.
//!
//! All rates are per kilogram unless noted otherwise.

use crate::models::shipment::{CargoCategory, CargoClass, ServiceMode};

/// Sea rate per kilogram for a refrigerated container.
pub const REFRIGERATED_CONTAINER_RATE: f64 = 950.0;

/// Sea rate per kilogram for a non-refrigerated container.
pub const NON_REFRIGERATED_CONTAINER_RATE: f64 = 550.0;

/// Sea rate per kilogram for packed cargo.
pub const PACKED_CARGO_RATE: f64 = 450.0;

/// Loose-cargo base rate per kilogram by air.
pub const LOOSE_AIR_RATE: f64 = 450.0;

/// Loose-cargo base rate per kilogram by sea.
pub const LOOSE_SEA_RATE: f64 = 150.0;

/// Volumetric footprint (feet) above which loose cargo pays a flat surcharge.
///
/// The threshold is strict: exactly 18 feet pays no surcharge.
pub const VOLUME_SURCHARGE_THRESHOLD_FEET: f64 = 18.0;

/// Flat surcharge for oversized loose cargo by air.
pub const LOOSE_AIR_SURCHARGE: f64 = 100.0;

/// Flat surcharge for oversized loose cargo by sea.
pub const LOOSE_SEA_SURCHARGE: f64 = 50.0;

/// Per-kilogram rate for heavy cargo.
///
/// The tariff documents heavy-cargo rates for sea freight only. For air
/// freight no heavy-cargo rate exists; the packed-cargo rate applies as the
/// default until a dedicated air tariff is signed off.
///
/// # Example
/// ```
/// use export_registry_core::{heavy_rate_per_kg, CargoClass, ServiceMode};
///
/// assert_eq!(
///     heavy_rate_per_kg(ServiceMode::Sea, CargoClass::RefrigeratedContainer),
///     950.0
/// );
/// assert_eq!(
///     heavy_rate_per_kg(ServiceMode::Air, CargoClass::RefrigeratedContainer),
///     450.0
/// );
/// ```
pub fn heavy_rate_per_kg(mode: ServiceMode, cargo_class: CargoClass) -> f64 {
    match mode {
        ServiceMode::Sea => match cargo_class {
            CargoClass::RefrigeratedContainer => REFRIGERATED_CONTAINER_RATE,
            CargoClass::NonRefrigeratedContainer => NON_REFRIGERATED_CONTAINER_RATE,
            CargoClass::PackedCargo => PACKED_CARGO_RATE,
        },
        ServiceMode::Air => PACKED_CARGO_RATE,
    }
}

/// Base per-kilogram rate for loose cargo.
pub fn loose_base_rate_per_kg(mode: ServiceMode) -> f64 {
    match mode {
        ServiceMode::Air => LOOSE_AIR_RATE,
        ServiceMode::Sea => LOOSE_SEA_RATE,
    }
}

/// Flat volumetric surcharge for loose cargo.
///
/// Zero at or below [`VOLUME_SURCHARGE_THRESHOLD_FEET`]; the surcharge does
/// not scale with the excess footage.
pub fn loose_volume_surcharge(mode: ServiceMode, volume_feet: f64) -> f64 {
    if volume_feet > VOLUME_SURCHARGE_THRESHOLD_FEET {
        match mode {
            ServiceMode::Air => LOOSE_AIR_SURCHARGE,
            ServiceMode::Sea => LOOSE_SEA_SURCHARGE,
        }
    } else {
        0.0
    }
}

/// Total cost of a shipment, keyed on its cargo category.
///
/// Pure: the same inputs always produce the same price. `Shipment`
/// constructors call this exactly once and freeze the result.
///
/// # Example
/// ```
/// use export_registry_core::{total_cost, CargoCategory, ServiceMode};
///
/// let category = CargoCategory::Loose { volume_feet: 19.0 };
/// assert_eq!(total_cost(ServiceMode::Sea, 20.0, &category), 3050.0);
/// ```
pub fn total_cost(mode: ServiceMode, weight_kg: f64, category: &CargoCategory) -> f64 {
    match category {
        CargoCategory::Heavy { cargo_class } => weight_kg * heavy_rate_per_kg(mode, *cargo_class),
        CargoCategory::Loose { volume_feet } => {
            weight_kg * loose_base_rate_per_kg(mode) + loose_volume_surcharge(mode, *volume_feet)
        }
    }
}
