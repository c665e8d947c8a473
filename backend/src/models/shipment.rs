//! Shipment model
//!
//! Represents a single validated export record.
//! Each shipment has:
//! - Client id (`D-DDDD-DDDD`) and client name
//! - Destination zone and service mode (Sea or Air)
//! - Weight in kilograms and a cargo category (heavy or loose)
//! - Export date, stamped at registration
//! - Total cost, priced once at construction from the category rule
//!
//! Construction is atomic: either every field passes validation and the cost
//! is already frozen, or a `ValidationError` is returned and no shipment
//! exists. There are no public mutators.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{dates, units};
use crate::costs;

/// Minimum client-name length after trimming.
pub const MIN_CLIENT_NAME_LEN: usize = 7;

/// Errors raised while validating shipment fields at construction.
///
/// All are terminal for that construction attempt. Retry-on-invalid-input is
/// the interactive shell's concern, not the core's.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("client id must match the pattern 1-1111-1111 (digit, dash, four digits, dash, four digits)")]
    InvalidClientId,

    #[error("client name must be at least 7 characters after trimming")]
    InvalidName,

    #[error("destination zone must not be blank")]
    InvalidZone,

    #[error("service mode '{input}' is not recognized (expected Sea or Air)")]
    InvalidServiceMode { input: String },

    #[error("weight must be positive, got {weight_kg} kg")]
    InvalidWeight { weight_kg: f64 },

    /// The shell constrains cargo-class choices upstream, so hitting this
    /// indicates a configuration error rather than bad user input.
    #[error("cargo class '{input}' is not recognized")]
    InvalidCargoClass { input: String },

    #[error("cargo volume must be non-negative, got {volume_feet} ft")]
    InvalidVolume { volume_feet: f64 },
}

/// Transport medium for a shipment.
///
/// Drives the per-kilogram base rates. Raw input is matched
/// case-insensitively; the legacy data-entry words are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceMode {
    /// Sea freight (legacy input alias: "barco")
    Sea,

    /// Air freight (legacy input alias: "avion")
    Air,
}

impl ServiceMode {
    /// Parse raw input into a service mode.
    ///
    /// Accepts `"sea"`/`"barco"` and `"air"`/`"avion"` in any casing.
    ///
    /// # Example
    /// ```
    /// use export_registry_core::ServiceMode;
    ///
    /// assert_eq!(ServiceMode::parse("BARCO").unwrap(), ServiceMode::Sea);
    /// assert_eq!(ServiceMode::parse("Avion").unwrap(), ServiceMode::Air);
    /// assert!(ServiceMode::parse("truck").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "sea" | "barco" => Ok(ServiceMode::Sea),
            "air" | "avion" => Ok(ServiceMode::Air),
            _ => Err(ValidationError::InvalidServiceMode {
                input: input.to_string(),
            }),
        }
    }

    /// Canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceMode::Sea => "Sea",
            ServiceMode::Air => "Air",
        }
    }
}

impl fmt::Display for ServiceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heavy-cargo subcategory, each with its own sea rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CargoClass {
    /// Refrigerated container
    RefrigeratedContainer,

    /// Non-refrigerated container
    NonRefrigeratedContainer,

    /// Packed cargo
    PackedCargo,
}

impl CargoClass {
    /// Parse raw input into a cargo class.
    ///
    /// Accepts the canonical names with or without the container/cargo noun
    /// (`"refrigerated"`, `"non-refrigerated"`, `"packed"`), any casing.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        match input.trim().to_ascii_lowercase().as_str() {
            "refrigerated" | "refrigerated container" => Ok(CargoClass::RefrigeratedContainer),
            "non-refrigerated" | "nonrefrigerated" | "non-refrigerated container" => {
                Ok(CargoClass::NonRefrigeratedContainer)
            }
            "packed" | "packed cargo" => Ok(CargoClass::PackedCargo),
            _ => Err(ValidationError::InvalidCargoClass {
                input: input.to_string(),
            }),
        }
    }

    /// Canonical display name.
    pub fn as_str(&self) -> &'static str {
        match self {
            CargoClass::RefrigeratedContainer => "Refrigerated container",
            CargoClass::NonRefrigeratedContainer => "Non-refrigerated container",
            CargoClass::PackedCargo => "Packed cargo",
        }
    }
}

impl fmt::Display for CargoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category-specific payload carried by every shipment.
///
/// The pricing rule dispatches on this tag: heavy cargo is priced from the
/// cargo-class rate table, loose cargo from the per-mode base rate plus a
/// volumetric surcharge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CargoCategory {
    /// Containerized or otherwise heavy cargo, priced by cargo class
    Heavy {
        /// Subcategory selecting the sea rate
        cargo_class: CargoClass,
    },

    /// Loose cargo, priced by weight with a flat volumetric surcharge
    Loose {
        /// Volumetric footprint in feet, never negative
        volume_feet: f64,
    },
}

/// Check a client id against the `D-DDDD-DDDD` layout.
pub fn validate_client_id(client_id: &str) -> Result<(), ValidationError> {
    let bytes = client_id.as_bytes();
    let well_formed = bytes.len() == 11
        && bytes[0].is_ascii_digit()
        && bytes[1] == b'-'
        && bytes[2..6].iter().all(|b| b.is_ascii_digit())
        && bytes[6] == b'-'
        && bytes[7..11].iter().all(|b| b.is_ascii_digit());

    if well_formed {
        Ok(())
    } else {
        Err(ValidationError::InvalidClientId)
    }
}

/// Check that a client name has at least [`MIN_CLIENT_NAME_LEN`] characters
/// after trimming.
pub fn validate_client_name(client_name: &str) -> Result<(), ValidationError> {
    if client_name.trim().chars().count() >= MIN_CLIENT_NAME_LEN {
        Ok(())
    } else {
        Err(ValidationError::InvalidName)
    }
}

/// Check that a destination zone is not blank.
pub fn validate_destination_zone(zone: &str) -> Result<(), ValidationError> {
    if zone.trim().is_empty() {
        Err(ValidationError::InvalidZone)
    } else {
        Ok(())
    }
}

/// Check that a weight is strictly positive.
pub fn validate_weight(weight_kg: f64) -> Result<(), ValidationError> {
    if weight_kg > 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidWeight { weight_kg })
    }
}

/// Check that a volumetric footprint is non-negative.
pub fn validate_volume_feet(volume_feet: f64) -> Result<(), ValidationError> {
    if volume_feet >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::InvalidVolume { volume_feet })
    }
}

/// A validated export shipment with its cost frozen at registration.
///
/// # Example
/// ```
/// use export_registry_core::Shipment;
///
/// let shipment = Shipment::loose(
///     "1-2345-6789",
///     "Ana Lopez",
///     "Panama",
///     "barco",
///     20.0,
///     19.0,
/// )
/// .unwrap();
///
/// assert_eq!(shipment.total_cost(), 3050.0);
/// assert_eq!(shipment.grams(), 20000.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shipment {
    /// Unique shipment identifier (UUID)
    id: String,

    /// Client identity document, `D-DDDD-DDDD`
    client_id: String,

    /// Client full name, trimmed length >= 7
    client_name: String,

    /// Destination country or zone, never blank
    destination_zone: String,

    /// Transport medium
    service_mode: ServiceMode,

    /// Cargo weight in kilograms, always positive
    weight_kg: f64,

    /// Registration date, stamped at construction and immutable
    export_date: NaiveDate,

    /// Category payload the pricing rule dispatches on
    category: CargoCategory,

    /// Price computed once at construction, never negative
    total_cost: f64,
}

impl Shipment {
    /// Register a heavy-cargo shipment dated today.
    ///
    /// Validation order: client id, client name, destination zone, service
    /// mode, weight, cargo class. The first violation wins.
    ///
    /// # Arguments
    /// * `client_id` - Client identity document, `D-DDDD-DDDD`
    /// * `client_name` - Client full name, at least 7 characters trimmed
    /// * `destination_zone` - Destination country or zone
    /// * `service_mode` - Raw service mode ("Sea"/"Air", aliases "barco"/"avion")
    /// * `weight_kg` - Cargo weight in kilograms, positive
    /// * `cargo_class` - Raw cargo class ("refrigerated", "non-refrigerated", "packed")
    ///
    /// # Example
    /// ```
    /// use export_registry_core::Shipment;
    ///
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
    /// assert_eq!(shipment.total_cost(), 9500.0);
    /// ```
    pub fn heavy(
        client_id: &str,
        client_name: &str,
        destination_zone: &str,
        service_mode: &str,
        weight_kg: f64,
        cargo_class: &str,
    ) -> Result<Self, ValidationError> {
        Self::heavy_on(
            client_id,
            client_name,
            destination_zone,
            service_mode,
            weight_kg,
            cargo_class,
            dates::today(),
        )
    }

    /// Register a heavy-cargo shipment with an explicit export date.
    ///
    /// Same contract as [`Shipment::heavy`]; the explicit date keeps tests
    /// deterministic.
    pub fn heavy_on(
        client_id: &str,
        client_name: &str,
        destination_zone: &str,
        service_mode: &str,
        weight_kg: f64,
        cargo_class: &str,
        export_date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let mode = validate_base(
            client_id,
            client_name,
            destination_zone,
            service_mode,
            weight_kg,
        )?;
        let cargo_class = CargoClass::parse(cargo_class)?;

        Ok(Self::from_validated(
            client_id,
            client_name,
            destination_zone,
            mode,
            weight_kg,
            CargoCategory::Heavy { cargo_class },
            export_date,
        ))
    }

    /// Register a loose-cargo shipment dated today.
    ///
    /// Validation order: client id, client name, destination zone, service
    /// mode, weight, volume. The first violation wins.
    ///
    /// # Arguments
    /// * `client_id` - Client identity document, `D-DDDD-DDDD`
    /// * `client_name` - Client full name, at least 7 characters trimmed
    /// * `destination_zone` - Destination country or zone
    /// * `service_mode` - Raw service mode ("Sea"/"Air", aliases "barco"/"avion")
    /// * `weight_kg` - Cargo weight in kilograms, positive
    /// * `volume_feet` - Volumetric footprint in feet, non-negative
    pub fn loose(
        client_id: &str,
        client_name: &str,
        destination_zone: &str,
        service_mode: &str,
        weight_kg: f64,
        volume_feet: f64,
    ) -> Result<Self, ValidationError> {
        Self::loose_on(
            client_id,
            client_name,
            destination_zone,
            service_mode,
            weight_kg,
            volume_feet,
            dates::today(),
        )
    }

    /// Register a loose-cargo shipment with an explicit export date.
    ///
    /// Same contract as [`Shipment::loose`]; the explicit date keeps tests
    /// deterministic.
    pub fn loose_on(
        client_id: &str,
        client_name: &str,
        destination_zone: &str,
        service_mode: &str,
        weight_kg: f64,
        volume_feet: f64,
        export_date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let mode = validate_base(
            client_id,
            client_name,
            destination_zone,
            service_mode,
            weight_kg,
        )?;
        validate_volume_feet(volume_feet)?;

        Ok(Self::from_validated(
            client_id,
            client_name,
            destination_zone,
            mode,
            weight_kg,
            CargoCategory::Loose { volume_feet },
            export_date,
        ))
    }

    /// Assemble a shipment from already-validated parts and freeze its cost.
    fn from_validated(
        client_id: &str,
        client_name: &str,
        destination_zone: &str,
        service_mode: ServiceMode,
        weight_kg: f64,
        category: CargoCategory,
        export_date: NaiveDate,
    ) -> Self {
        let total_cost = costs::total_cost(service_mode, weight_kg, &category);

        Self {
            id: uuid::Uuid::new_v4().to_string(),
            client_id: client_id.to_string(),
            client_name: client_name.to_string(),
            destination_zone: destination_zone.to_string(),
            service_mode,
            weight_kg,
            export_date,
            category,
            total_cost,
        }
    }

    /// Get shipment ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get client ID
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Get client full name
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Get destination zone
    pub fn destination_zone(&self) -> &str {
        &self.destination_zone
    }

    /// Get service mode
    pub fn service_mode(&self) -> ServiceMode {
        self.service_mode
    }

    /// Get cargo weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Get export date
    pub fn export_date(&self) -> NaiveDate {
        self.export_date
    }

    /// Export date rendered as `dd/mm/yyyy`
    pub fn formatted_export_date(&self) -> String {
        dates::format_dd_mm_yyyy(self.export_date)
    }

    /// Get cargo category
    pub fn category(&self) -> &CargoCategory {
        &self.category
    }

    /// Cargo class for heavy shipments, `None` for loose cargo
    pub fn cargo_class(&self) -> Option<CargoClass> {
        match self.category {
            CargoCategory::Heavy { cargo_class } => Some(cargo_class),
            CargoCategory::Loose { .. } => None,
        }
    }

    /// Volumetric footprint for loose shipments, `None` for heavy cargo
    pub fn volume_feet(&self) -> Option<f64> {
        match self.category {
            CargoCategory::Heavy { .. } => None,
            CargoCategory::Loose { volume_feet } => Some(volume_feet),
        }
    }

    /// Check if this is a heavy-cargo shipment
    pub fn is_heavy(&self) -> bool {
        matches!(self.category, CargoCategory::Heavy { .. })
    }

    /// Check if this is a loose-cargo shipment
    pub fn is_loose(&self) -> bool {
        matches!(self.category, CargoCategory::Loose { .. })
    }

    /// Total cost, frozen at construction
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Cargo weight in grams
    pub fn grams(&self) -> f64 {
        units::kg_to_grams(self.weight_kg)
    }

    /// Cargo weight in pounds
    pub fn pounds(&self) -> f64 {
        units::kg_to_pounds(self.weight_kg)
    }

    /// Cargo weight in tonnes
    pub fn tonnes(&self) -> f64 {
        units::kg_to_tonnes(self.weight_kg)
    }
}

/// Validate the fields shared by both cargo categories, in contract order,
/// and normalize the service mode.
fn validate_base(
    client_id: &str,
    client_name: &str,
    destination_zone: &str,
    service_mode: &str,
    weight_kg: f64,
) -> Result<ServiceMode, ValidationError> {
    validate_client_id(client_id)?;
    validate_client_name(client_name)?;
    validate_destination_zone(destination_zone)?;
    let mode = ServiceMode::parse(service_mode)?;
    validate_weight(weight_kg)?;
    Ok(mode)
}

impl fmt::Display for Shipment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {} | {} | {:.2} kg | ${:.2}",
            self.client_id,
            self.client_name,
            self.formatted_export_date(),
            self.destination_zone,
            self.service_mode,
            self.weight_kg,
            self.total_cost
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_id_requires_exact_group_lengths() {
        assert!(validate_client_id("1-2345-6789").is_ok());
        assert_eq!(
            validate_client_id("12-345-6789"),
            Err(ValidationError::InvalidClientId)
        );
        assert_eq!(
            validate_client_id("1-234-6789"),
            Err(ValidationError::InvalidClientId)
        );
        assert_eq!(validate_client_id(""), Err(ValidationError::InvalidClientId));
        assert_eq!(
            validate_client_id("1-2345-678a"),
            Err(ValidationError::InvalidClientId)
        );
    }

    #[test]
    fn client_id_rejects_multibyte_input_of_matching_length() {
        // 11 bytes but not the digit/dash layout
        assert_eq!(
            validate_client_id("1-2345-67é"),
            Err(ValidationError::InvalidClientId)
        );
    }

    #[test]
    fn name_length_is_checked_after_trimming() {
        assert!(validate_client_name("Ana Lopez").is_ok());
        assert_eq!(validate_client_name("Ana"), Err(ValidationError::InvalidName));
        assert_eq!(
            validate_client_name("   Ana   "),
            Err(ValidationError::InvalidName)
        );
        assert_eq!(
            validate_client_name("          "),
            Err(ValidationError::InvalidName)
        );
    }

    #[test]
    fn volume_rejects_negative_footage() {
        assert!(validate_volume_feet(0.0).is_ok());
        assert_eq!(
            validate_volume_feet(-1.0),
            Err(ValidationError::InvalidVolume { volume_feet: -1.0 })
        );
    }

    #[test]
    fn display_includes_the_report_fields() {
        let shipment = Shipment::loose_on(
            "1-2345-6789",
            "Ana Lopez",
            "Panama",
            "barco",
            20.0,
            10.0,
            NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        )
        .unwrap();

        let rendered = shipment.to_string();
        assert!(rendered.contains("1-2345-6789"));
        assert!(rendered.contains("05/01/2026"));
        assert!(rendered.contains("Sea"));
        assert!(rendered.contains("$3000.00"));
    }
}
