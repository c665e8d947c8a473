//! Weight unit conversions
//!
//! Shipment weights are recorded in kilograms. Reports additionally show
//! gram, pound, and tonne equivalents, all derived from the kilogram figure.

/// Kilogram to pound conversion factor.
pub const KG_TO_POUNDS: f64 = 2.20462;

/// Convert kilograms to grams.
///
/// # Example
/// ```
/// use export_registry_core::kg_to_grams;
///
/// assert_eq!(kg_to_grams(2.5), 2500.0);
/// ```
pub fn kg_to_grams(kg: f64) -> f64 {
    kg * 1000.0
}

/// Convert kilograms to pounds.
///
/// # Example
/// ```
/// use export_registry_core::kg_to_pounds;
///
/// assert_eq!(kg_to_pounds(1.0), 2.20462);
/// ```
pub fn kg_to_pounds(kg: f64) -> f64 {
    kg * KG_TO_POUNDS
}

/// Convert kilograms to tonnes.
///
/// # Example
/// ```
/// use export_registry_core::kg_to_tonnes;
///
/// assert_eq!(kg_to_tonnes(500.0), 0.5);
/// ```
pub fn kg_to_tonnes(kg: f64) -> f64 {
    kg / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grams_scale_by_one_thousand() {
        assert_eq!(kg_to_grams(0.75), 750.0);
    }

    #[test]
    fn pounds_use_documented_factor() {
        assert!((kg_to_pounds(10.0) - 22.0462).abs() < 1e-9);
    }

    #[test]
    fn tonnes_divide_by_one_thousand() {
        assert_eq!(kg_to_tonnes(250.0), 0.25);
    }
}
