//! Property tests for unit conversions and pricing invariants

use export_registry_core::{kg_to_grams, kg_to_pounds, kg_to_tonnes, Shipment};
use proptest::prelude::*;

proptest! {
    #[test]
    fn grams_scale_by_one_thousand(weight_kg in 0.001f64..1_000_000.0) {
        prop_assert_eq!(kg_to_grams(weight_kg), weight_kg * 1000.0);
    }

    #[test]
    fn pounds_use_the_documented_factor(weight_kg in 0.001f64..1_000_000.0) {
        prop_assert_eq!(kg_to_pounds(weight_kg), weight_kg * 2.20462);
    }

    #[test]
    fn tonnes_divide_by_one_thousand(weight_kg in 0.001f64..1_000_000.0) {
        prop_assert_eq!(kg_to_tonnes(weight_kg), weight_kg / 1000.0);
    }

    #[test]
    fn shipment_conversions_agree_with_the_helpers(weight_kg in 0.001f64..1_000_000.0) {
        let shipment = Shipment::loose(
            "1-2345-6789",
            "Ana Lopez",
            "Panama",
            "barco",
            weight_kg,
            0.0,
        )
        .unwrap();

        prop_assert_eq!(shipment.grams(), kg_to_grams(weight_kg));
        prop_assert_eq!(shipment.pounds(), kg_to_pounds(weight_kg));
        prop_assert_eq!(shipment.tonnes(), kg_to_tonnes(weight_kg));
    }

    #[test]
    fn loose_cost_is_never_negative(
        weight_kg in 0.001f64..1_000_000.0,
        volume_feet in 0.0f64..500.0,
    ) {
        let shipment = Shipment::loose(
            "1-2345-6789",
            "Ana Lopez",
            "Panama",
            "avion",
            weight_kg,
            volume_feet,
        )
        .unwrap();

        prop_assert!(shipment.total_cost() >= 0.0);
    }

    #[test]
    fn heavy_cost_is_weight_times_a_table_rate(
        weight_kg in 0.001f64..1_000_000.0,
    ) {
        let shipment = Shipment::heavy(
            "1-2345-6789",
            "Ana Lopez",
            "Panama",
            "barco",
            weight_kg,
            "refrigerated",
        )
        .unwrap();

        prop_assert_eq!(shipment.total_cost(), weight_kg * 950.0);
    }
}
