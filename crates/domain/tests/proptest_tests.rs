//! Property-based tests for domain value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{Coordinates, DomainError, GeocodeQuery, GeocodeRequest, Timezone};
use proptest::prelude::*;

// ============================================================================
// Coordinates Property Tests
// ============================================================================

mod coordinates_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_coordinates_accepted(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let coords = Coordinates::new(lat, lon);
            prop_assert!(coords.is_ok());
        }

        #[test]
        fn valid_coordinates_parse_from_display_strings(
            lat in -90.0f64..=90.0f64,
            lon in -180.0f64..=180.0f64
        ) {
            let parsed = Coordinates::parse(Some(&lat.to_string()), Some(&lon.to_string()));
            prop_assert!(parsed.is_ok());

            let coords = parsed.unwrap();
            prop_assert!((coords.latitude() - lat).abs() < f64::EPSILON);
            prop_assert!((coords.longitude() - lon).abs() < f64::EPSILON);
        }

        #[test]
        fn invalid_latitude_rejected(
            lat in prop_oneof![
                (-1000.0f64..-90.1f64),
                (90.1f64..1000.0f64)
            ],
            lon in -180.0f64..=180.0f64
        ) {
            prop_assert_eq!(Coordinates::new(lat, lon), Err(DomainError::MissingCoordinates));
        }

        #[test]
        fn invalid_longitude_rejected(
            lat in -90.0f64..=90.0f64,
            lon in prop_oneof![
                (-1000.0f64..-180.1f64),
                (180.1f64..1000.0f64)
            ]
        ) {
            prop_assert!(Coordinates::new(lat, lon).is_err());
        }

        #[test]
        fn alphabetic_input_rejected(lat in "[a-mo-zA-MO-Z]{1,8}") {
            prop_assert!(Coordinates::parse(Some(&lat), Some("0")).is_err());
        }
    }
}

// ============================================================================
// Geocode Property Tests
// ============================================================================

mod geocode_tests {
    use super::*;

    proptest! {
        #[test]
        fn short_queries_rejected(core in "[a-z]?", pad in " {0,4}") {
            let query = format!("{pad}{core}{pad}");
            prop_assert_eq!(GeocodeQuery::new(query), Err(DomainError::QueryTooShort));
        }

        #[test]
        fn long_enough_queries_accepted(query in "[A-Za-z]{2,30}") {
            prop_assert!(GeocodeQuery::new(query).is_ok());
        }

        #[test]
        fn count_always_within_bounds(count in any::<i64>()) {
            let raw = count.to_string();
            let req = GeocodeRequest::from_params(Some("Berlin"), Some(&raw), None).unwrap();
            prop_assert!((1..=100).contains(&req.count));
        }
    }
}

// ============================================================================
// Timezone Property Tests
// ============================================================================

mod timezone_tests {
    use super::*;

    proptest! {
        #[test]
        fn non_empty_timezone_preserved(tz in "[A-Za-z]{1,12}/[A-Za-z_]{1,12}") {
            let parsed = Timezone::from_param(Some(&tz));
            prop_assert_eq!(parsed.as_str(), tz.as_str());
        }
    }
}
