// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Property-Based Tests (proptest) for reactor-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for reactor-types using proptest.
//!
//! Covers: coordinate identifier round-trip, lattice membership,
//! configuration serialization roundtrip.

use proptest::prelude::*;
use reactor_types::config::CoreConfig;
use reactor_types::state::Coordinate;

proptest! {
    /// identifier() and from_identifier() are inverse over the lattice.
    #[test]
    fn coordinate_identifier_roundtrip(
        row in 20i32..=42,
        col in 20i32..=42,
    ) {
        let c = Coordinate::new(row, col);
        prop_assert_eq!(Coordinate::from_identifier(c.identifier()), c);
    }

    /// identifier encodes row in the hundreds and col in the units.
    #[test]
    fn coordinate_identifier_layout(
        row in 20i32..=42,
        col in 20i32..=42,
    ) {
        let id = Coordinate::new(row, col).identifier();
        prop_assert_eq!(id / 100, row as i64);
        prop_assert_eq!(id % 100, col as i64);
    }

    /// Membership agrees with the [20, 42] bounds on both axes.
    #[test]
    fn coordinate_lattice_membership(
        row in -10i32..80,
        col in -10i32..80,
    ) {
        let inside = (20..=42).contains(&row) && (20..=42).contains(&col);
        prop_assert_eq!(Coordinate::new(row, col).in_lattice(), inside);
    }

    /// Config JSON roundtrip preserves the mutable physics parameter.
    #[test]
    fn config_beta_roundtrip(beta in 0.001f64..0.01) {
        let mut cfg = CoreConfig::default();
        cfg.kinetics.beta = beta;
        let json = serde_json::to_string(&cfg).unwrap();
        let back: CoreConfig = serde_json::from_str(&json).unwrap();
        prop_assert!((back.kinetics.beta - beta).abs() < 1e-12);
    }
}
