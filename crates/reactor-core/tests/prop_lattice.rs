// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Property-Based Tests (proptest) for the lattice
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for the lattice classifier.
//!
//! Covers: totality over integers, out-of-range voidness, and the
//! row/column fold symmetry.

use proptest::prelude::*;
use reactor_core::lattice::classify;
use reactor_types::state::ChannelType;

proptest! {
    /// classify is total: no input panics, every output is a variant.
    #[test]
    fn classify_total_over_integers(
        row in -10_000i32..10_000,
        col in -10_000i32..10_000,
    ) {
        let _ = classify(row, col);
    }

    /// Everything outside [20, 42] on either axis is void.
    #[test]
    fn classify_outside_is_void(
        row in -100i32..200,
        col in -100i32..200,
    ) {
        prop_assume!(!(20..=42).contains(&row) || !(20..=42).contains(&col));
        prop_assert_eq!(classify(row, col), ChannelType::Void);
    }

    /// Row fold: classify(r, c) == classify(62-r, c).
    #[test]
    fn classify_row_fold_symmetry(
        row in 20i32..=42,
        col in 20i32..=42,
    ) {
        prop_assert_eq!(classify(row, col), classify(62 - row, col));
    }

    /// Column fold: classify(r, c) == classify(r, 62-c).
    #[test]
    fn classify_col_fold_symmetry(
        row in 20i32..=42,
        col in 20i32..=42,
    ) {
        prop_assert_eq!(classify(row, col), classify(row, 62 - col));
    }

    /// Both folds compose: the four mirror images agree.
    #[test]
    fn classify_quadrant_symmetry(
        row in 20i32..=42,
        col in 20i32..=42,
    ) {
        let t = classify(row, col);
        prop_assert_eq!(t, classify(62 - row, 62 - col));
    }
}
