// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Lattice
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Lattice geometry classifier.
//!
//! Pure, total over all integers. The 23×23 lattice is four-fold
//! symmetric; classification folds into the lower-left quarter and walks
//! a per-row staircase with a handful of rod positions punched in.

use reactor_types::constants::{FOLD_SUM, LATTICE_MAX, LATTICE_MIN};
use reactor_types::state::ChannelType;

/// Channel type at (row, col). Anything outside [20, 42]² is void.
pub fn classify(row: i32, col: i32) -> ChannelType {
    if !(LATTICE_MIN..=LATTICE_MAX).contains(&row)
        || !(LATTICE_MIN..=LATTICE_MAX).contains(&col)
    {
        return ChannelType::Void;
    }

    // Fold into the canonical quarter: both axes mirror about 31.
    let r = if row > 31 { FOLD_SUM - row } else { row };
    let c = if col > 31 { FOLD_SUM - col } else { col };

    // Rod positions override the fuel staircase.
    match (r, c) {
        (22, 28) | (22, 31) => return ChannelType::ManualRod,
        (25, 25) | (25, 28) => return ChannelType::ManualRod,
        (25, 31) => return ChannelType::AutomaticRod,
        (28, 22) | (28, 25) | (28, 31) => return ChannelType::ManualRod,
        (28, 28) => return ChannelType::ShortRod,
        (31, 22) | (31, 28) => return ChannelType::ManualRod,
        (31, 25) | (31, 31) => return ChannelType::AutomaticRod,
        _ => {}
    }

    // Fuel threshold on the canonical column, per canonical row.
    let threshold = match r {
        20 => 29,
        21 => 26,
        22 => 24,
        23 => 23,
        24 | 25 => 22,
        26 | 27 | 28 => 21,
        29 | 30 | 31 => return ChannelType::Fuel,
        _ => return ChannelType::Void,
    };

    if c >= threshold {
        ChannelType::Fuel
    } else {
        ChannelType::Void
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outside_lattice_is_void() {
        assert_eq!(classify(19, 30), ChannelType::Void);
        assert_eq!(classify(30, 19), ChannelType::Void);
        assert_eq!(classify(43, 30), ChannelType::Void);
        assert_eq!(classify(30, 43), ChannelType::Void);
        assert_eq!(classify(-5, 1000), ChannelType::Void);
        assert_eq!(classify(0, 0), ChannelType::Void);
    }

    #[test]
    fn test_known_cells() {
        assert_eq!(classify(31, 31), ChannelType::AutomaticRod);
        assert_eq!(classify(28, 28), ChannelType::ShortRod);
        assert_eq!(classify(20, 29), ChannelType::Fuel);
        assert_eq!(classify(20, 28), ChannelType::Void);
        assert_eq!(classify(25, 31), ChannelType::AutomaticRod);
        assert_eq!(classify(22, 28), ChannelType::ManualRod);
        assert_eq!(classify(29, 20), ChannelType::Fuel);
    }

    #[test]
    fn test_fold_symmetry_spot_checks() {
        // (28, 28) short rod mirrors into all four quadrants.
        assert_eq!(classify(34, 28), ChannelType::ShortRod);
        assert_eq!(classify(28, 34), ChannelType::ShortRod);
        assert_eq!(classify(34, 34), ChannelType::ShortRod);
        // Staircase corner mirrors too.
        assert_eq!(classify(42, 29), ChannelType::Fuel);
        assert_eq!(classify(42, 28), ChannelType::Void);
        assert_eq!(classify(20, 33), ChannelType::Fuel);
    }

    #[test]
    fn test_row_21_threshold() {
        assert_eq!(classify(21, 25), ChannelType::Void);
        assert_eq!(classify(21, 26), ChannelType::Fuel);
    }

    #[test]
    fn test_center_rows_always_fuel_or_rod() {
        for col in 20..=42 {
            for row in [29, 30, 31, 32, 33] {
                let t = classify(row, col);
                assert_ne!(
                    t,
                    ChannelType::Void,
                    "({row},{col}) must not be void in the full-width band"
                );
            }
        }
    }
}
