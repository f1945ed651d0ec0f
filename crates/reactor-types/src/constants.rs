// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// First valid lattice row/column.
pub const LATTICE_MIN: i32 = 20;

/// Last valid lattice row/column (inclusive). 23×23 addressable cells.
pub const LATTICE_MAX: i32 = 42;

/// Number of addressable cells per lattice axis.
pub const LATTICE_SIZE: usize = (LATTICE_MAX - LATTICE_MIN + 1) as usize;

/// Fold pivot: row/col r maps to FOLD_SUM - r in the canonical quarter.
pub const FOLD_SUM: i32 = 62;

/// Lower rod travel stop [m]. Position 0 is the upper (withdrawn) stop
/// for manual and automatic rods.
pub const ROD_TRAVEL_MIN_M: f64 = 0.0;

/// Upper rod travel stop [m].
pub const ROD_TRAVEL_MAX_M: f64 = 8.1;

/// Default actuator rate [m/s], full travel in roughly 22 s.
pub const ROD_DEFAULT_RATE_M_S: f64 = 7.3 / 22.0;

/// Manual rod drive speed table [m/s], indexed by the operator speed step.
pub const ROD_SPEED_TABLE_M_S: [f64; 3] = [0.1, 0.2, 0.3];

/// Effective full-insertion travel [m] used for averaged rod position.
pub const ROD_EFFECTIVE_TRAVEL_M: f64 = 7.3;
