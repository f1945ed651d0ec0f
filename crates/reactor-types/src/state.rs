// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::{LATTICE_MAX, LATTICE_MIN};

/// What a lattice cell holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChannelType {
    Void,
    Fuel,
    ManualRod,
    AutomaticRod,
    ShortRod,
}

/// Rod drive family. Short absorbers travel reversed: their lower stop is
/// the fully inserted end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RodKind {
    Manual,
    Automatic,
    Short,
}

impl ChannelType {
    /// Rod family for rod-bearing cells, `None` for fuel and void.
    pub fn rod_kind(self) -> Option<RodKind> {
        match self {
            ChannelType::ManualRod => Some(RodKind::Manual),
            ChannelType::AutomaticRod => Some(RodKind::Automatic),
            ChannelType::ShortRod => Some(RodKind::Short),
            ChannelType::Fuel | ChannelType::Void => None,
        }
    }
}

/// Lattice coordinate. Rows and columns both run 20..=42.
///
/// `identifier()` is the stable external handle used by operator commands
/// and per-rod telemetry keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub fn new(row: i32, col: i32) -> Self {
        Coordinate { row, col }
    }

    /// External handle: 100*row + col.
    pub fn identifier(&self) -> i64 {
        100 * self.row as i64 + self.col as i64
    }

    /// Inverse of `identifier()`.
    pub fn from_identifier(id: i64) -> Self {
        Coordinate {
            row: (id / 100) as i32,
            col: (id % 100) as i32,
        }
    }

    pub fn in_lattice(&self) -> bool {
        (LATTICE_MIN..=LATTICE_MAX).contains(&self.row)
            && (LATTICE_MIN..=LATTICE_MAX).contains(&self.col)
    }
}

/// Per-rod persisted state, in rod-list order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RodSnapshot {
    pub speed_index: usize,
    pub current_position: f64,
    pub target_position: f64,
    pub auto_mode: bool,
    pub selected: bool,
}

/// Everything the excluded serialization layer persists for this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreSnapshot {
    /// Kinetics state-vector slots 0..=8 (six states, three inputs).
    pub flux_state: [f64; 9],
    /// Iodine-135 and xenon-135 concentrations.
    pub xenon_state: [f64; 2],
    /// Hidden and graphite states of the long-term effect model.
    pub graphite_state: [f64; 2],
    /// One entry per rod, matching the core's rod list 1:1.
    pub rods: Vec<RodSnapshot>,
    pub rps_active: bool,
}
