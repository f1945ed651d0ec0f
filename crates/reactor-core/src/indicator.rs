// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Core Indicator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Annunciator grid for the control-panel mnemonic display.
//!
//! One boolean per non-void lattice cell: fuel cells light on local flux,
//! rod cells light while the rod is not fully absorbing. Void cells carry
//! no meaningful value.

use ndarray::Array2;

use reactor_types::constants::{LATTICE_MIN, LATTICE_SIZE};
use reactor_types::state::RodKind;

use crate::core::{CoreElement, ReactorCore};

#[derive(Debug, Clone)]
pub struct CoreIndicator {
    grid: Array2<bool>,
}

impl CoreIndicator {
    pub fn new() -> Self {
        CoreIndicator {
            grid: Array2::from_elem((LATTICE_SIZE, LATTICE_SIZE), false),
        }
    }

    /// Recompute the grid from the current core state.
    pub fn refresh(&mut self, core: &ReactorCore) {
        let flux_log = core.flux_log();
        for r in 0..LATTICE_SIZE {
            for c in 0..LATTICE_SIZE {
                let row = LATTICE_MIN + r as i32;
                let col = LATTICE_MIN + c as i32;
                self.grid[(r, c)] = match core.element_at(row, col) {
                    Some(CoreElement::Fuel(fuel)) => {
                        flux_log + fuel.affection() * 3.0 > -3.5
                    }
                    Some(CoreElement::Rod(rod)) => match rod.kind() {
                        RodKind::Short => rod.absorption() < 0.59,
                        _ => rod.absorption() < 0.99,
                    },
                    None => false,
                };
            }
        }
    }

    /// Indicator state at (row, col); false for void or out-of-range.
    pub fn is_lit(&self, row: i32, col: i32) -> bool {
        let r = row - LATTICE_MIN;
        let c = col - LATTICE_MIN;
        if (0..LATTICE_SIZE as i32).contains(&r) && (0..LATTICE_SIZE as i32).contains(&c) {
            self.grid[(r as usize, c as usize)]
        } else {
            false
        }
    }
}

impl Default for CoreIndicator {
    fn default() -> Self {
        Self::new()
    }
}
