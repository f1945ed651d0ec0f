// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Control Rod
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Control rod: a rate-limited position drive coupled to a type-dependent
//! absorption curve.
//!
//! Manual and automatic rods insert downward (position 8.1 is fully in,
//! position 0 the upper stop). Short absorbers travel reversed: they are
//! driven from below and fully absorb at the lower stop.

use reactor_control::actuator::{Actuator, RateLimitedFollower};
use reactor_types::constants::{
    ROD_DEFAULT_RATE_M_S, ROD_EFFECTIVE_TRAVEL_M, ROD_SPEED_TABLE_M_S, ROD_TRAVEL_MAX_M,
    ROD_TRAVEL_MIN_M,
};
use reactor_types::state::{Coordinate, RodKind, RodSnapshot};

/// Initial position for short absorbers [m].
const SHORT_ROD_INITIAL_M: f64 = 2.5;

/// Initial position for every other rod [m].
const ROD_INITIAL_M: f64 = 7.4;

/// Absorption as a function of position for the rod family.
fn absorption_at(kind: RodKind, position: f64) -> f64 {
    match kind {
        RodKind::Short => {
            if position <= 3.0 {
                0.6
            } else if position >= 7.2 {
                0.0
            } else {
                0.6 * (7.2 - position) / (7.2 - 3.0)
            }
        }
        RodKind::Manual | RodKind::Automatic => {
            // Dead zone near the upper stop: pulling the rod the last
            // 0.6 m out raises absorption slightly instead of lowering it
            // (displacer effect).
            if position <= 0.6 {
                0.2 - position * 0.333333
            } else if position >= 7.3 {
                1.0
            } else {
                (position - 0.6) / (7.3 - 0.6)
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ControlRod {
    coordinate: Coordinate,
    kind: RodKind,
    actuator: RateLimitedFollower,
    selected: bool,
    automatic: bool,
    speed_index: usize,
    absorption: f64,
}

impl ControlRod {
    pub fn new(coordinate: Coordinate, kind: RodKind) -> Self {
        let initial = match kind {
            RodKind::Short => SHORT_ROD_INITIAL_M,
            _ => ROD_INITIAL_M,
        };
        let actuator = RateLimitedFollower::new(
            initial,
            ROD_TRAVEL_MIN_M,
            ROD_TRAVEL_MAX_M,
            ROD_DEFAULT_RATE_M_S,
        );
        let absorption = absorption_at(kind, initial);
        ControlRod {
            coordinate,
            kind,
            actuator,
            selected: false,
            automatic: kind == RodKind::Automatic,
            speed_index: 1,
            absorption,
        }
    }

    pub fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub fn identifier(&self) -> i64 {
        self.coordinate.identifier()
    }

    pub fn kind(&self) -> RodKind {
        self.kind
    }

    pub fn selected(&self) -> bool {
        self.selected
    }

    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }

    pub fn automatic(&self) -> bool {
        self.automatic
    }

    pub fn position(&self) -> f64 {
        self.actuator.output()
    }

    /// Position on a common "7.3 is fully in" scale across rod families.
    pub fn effective_position(&self) -> f64 {
        match self.kind {
            RodKind::Short => ROD_EFFECTIVE_TRAVEL_M - self.actuator.output(),
            _ => self.actuator.output(),
        }
    }

    /// Absorption derived from position on the last update.
    pub fn absorption(&self) -> f64 {
        self.absorption
    }

    pub fn max_absorption(&self) -> f64 {
        match self.kind {
            RodKind::Short => 0.6,
            _ => 1.0,
        }
    }

    pub fn speed_index(&self) -> usize {
        self.speed_index
    }

    /// Push the operator-selected drive speed into the actuator.
    pub fn set_manual_speed(&mut self, speed_index: usize) {
        let idx = speed_index.min(ROD_SPEED_TABLE_M_S.len() - 1);
        self.speed_index = idx;
        self.actuator.set_max_rate(ROD_SPEED_TABLE_M_S[idx]);
    }

    /// Drive toward the fully absorbing extreme.
    pub fn drive_to_inserted(&mut self) {
        match self.kind {
            RodKind::Short => self.actuator.set_input_min(),
            _ => self.actuator.set_input_max(),
        }
    }

    /// Drive toward the fully withdrawn extreme.
    pub fn drive_to_withdrawn(&mut self) {
        match self.kind {
            RodKind::Short => self.actuator.set_input_max(),
            _ => self.actuator.set_input_min(),
        }
    }

    pub fn stop(&mut self) {
        self.actuator.set_stop();
    }

    /// Advance the drive one tick and refresh absorption.
    pub fn update(&mut self, dt: f64) {
        self.actuator.advance(dt);
        self.absorption = absorption_at(self.kind, self.actuator.output());
    }

    pub fn snapshot(&self) -> RodSnapshot {
        RodSnapshot {
            speed_index: self.speed_index,
            current_position: self.actuator.output(),
            target_position: self.actuator.target(),
            auto_mode: self.automatic,
            selected: self.selected,
        }
    }

    pub fn restore(&mut self, snap: &RodSnapshot) {
        self.actuator.force_output_value(snap.current_position);
        self.actuator.set_target(snap.target_position);
        self.speed_index = snap.speed_index.min(ROD_SPEED_TABLE_M_S.len() - 1);
        self.automatic = snap.auto_mode;
        self.selected = snap.selected;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manual_rod() -> ControlRod {
        ControlRod::new(Coordinate::new(22, 28), RodKind::Manual)
    }

    fn short_rod() -> ControlRod {
        ControlRod::new(Coordinate::new(28, 28), RodKind::Short)
    }

    #[test]
    fn test_initial_positions() {
        assert!((manual_rod().position() - 7.4).abs() < 1e-12);
        assert!((short_rod().position() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_max_absorption_by_family() {
        assert!((short_rod().max_absorption() - 0.6).abs() < 1e-15);
        assert!((manual_rod().max_absorption() - 1.0).abs() < 1e-15);
        let auto = ControlRod::new(Coordinate::new(31, 31), RodKind::Automatic);
        assert!((auto.max_absorption() - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_absorption_curve_endpoints() {
        assert!((absorption_at(RodKind::Manual, 7.3) - 1.0).abs() < 1e-12);
        assert!((absorption_at(RodKind::Manual, 8.1) - 1.0).abs() < 1e-12);
        assert!(absorption_at(RodKind::Manual, 0.6).abs() < 1e-6);
        assert!((absorption_at(RodKind::Short, 0.0) - 0.6).abs() < 1e-12);
        assert!((absorption_at(RodKind::Short, 3.0) - 0.6).abs() < 1e-12);
        assert!(absorption_at(RodKind::Short, 7.2).abs() < 1e-12);
        assert!(absorption_at(RodKind::Short, 8.1).abs() < 1e-12);
    }

    #[test]
    fn test_absorption_continuity_at_boundaries() {
        let eps = 1e-9;
        for (kind, boundary) in [
            (RodKind::Manual, 0.6),
            (RodKind::Manual, 7.3),
            (RodKind::Short, 3.0),
            (RodKind::Short, 7.2),
        ] {
            let below = absorption_at(kind, boundary - eps);
            let above = absorption_at(kind, boundary + eps);
            assert!(
                (below - above).abs() < 1e-6,
                "Jump at {boundary} for {kind:?}: {below} vs {above}"
            );
        }
    }

    #[test]
    fn test_dead_zone_raises_absorption_near_upper_stop() {
        // Withdrawing from 0.6 to 0.0 increases absorption.
        assert!(absorption_at(RodKind::Manual, 0.0) > absorption_at(RodKind::Manual, 0.3));
        assert!(absorption_at(RodKind::Manual, 0.3) > absorption_at(RodKind::Manual, 0.6));
        assert!((absorption_at(RodKind::Manual, 0.0) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_effective_position_uniform_scale() {
        let mut rod = short_rod();
        rod.drive_to_inserted();
        for _ in 0..1000 {
            rod.update(0.1);
        }
        // Fully in: position 0, effective 7.3 — same reading as a manual
        // rod parked at its own inserted extreme.
        assert!((rod.position() - 0.0).abs() < 1e-12);
        assert!((rod.effective_position() - 7.3).abs() < 1e-12);
    }

    #[test]
    fn test_update_tracks_drive_and_absorption() {
        let mut rod = manual_rod();
        rod.drive_to_withdrawn();
        let before = rod.absorption();
        for _ in 0..20 {
            rod.update(0.1);
        }
        assert!(rod.position() < 7.4);
        assert!(rod.absorption() < before);
    }

    #[test]
    fn test_manual_speed_table_lookup() {
        let mut rod = manual_rod();
        rod.set_manual_speed(2);
        rod.drive_to_withdrawn();
        rod.update(1.0);
        assert!((rod.position() - (7.4 - 0.3)).abs() < 1e-12);
    }

    #[test]
    fn test_snapshot_restore_roundtrip() {
        let mut rod = manual_rod();
        rod.set_selected(true);
        rod.set_manual_speed(2);
        rod.drive_to_inserted();
        rod.update(0.1);
        let snap = rod.snapshot();

        let mut fresh = manual_rod();
        fresh.restore(&snap);
        assert!((fresh.position() - rod.position()).abs() < 1e-12);
        assert_eq!(fresh.speed_index(), 2);
        assert!(fresh.selected());
        // Restored target keeps the rod moving toward insertion.
        fresh.update(1.0);
        assert!(fresh.position() > rod.position());
    }
}
