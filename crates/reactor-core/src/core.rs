// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Core Orchestrator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Per-tick reactor core orchestration.
//!
//! Owns every rod, fuel element and physics model, applies operator
//! commands, synthesizes the aggregate reactivity signal and publishes
//! telemetry. Single-threaded by contract: the host drains its command
//! queue into `handle_command` and then calls `update` once per tick.

use ndarray::Array2;

use reactor_control::telemetry::{TelemetryBus, TrendRecorder};
use reactor_physics::graphite::GraphiteEffectModel;
use reactor_physics::kinetics::NeutronFluxModel;
use reactor_physics::xenon::XenonModel;
use reactor_types::config::CoreConfig;
use reactor_types::constants::{LATTICE_MAX, LATTICE_MIN, LATTICE_SIZE, ROD_SPEED_TABLE_M_S};
use reactor_types::error::{ReactorError, ReactorResult};
use reactor_types::state::{ChannelType, Coordinate, CoreSnapshot};

use crate::command::CoreCommand;
use crate::fuel::FuelElement;
use crate::lattice::classify;
use crate::rod::ControlRod;

pub const KEY_NEUTRON_FLUX: &str = "Reactor#NeutronFlux";
pub const KEY_NEUTRON_FLUX_LOG: &str = "Reactor#NeutronFluxLog";
pub const KEY_NEUTRON_RATE: &str = "Reactor#NeutronRate";
pub const KEY_AVG_ROD_POS: &str = "Reactor#AvgRodPos";
pub const KEY_ROD_ABSORPTION: &str = "Reactor#RodAbsorption";
pub const KEY_XENON: &str = "Reactor#Xenon";
pub const KEY_THERMAL_POWER: &str = "Reactor#ThermalPower";

/// Telemetry key for one rod's position.
pub fn rod_position_key(identifier: i64) -> String {
    format!("Reactor#RodPosition{identifier}")
}

/// Trend buffer depth, at one sample every Nth tick.
const TREND_CAPACITY: usize = 4096;

/// Scalar feedback the thermal-hydraulic plant hands back each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlantFeedback {
    /// Core temperature, °C-equivalent.
    pub core_temp: f64,
    /// Coolant void fraction, 0..100 scale.
    pub voiding: f64,
}

/// A lattice cell's element, by reference.
#[derive(Debug)]
pub enum CoreElement<'a> {
    Rod(&'a ControlRod),
    Fuel(&'a FuelElement),
}

pub struct ReactorCore {
    config: CoreConfig,

    rods: Vec<ControlRod>,
    fuel: Vec<FuelElement>,
    rod_index: Array2<Option<usize>>,
    fuel_index: Array2<Option<usize>>,

    flux_model: NeutronFluxModel,
    xenon_model: XenonModel,
    graphite_model: GraphiteEffectModel,

    max_absorption: f64,
    avg_rod_position: f64,
    rod_absorption_percent: f64,
    reactivity: f64,
    voiding: f64,
    core_temp: f64,

    rod_speed_index: usize,
    rps_active: bool,
    excursion_reported: bool,

    tick: u64,
    telemetry: TelemetryBus,
    trends: TrendRecorder,
}

impl ReactorCore {
    /// Build the core: scan the lattice once, create one element per
    /// non-void cell and fix the membership tables for the process
    /// lifetime.
    pub fn new(config: CoreConfig) -> Self {
        let mut rods = Vec::new();
        let mut fuel = Vec::new();
        let mut rod_index = Array2::from_elem((LATTICE_SIZE, LATTICE_SIZE), None);
        let mut fuel_index = Array2::from_elem((LATTICE_SIZE, LATTICE_SIZE), None);

        for row in LATTICE_MIN..=LATTICE_MAX {
            for col in LATTICE_MIN..=LATTICE_MAX {
                let cell = (
                    (row - LATTICE_MIN) as usize,
                    (col - LATTICE_MIN) as usize,
                );
                let coordinate = Coordinate::new(row, col);
                match classify(row, col) {
                    ChannelType::Fuel => {
                        fuel_index[cell] = Some(fuel.len());
                        fuel.push(FuelElement::new(coordinate));
                    }
                    channel => {
                        if let Some(kind) = channel.rod_kind() {
                            rod_index[cell] = Some(rods.len());
                            rods.push(ControlRod::new(coordinate, kind));
                        }
                    }
                }
            }
        }

        let max_absorption = rods.iter().map(|r| r.max_absorption()).sum();
        let flux_model = NeutronFluxModel::new(config.kinetics.clone());
        let rps_active = config.rps_active;

        ReactorCore {
            config,
            rods,
            fuel,
            rod_index,
            fuel_index,
            flux_model,
            xenon_model: XenonModel::new(),
            graphite_model: GraphiteEffectModel::new(),
            max_absorption,
            avg_rod_position: 0.0,
            rod_absorption_percent: 0.0,
            reactivity: 0.0,
            voiding: 0.0,
            core_temp: 0.0,
            rod_speed_index: 1,
            rps_active,
            excursion_reported: false,
            tick: 0,
            telemetry: TelemetryBus::new(),
            trends: TrendRecorder::new(TREND_CAPACITY),
        }
    }

    fn cell(coordinate: Coordinate) -> Option<(usize, usize)> {
        if coordinate.in_lattice() {
            Some((
                (coordinate.row - LATTICE_MIN) as usize,
                (coordinate.col - LATTICE_MIN) as usize,
            ))
        } else {
            None
        }
    }

    /// Element at (row, col), `None` for void or out-of-range cells.
    pub fn element_at(&self, row: i32, col: i32) -> Option<CoreElement<'_>> {
        let cell = Self::cell(Coordinate::new(row, col))?;
        if let Some(idx) = self.rod_index[cell] {
            return Some(CoreElement::Rod(&self.rods[idx]));
        }
        self.fuel_index[cell].map(|idx| CoreElement::Fuel(&self.fuel[idx]))
    }

    fn rod_index_by_identifier(&self, identifier: i64) -> Option<usize> {
        let cell = Self::cell(Coordinate::from_identifier(identifier))?;
        self.rod_index[cell]
    }

    /// Apply one operator command. The host drains its queue through
    /// here before the physics step of the same tick.
    pub fn handle_command(&mut self, command: CoreCommand) {
        match command {
            CoreCommand::RodSelect(identifier) => {
                if let Some(idx) = self.rod_index_by_identifier(identifier) {
                    let rod = &mut self.rods[idx];
                    rod.set_selected(!rod.selected());
                    log::debug!(
                        "rod {} selected={}",
                        rod.identifier(),
                        rod.selected()
                    );
                }
            }
            CoreCommand::Az5 => self.shutdown(),
            CoreCommand::RodManualUp(pressed) => {
                for rod in self.rods.iter_mut().filter(|r| r.selected() && !r.automatic()) {
                    if pressed {
                        rod.drive_to_withdrawn();
                    } else {
                        rod.stop();
                    }
                }
            }
            CoreCommand::RodManualDown(pressed) => {
                for rod in self.rods.iter_mut().filter(|r| r.selected() && !r.automatic()) {
                    if pressed {
                        rod.drive_to_inserted();
                    } else {
                        rod.stop();
                    }
                }
            }
            CoreCommand::IncreaseRodSpeed => {
                self.rod_speed_index =
                    (self.rod_speed_index + 1).min(ROD_SPEED_TABLE_M_S.len() - 1);
            }
            CoreCommand::DecreaseRodSpeed => {
                self.rod_speed_index = self.rod_speed_index.saturating_sub(1).max(1);
            }
            CoreCommand::RodStop => {
                let any_selected = self.rods.iter().any(|r| r.selected());
                for rod in &mut self.rods {
                    if (any_selected && rod.selected()) || (!any_selected && !rod.automatic()) {
                        rod.stop();
                    }
                }
            }
            CoreCommand::RodSelectAllManual => self.select_rods(|rod| !rod.automatic()),
            CoreCommand::RodSelectAllAutomatic => self.select_rods(|rod| rod.automatic()),
            CoreCommand::RodSelectNone => self.select_rods(|_| false),
        }
    }

    fn select_rods(&mut self, want: impl Fn(&ControlRod) -> bool) {
        for rod in &mut self.rods {
            let target = want(rod);
            if rod.selected() != target {
                rod.set_selected(target);
                log::debug!("rod {} selected={}", rod.identifier(), target);
            }
        }
    }

    /// Emergency protection (AZ5): fastest manual speed, every rod driven
    /// to its fully absorbing extreme.
    pub fn shutdown(&mut self) {
        log::info!("AZ5: driving all rods to the inserted extreme");
        self.rod_speed_index = ROD_SPEED_TABLE_M_S.len() - 1;
        for rod in &mut self.rods {
            rod.drive_to_inserted();
        }
    }

    /// Automatic protection trip. Gated on the RPS enable flag.
    pub fn trigger_auto_shutdown(&mut self) {
        if self.rps_active {
            self.shutdown();
        }
    }

    /// Advance one tick. Host-owned setpoint followers have already been
    /// advanced; plant feedback is this tick's thermal-hydraulic result.
    pub fn update(&mut self, feedback: PlantFeedback) {
        let dt = self.config.step_time_s;
        self.core_temp = feedback.core_temp;
        self.voiding = feedback.voiding;

        // Manually driven rods take the operator-selected speed.
        for rod in self.rods.iter_mut().filter(|r| r.selected() && !r.automatic()) {
            rod.set_manual_speed(self.rod_speed_index);
        }

        let mut total_absorption = 0.0;
        let mut position_sum = 0.0;
        for rod in &mut self.rods {
            rod.update(dt);
            total_absorption += rod.absorption();
            position_sum += rod.effective_position();
        }
        for rod in &self.rods {
            self.telemetry
                .publish(&rod_position_key(rod.identifier()), rod.position());
        }

        self.avg_rod_position = position_sum / self.rods.len() as f64;
        self.rod_absorption_percent = total_absorption / self.max_absorption * 100.0;

        // Aggregate reactivity: xenon poisoning and core temperature pull
        // down, coolant voiding pushes up.
        self.reactivity = 65.0 - self.xenon_model.xenon() / 200.0 * 60.0
            - (self.core_temp / 30.0).min(15.0)
            + self.voiding / 20.0 * 5.0;

        self.flux_model.set_absorber_rods(self.rod_absorption_percent);
        self.flux_model.set_reactivity_input(self.reactivity);
        self.flux_model.step(dt);
        if self.flux_model.prompt_excursion() && !self.excursion_reported {
            self.excursion_reported = true;
            log::warn!("prompt excursion latched; core outputs frozen");
        }

        self.xenon_model.set_flux(self.flux_model.flux());
        if self.config.xenon_coupling {
            self.xenon_model.step(dt);
        }

        self.telemetry.publish(KEY_NEUTRON_FLUX, self.flux_model.flux());
        self.telemetry
            .publish(KEY_NEUTRON_FLUX_LOG, self.flux_model.flux_log());
        self.telemetry
            .publish(KEY_NEUTRON_RATE, self.flux_model.neutron_rate());
        self.telemetry.publish(KEY_AVG_ROD_POS, self.avg_rod_position);
        self.telemetry
            .publish(KEY_ROD_ABSORPTION, self.rod_absorption_percent);
        self.telemetry.publish(KEY_XENON, self.xenon_model.xenon());
        self.telemetry
            .publish(KEY_THERMAL_POWER, self.flux_model.thermal_power());

        self.tick += 1;
        if self.tick % self.config.trend_interval_ticks == 0 {
            self.trends.record(
                self.flux_model.flux(),
                self.flux_model.rate_filtered(),
                self.xenon_model.xenon(),
            );
        }
    }

    /// Everything the serialization layer persists.
    pub fn snapshot(&self) -> CoreSnapshot {
        CoreSnapshot {
            flux_state: self.flux_model.state_vector(),
            xenon_state: [self.xenon_model.iodine(), self.xenon_model.xenon()],
            graphite_state: [self.graphite_model.hidden(), self.graphite_model.graphite()],
            rods: self.rods.iter().map(|r| r.snapshot()).collect(),
            rps_active: self.rps_active,
        }
    }

    /// Restore a snapshot taken from a core with the same lattice.
    pub fn restore(&mut self, snap: &CoreSnapshot) -> ReactorResult<()> {
        if snap.rods.len() != self.rods.len() {
            return Err(ReactorError::SnapshotMismatch(format!(
                "rod list length {} does not match core ({})",
                snap.rods.len(),
                self.rods.len()
            )));
        }
        self.flux_model.set_state_vector(&snap.flux_state);
        self.xenon_model
            .set_states(snap.xenon_state[0], snap.xenon_state[1]);
        self.graphite_model
            .set_states(snap.graphite_state[0], snap.graphite_state[1]);
        for (rod, rod_snap) in self.rods.iter_mut().zip(snap.rods.iter()) {
            rod.restore(rod_snap);
        }
        self.rps_active = snap.rps_active;
        Ok(())
    }

    pub fn rods(&self) -> &[ControlRod] {
        &self.rods
    }

    pub fn fuel(&self) -> &[FuelElement] {
        &self.fuel
    }

    pub fn flux(&self) -> f64 {
        self.flux_model.flux()
    }

    pub fn flux_log(&self) -> f64 {
        self.flux_model.flux_log()
    }

    pub fn thermal_power(&self) -> f64 {
        self.flux_model.thermal_power()
    }

    pub fn xenon(&self) -> f64 {
        self.xenon_model.xenon()
    }

    pub fn reactivity(&self) -> f64 {
        self.reactivity
    }

    pub fn avg_rod_position(&self) -> f64 {
        self.avg_rod_position
    }

    pub fn rod_absorption_percent(&self) -> f64 {
        self.rod_absorption_percent
    }

    pub fn max_absorption(&self) -> f64 {
        self.max_absorption
    }

    pub fn rod_speed_index(&self) -> usize {
        self.rod_speed_index
    }

    pub fn prompt_excursion(&self) -> bool {
        self.flux_model.prompt_excursion()
    }

    pub fn is_reactor_intact(&self) -> bool {
        self.flux_model.is_reactor_intact()
    }

    pub fn rps_active(&self) -> bool {
        self.rps_active
    }

    pub fn set_rps_active(&mut self, active: bool) {
        self.rps_active = active;
    }

    pub fn telemetry(&self) -> &TelemetryBus {
        &self.telemetry
    }

    pub fn trends(&self) -> &TrendRecorder {
        &self.trends
    }
}
