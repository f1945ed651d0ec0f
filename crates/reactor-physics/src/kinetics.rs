// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Point Kinetics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Nonlinear point-kinetics neutron flux model.
//!
//! Six forward-Euler states, three inputs, and a one-way prompt-excursion
//! latch. Once dynamic reactivity crosses the delayed-neutron fraction the
//! model enters the runaway mode and never leaves it.

use reactor_types::config::KineticsParams;
use reactor_types::error::{ReactorError, ReactorResult};

/// Flux state floor. Sitting on it marks the tick as zero-power.
const FLUX_MIN: f64 = 1e-4;

/// Flux state ceiling.
const FLUX_MAX: f64 = 1200.0;

/// Display cap on the flux output.
const FLUX_DISPLAY_MAX: f64 = 937.5;

/// Cap on each thermal power branch output.
const THERMAL_POWER_MAX: f64 = 15000.0;

/// Flux at which the core is no longer intact.
const INTACT_FLUX_LIMIT: f64 = 500.0;

/// Decay-heat source scaling into the first delay stage.
const DECAY_HEAT_SCALE: f64 = 15.76;

/// Fission-to-thermal gain per branch.
const THERMAL_GAIN: f64 = 16.0;

/// Number of externally addressable state-vector slots.
pub const STATE_LEN: usize = 9;

/// Default integration step [s].
pub const DEFAULT_STEP_TIME_S: f64 = 0.1;

/// Point-kinetics state machine.
///
/// State slots by index (serialization contract): 0 flux, 1 delayed
/// criticality, 2 rod-derivative helper, 3 delayed thermal power, 4 first
/// delay stage, 5 rate-filter helper, 6 absorber-rods input, 7 reactivity
/// input, 8 skew input.
#[derive(Debug, Clone)]
pub struct NeutronFluxModel {
    params: KineticsParams,

    x_flux: f64,
    x_delayed_crit: f64,
    x_rods_helper: f64,
    x_delayed_thermal: f64,
    x_first_delay: f64,
    x_rate_helper: f64,

    u_absorber_rods: f64,
    u_reactivity: f64,
    u_skew: f64,

    prompt_excursion: bool,
    zero_power: bool,

    y_flux: f64,
    y_neutron_rate: f64,
    y_rate_filtered: f64,
    y_flux_log: f64,
    y_reactivity: f64,
    y_k: f64,
    y_thermal_power_1: f64,
    y_thermal_power_2: f64,
}

impl NeutronFluxModel {
    pub fn new(params: KineticsParams) -> Self {
        NeutronFluxModel {
            params,
            x_flux: FLUX_MIN,
            x_delayed_crit: 0.0,
            x_rods_helper: 0.0,
            x_delayed_thermal: 0.0,
            x_first_delay: 0.0,
            x_rate_helper: 0.0,
            u_absorber_rods: 0.0,
            u_reactivity: 0.0,
            u_skew: 0.0,
            prompt_excursion: false,
            zero_power: true,
            y_flux: FLUX_MIN,
            y_neutron_rate: 0.0,
            y_rate_filtered: 0.0,
            y_flux_log: (FLUX_MIN / 100.0).log10(),
            y_reactivity: 0.0,
            y_k: 1.0,
            y_thermal_power_1: 0.0,
            y_thermal_power_2: 0.0,
        }
    }

    /// Absorber rod input, percent of total absorption (0..100).
    pub fn set_absorber_rods(&mut self, percent: f64) {
        self.u_absorber_rods = percent;
    }

    /// Aggregate reactivity source input (0..100 scale).
    pub fn set_reactivity_input(&mut self, value: f64) {
        self.u_reactivity = value;
    }

    /// Axial skew input, near zero in normal operation.
    pub fn set_skew(&mut self, value: f64) {
        self.u_skew = value;
    }

    /// Delayed-neutron fraction, mutable for fuel-ageing scenarios.
    pub fn set_beta(&mut self, beta: f64) {
        self.params.beta = beta;
    }

    pub fn beta(&self) -> f64 {
        self.params.beta
    }

    /// Criticality response to dynamic reactivity `rho`.
    ///
    /// Latches the prompt excursion the first time `rho` exceeds beta.
    /// The latch is one-way: every later call returns the excursion rate
    /// no matter the argument.
    pub fn criticality_function(&mut self, rho: f64) -> f64 {
        let p = &self.params;
        if self.prompt_excursion {
            return p.prompt_excursion_rate;
        }
        let neg_threshold = -p.beta * p.neg_beta_factor;
        if rho < neg_threshold {
            p.decay_factor * (rho - neg_threshold) + neg_threshold
        } else if rho > p.beta {
            self.prompt_excursion = true;
            self.params.prompt_excursion_rate
        } else {
            rho
        }
    }

    /// Advance one tick of `dt` seconds.
    ///
    /// All derivatives are taken from the pre-update state; the latch may
    /// flip inside `criticality_function` and then applies to everything
    /// downstream of it in the same tick.
    pub fn step(&mut self, dt: f64) {
        let p = self.params.clone();

        let reactivity = (self.u_reactivity - self.u_absorber_rods) * p.k_reactivity;
        let rod_diff_term =
            (p.k_reactivity * p.k_diff_rods * (self.u_absorber_rods - self.x_rods_helper)).min(0.0);
        let dyn_reactivity = self.x_delayed_crit + reactivity * p.p_instant - rod_diff_term;

        let crit = self.criticality_function(dyn_reactivity);
        let pos_feedback = if self.prompt_excursion {
            1.0
        } else {
            1.0 - (-p.a_positive_feedback * self.x_flux).exp()
        };

        let d_flux = p.k_integral * pos_feedback * crit;
        let d_delayed_crit = reactivity * (1.0 - p.p_instant) / p.t_delayed_reactivity
            - self.x_delayed_crit / p.t_delayed_reactivity;
        let d_rods_helper = (self.u_absorber_rods - self.x_rods_helper) / p.t_diff_rods;
        let d_first_delay =
            (self.x_flux * p.p_decay * DECAY_HEAT_SCALE - self.x_first_delay) / p.t_decay;
        let d_delayed_thermal = (self.x_first_delay - self.x_delayed_thermal) / p.t_decay;
        let d_rate_helper = (d_flux - self.x_rate_helper) / p.t_rate_filter;

        let flux_raw = self.x_flux + d_flux * dt;
        self.zero_power = flux_raw <= FLUX_MIN;
        self.x_flux = flux_raw.clamp(FLUX_MIN, FLUX_MAX);
        self.x_delayed_crit += d_delayed_crit * dt;
        self.x_rods_helper += d_rods_helper * dt;
        if !self.prompt_excursion {
            self.x_delayed_thermal += d_delayed_thermal * dt;
        }
        self.x_first_delay += d_first_delay * dt;
        self.x_rate_helper += d_rate_helper * dt;

        self.y_flux = self.x_flux.min(FLUX_DISPLAY_MAX);
        self.y_neutron_rate = if self.zero_power { 0.0 } else { d_flux * 10.0 };
        self.y_rate_filtered = if self.zero_power {
            0.0
        } else {
            self.x_rate_helper * 10.0
        };
        self.y_flux_log = (self.x_flux / 100.0).log10();
        if !self.prompt_excursion {
            self.y_reactivity = reactivity;
            self.y_k = -1.0 / (reactivity - 1.0);
        }
        let thermal = (self.x_flux * (1.0 - p.p_decay) * THERMAL_GAIN * (self.u_skew + 1.0)
            + self.x_delayed_thermal)
            .min(THERMAL_POWER_MAX);
        self.y_thermal_power_1 = thermal;
        self.y_thermal_power_2 = thermal;
    }

    pub fn prompt_excursion(&self) -> bool {
        self.prompt_excursion
    }

    /// False once the flux has crossed the structural limit.
    pub fn is_reactor_intact(&self) -> bool {
        self.x_flux < INTACT_FLUX_LIMIT
    }

    pub fn flux(&self) -> f64 {
        self.y_flux
    }

    pub fn flux_log(&self) -> f64 {
        self.y_flux_log
    }

    pub fn neutron_rate(&self) -> f64 {
        self.y_neutron_rate
    }

    pub fn rate_filtered(&self) -> f64 {
        self.y_rate_filtered
    }

    pub fn reactivity(&self) -> f64 {
        self.y_reactivity
    }

    /// Effective multiplication factor display value.
    pub fn k_effective(&self) -> f64 {
        self.y_k
    }

    pub fn thermal_power(&self) -> f64 {
        self.y_thermal_power_1 + self.y_thermal_power_2
    }

    /// Read state-vector slot 0..=8.
    pub fn state(&self, index: usize) -> ReactorResult<f64> {
        match index {
            0 => Ok(self.x_flux),
            1 => Ok(self.x_delayed_crit),
            2 => Ok(self.x_rods_helper),
            3 => Ok(self.x_delayed_thermal),
            4 => Ok(self.x_first_delay),
            5 => Ok(self.x_rate_helper),
            6 => Ok(self.u_absorber_rods),
            7 => Ok(self.u_reactivity),
            8 => Ok(self.u_skew),
            _ => Err(ReactorError::InvalidStateIndex {
                index,
                len: STATE_LEN,
            }),
        }
    }

    /// Full state vector in slot order, for snapshotting.
    pub fn state_vector(&self) -> [f64; STATE_LEN] {
        [
            self.x_flux,
            self.x_delayed_crit,
            self.x_rods_helper,
            self.x_delayed_thermal,
            self.x_first_delay,
            self.x_rate_helper,
            self.u_absorber_rods,
            self.u_reactivity,
            self.u_skew,
        ]
    }

    /// Restore the full state vector. Refreshes the flux displays so a
    /// restored save reads correctly before the next tick.
    pub fn set_state_vector(&mut self, v: &[f64; STATE_LEN]) {
        self.x_flux = v[0];
        self.y_flux = v[0].min(FLUX_DISPLAY_MAX);
        self.y_flux_log = (v[0] / 100.0).log10();
        self.x_delayed_crit = v[1];
        self.x_rods_helper = v[2];
        self.x_delayed_thermal = v[3];
        self.x_first_delay = v[4];
        self.x_rate_helper = v[5];
        self.u_absorber_rods = v[6];
        self.u_reactivity = v[7];
        self.u_skew = v[8];
    }

    /// Write state-vector slot 0..=8. Slot 0 also refreshes the flux
    /// output so a restored save displays correctly before the next tick.
    pub fn set_state(&mut self, index: usize, value: f64) -> ReactorResult<()> {
        match index {
            0 => {
                self.x_flux = value;
                self.y_flux = value.min(FLUX_DISPLAY_MAX);
            }
            1 => self.x_delayed_crit = value,
            2 => self.x_rods_helper = value,
            3 => self.x_delayed_thermal = value,
            4 => self.x_first_delay = value,
            5 => self.x_rate_helper = value,
            6 => self.u_absorber_rods = value,
            7 => self.u_reactivity = value,
            8 => self.u_skew = value,
            _ => {
                return Err(ReactorError::InvalidStateIndex {
                    index,
                    len: STATE_LEN,
                })
            }
        }
        Ok(())
    }
}

impl Default for NeutronFluxModel {
    fn default() -> Self {
        Self::new(KineticsParams::default())
    }
}
