// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::error::ReactorResult;

/// Point-kinetics model parameters. Every field has the standard trainer
/// default; `beta` is the only one mutated at runtime (fuel ageing
/// scenarios lower the delayed-neutron fraction).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KineticsParams {
    /// Delayed-neutron fraction.
    #[serde(default = "default_beta")]
    pub beta: f64,
    /// Criticality value returned while the prompt excursion is latched.
    #[serde(default = "default_prompt_excursion_rate")]
    pub prompt_excursion_rate: f64,
    /// Subcritical decay slope multiplier.
    #[serde(default = "default_decay_factor")]
    pub decay_factor: f64,
    /// Fraction of beta at which the subcritical decay branch engages.
    #[serde(default = "default_neg_beta_factor")]
    pub neg_beta_factor: f64,
    /// Reactivity per percentage point of input imbalance.
    #[serde(default = "default_k_reactivity")]
    pub k_reactivity: f64,
    /// Flux integrator gain.
    #[serde(default = "default_k_integral")]
    pub k_integral: f64,
    /// Rod-derivative coupling gain.
    #[serde(default = "default_k_diff_rods")]
    pub k_diff_rods: f64,
    /// Rod-derivative filter time constant [s].
    #[serde(default = "default_t_diff_rods")]
    pub t_diff_rods: f64,
    /// Prompt fraction of applied reactivity.
    #[serde(default = "default_p_instant")]
    pub p_instant: f64,
    /// Delayed-reactivity time constant [s].
    #[serde(default = "default_t_delayed_reactivity")]
    pub t_delayed_reactivity: f64,
    /// Decay-heat fraction of fission power.
    #[serde(default = "default_p_decay")]
    pub p_decay: f64,
    /// Decay-heat delay time constant [s].
    #[serde(default = "default_t_decay")]
    pub t_decay: f64,
    /// Rate display filter time constant [s].
    #[serde(default = "default_t_rate_filter")]
    pub t_rate_filter: f64,
    /// Void/power positive-feedback shaping coefficient.
    #[serde(default = "default_a_positive_feedback")]
    pub a_positive_feedback: f64,
}

fn default_beta() -> f64 {
    0.005
}
fn default_prompt_excursion_rate() -> f64 {
    0.8
}
fn default_decay_factor() -> f64 {
    200.0
}
fn default_neg_beta_factor() -> f64 {
    0.7
}
fn default_k_reactivity() -> f64 {
    0.0005
}
fn default_k_integral() -> f64 {
    480.0
}
fn default_k_diff_rods() -> f64 {
    0.9
}
fn default_t_diff_rods() -> f64 {
    5.0
}
fn default_p_instant() -> f64 {
    0.6
}
fn default_t_delayed_reactivity() -> f64 {
    16.0
}
fn default_p_decay() -> f64 {
    0.062
}
fn default_t_decay() -> f64 {
    100.0
}
fn default_t_rate_filter() -> f64 {
    1.8
}
fn default_a_positive_feedback() -> f64 {
    0.4
}

impl Default for KineticsParams {
    fn default() -> Self {
        KineticsParams {
            beta: default_beta(),
            prompt_excursion_rate: default_prompt_excursion_rate(),
            decay_factor: default_decay_factor(),
            neg_beta_factor: default_neg_beta_factor(),
            k_reactivity: default_k_reactivity(),
            k_integral: default_k_integral(),
            k_diff_rods: default_k_diff_rods(),
            t_diff_rods: default_t_diff_rods(),
            p_instant: default_p_instant(),
            t_delayed_reactivity: default_t_delayed_reactivity(),
            p_decay: default_p_decay(),
            t_decay: default_t_decay(),
            t_rate_filter: default_t_rate_filter(),
            a_positive_feedback: default_a_positive_feedback(),
        }
    }
}

/// Top-level core configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Physics step time [s].
    #[serde(default = "default_step_time_s")]
    pub step_time_s: f64,
    /// Trend buffer sampling period, in ticks.
    #[serde(default = "default_trend_interval_ticks")]
    pub trend_interval_ticks: u64,
    /// When true, the xenon model is advanced every tick. When false the
    /// core only feeds its input, reproducing the frozen-xenon behavior of
    /// older trainer builds.
    #[serde(default = "default_xenon_coupling")]
    pub xenon_coupling: bool,
    /// Reactor protection system enable gate.
    #[serde(default = "default_rps_active")]
    pub rps_active: bool,
    #[serde(default)]
    pub kinetics: KineticsParams,
}

fn default_step_time_s() -> f64 {
    0.1
}
fn default_trend_interval_ticks() -> u64 {
    5
}
fn default_xenon_coupling() -> bool {
    true
}
fn default_rps_active() -> bool {
    true
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfig {
            step_time_s: default_step_time_s(),
            trend_interval_ticks: default_trend_interval_ticks(),
            xenon_coupling: default_xenon_coupling(),
            rps_active: default_rps_active(),
            kinetics: KineticsParams::default(),
        }
    }
}

impl CoreConfig {
    /// Load from a JSON scenario file.
    pub fn from_file(path: &str) -> ReactorResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = CoreConfig::default();
        assert!((cfg.step_time_s - 0.1).abs() < 1e-12);
        assert_eq!(cfg.trend_interval_ticks, 5);
        assert!(cfg.xenon_coupling);
        assert!((cfg.kinetics.beta - 0.005).abs() < 1e-12);
        assert!((cfg.kinetics.k_integral - 480.0).abs() < 1e-12);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let cfg: CoreConfig =
            serde_json::from_str(r#"{"kinetics": {"beta": 0.004}}"#).unwrap();
        assert!((cfg.kinetics.beta - 0.004).abs() < 1e-12);
        assert!((cfg.kinetics.t_decay - 100.0).abs() < 1e-12);
        assert!((cfg.step_time_s - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = CoreConfig::default();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2: CoreConfig = serde_json::from_str(&json).unwrap();
        assert!((cfg.kinetics.prompt_excursion_rate - cfg2.kinetics.prompt_excursion_rate).abs()
            < 1e-12);
        assert_eq!(cfg.trend_interval_ticks, cfg2.trend_interval_ticks);
    }
}
