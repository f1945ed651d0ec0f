// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Graphite Effect
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Long-term graphite hidden-effect model.
//!
//! Two Euler states: a hidden accumulator charged by mid-band flux and an
//! output state that surfaces the accumulated effect at low flux. Not
//! driven by the production tick loop; owned and persisted so the
//! integration point can be decided later without a save-format change.

/// Hidden accumulator time constant [s].
const T_GRAPHITE: f64 = 600.0;

/// Output stage time constant [s].
const T_OUT: f64 = 20.0;

/// Flux window feeding the hidden state: zero up to 20, ramp to full
/// over (20, 30], flat to 60, ramp back to zero over (60, 70].
fn flux_filter(flux: f64) -> f64 {
    if flux <= 20.0 || flux > 70.0 {
        0.0
    } else if flux <= 30.0 {
        (flux - 20.0) * 10.0
    } else if flux <= 60.0 {
        100.0
    } else {
        (70.0 - flux) * 10.0
    }
}

/// Self-feedback weighting on the hidden state.
fn feedback_weighting(flux: f64) -> f64 {
    if flux <= 1.0 {
        1.0
    } else if flux <= 20.0 {
        0.0
    } else if flux < 40.0 {
        (flux - 20.0) / 20.0
    } else {
        1.0
    }
}

/// How much of the hidden state reaches the output.
fn output_weighting(flux: f64) -> f64 {
    if flux <= 15.0 {
        1.0
    } else if flux < 64.0 {
        1.0 - (flux - 15.0) / 49.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct GraphiteEffectModel {
    x_hidden: f64,
    x_graphite: f64,
    u_flux: f64,
}

impl GraphiteEffectModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Neutron flux input, 0..100 scale.
    pub fn set_flux(&mut self, flux: f64) {
        self.u_flux = flux;
    }

    /// Advance one tick of `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        let d_hidden = (flux_filter(self.u_flux) - feedback_weighting(self.u_flux) * self.x_hidden)
            / T_GRAPHITE;
        let d_graphite =
            (output_weighting(self.u_flux) * self.x_hidden - self.x_graphite) / T_OUT;

        self.x_hidden += d_hidden * dt;
        self.x_graphite += d_graphite * dt;
    }

    pub fn hidden(&self) -> f64 {
        self.x_hidden
    }

    pub fn graphite(&self) -> f64 {
        self.x_graphite
    }

    /// Direct state write for restores.
    pub fn set_states(&mut self, hidden: f64, graphite: f64) {
        self.x_hidden = hidden;
        self.x_graphite = graphite;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 0.1;

    #[test]
    fn test_flux_filter_shape() {
        assert_eq!(flux_filter(0.0), 0.0);
        assert_eq!(flux_filter(20.0), 0.0);
        assert!((flux_filter(25.0) - 50.0).abs() < 1e-12);
        assert!((flux_filter(30.0) - 100.0).abs() < 1e-12);
        assert!((flux_filter(45.0) - 100.0).abs() < 1e-12);
        assert!((flux_filter(60.0) - 100.0).abs() < 1e-12);
        assert!((flux_filter(65.0) - 50.0).abs() < 1e-12);
        assert!((flux_filter(70.0) - 0.0).abs() < 1e-12);
        assert_eq!(flux_filter(80.0), 0.0);
    }

    #[test]
    fn test_feedback_weighting_shape() {
        assert_eq!(feedback_weighting(0.5), 1.0);
        assert_eq!(feedback_weighting(1.0), 1.0);
        assert_eq!(feedback_weighting(10.0), 0.0);
        assert_eq!(feedback_weighting(20.0), 0.0);
        assert!((feedback_weighting(30.0) - 0.5).abs() < 1e-12);
        assert_eq!(feedback_weighting(40.0), 1.0);
        assert_eq!(feedback_weighting(90.0), 1.0);
    }

    #[test]
    fn test_output_weighting_shape() {
        assert_eq!(output_weighting(0.0), 1.0);
        assert_eq!(output_weighting(15.0), 1.0);
        assert!((output_weighting(39.5) - 0.5).abs() < 1e-12);
        assert_eq!(output_weighting(64.0), 0.0);
        assert_eq!(output_weighting(100.0), 0.0);
    }

    #[test]
    fn test_hidden_charges_in_band() {
        let mut model = GraphiteEffectModel::new();
        model.set_flux(50.0);
        for _ in 0..10_000 {
            model.step(DT);
        }
        assert!(
            model.hidden() > 10.0,
            "Mid-band flux should charge the hidden state: {}",
            model.hidden()
        );
    }

    #[test]
    fn test_effect_surfaces_at_low_flux() {
        let mut model = GraphiteEffectModel::new();
        model.set_flux(50.0);
        for _ in 0..10_000 {
            model.step(DT);
        }
        let charged = model.hidden();
        // Drop out of the band: the output stage pulls toward the full
        // hidden value (output weighting is 1 below 15).
        model.set_flux(5.0);
        for _ in 0..2_000 {
            model.step(DT);
        }
        assert!(
            model.graphite() > charged * 0.5,
            "Output should surface the hidden effect: {} vs hidden {}",
            model.graphite(),
            charged
        );
    }

    #[test]
    fn test_state_restore() {
        let mut model = GraphiteEffectModel::new();
        model.set_states(12.0, 3.0);
        assert!((model.hidden() - 12.0).abs() < 1e-12);
        assert!((model.graphite() - 3.0).abs() < 1e-12);
    }
}
