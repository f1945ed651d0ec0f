// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Xenon Poisoning
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Iodine-135 / xenon-135 poisoning model.
//!
//! Two Euler states driven by neutron flux on the 0..100 scale. Xenon
//! builds from the iodine inventory and burns off proportionally to flux,
//! which is what produces the post-shutdown xenon peak.

/// Iodine production/decay time constant [s].
const T_IODINE: f64 = 300.0;

/// Xenon decay time constant [s].
const T_XENON: f64 = T_IODINE * 1.4;

/// Xenon burn-off time constant [s] at full flux.
const T_BURN: f64 = T_XENON * 0.2;

#[derive(Debug, Clone, Default)]
pub struct XenonModel {
    x_iodine: f64,
    x_xenon: f64,
    u_flux: f64,
}

impl XenonModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Neutron flux input, 0..100 scale.
    pub fn set_flux(&mut self, flux: f64) {
        self.u_flux = flux;
    }

    /// Advance one tick of `dt` seconds.
    pub fn step(&mut self, dt: f64) {
        let d_iodine = (self.u_flux - self.x_iodine) / T_IODINE;
        let d_xenon = self.x_iodine * (1.0 / T_XENON + 1.0 / T_BURN)
            - self.x_xenon / T_XENON
            - self.x_xenon / T_BURN * self.u_flux / 100.0;

        self.x_iodine += d_iodine * dt;
        self.x_xenon += d_xenon * dt;
    }

    pub fn iodine(&self) -> f64 {
        self.x_iodine
    }

    pub fn xenon(&self) -> f64 {
        self.x_xenon
    }

    /// Direct state write for restores.
    pub fn set_states(&mut self, iodine: f64, xenon: f64) {
        self.x_iodine = iodine;
        self.x_xenon = xenon;
    }
}
