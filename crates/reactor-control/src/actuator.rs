// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Setpoint Actuator
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Rate-limited setpoint follower.
//!
//! Translates a target value into a physically realizable, speed-bounded
//! output. Rod drives own one of these each.

/// Contract every position drive must satisfy. The reactor core only ever
/// talks to this trait, never to a concrete drive implementation.
pub trait Actuator {
    /// Current output value.
    fn output(&self) -> f64;

    /// Current target value.
    fn target(&self) -> f64;

    /// Jump output and target to `value` immediately (state restore).
    fn force_output_value(&mut self, value: f64);

    /// Maximum slew rate, in output units per second.
    fn set_max_rate(&mut self, rate: f64);

    fn set_lower_limit(&mut self, value: f64);

    fn set_upper_limit(&mut self, value: f64);

    /// Drive toward the lower limit at the configured rate.
    fn set_input_min(&mut self);

    /// Drive toward the upper limit at the configured rate.
    fn set_input_max(&mut self);

    /// Hold the current output.
    fn set_stop(&mut self);

    /// Retarget to an arbitrary value within the limits.
    fn set_target(&mut self, value: f64);

    /// Integrate one tick of `dt` seconds.
    fn advance(&mut self, dt: f64);
}

/// Straightforward slew-limited follower.
#[derive(Debug, Clone)]
pub struct RateLimitedFollower {
    current: f64,
    target: f64,
    max_rate: f64,
    lower: f64,
    upper: f64,
}

impl RateLimitedFollower {
    pub fn new(initial: f64, lower: f64, upper: f64, max_rate: f64) -> Self {
        let initial = initial.clamp(lower, upper);
        RateLimitedFollower {
            current: initial,
            target: initial,
            max_rate,
            lower,
            upper,
        }
    }

    pub fn max_rate(&self) -> f64 {
        self.max_rate
    }
}

impl Actuator for RateLimitedFollower {
    fn output(&self) -> f64 {
        self.current
    }

    fn target(&self) -> f64 {
        self.target
    }

    fn force_output_value(&mut self, value: f64) {
        let value = value.clamp(self.lower, self.upper);
        self.current = value;
        self.target = value;
    }

    fn set_max_rate(&mut self, rate: f64) {
        self.max_rate = rate.abs();
    }

    fn set_lower_limit(&mut self, value: f64) {
        self.lower = value;
        self.current = self.current.max(self.lower);
        self.target = self.target.max(self.lower);
    }

    fn set_upper_limit(&mut self, value: f64) {
        self.upper = value;
        self.current = self.current.min(self.upper);
        self.target = self.target.min(self.upper);
    }

    fn set_input_min(&mut self) {
        self.target = self.lower;
    }

    fn set_input_max(&mut self) {
        self.target = self.upper;
    }

    fn set_stop(&mut self) {
        self.target = self.current;
    }

    fn set_target(&mut self, value: f64) {
        self.target = value.clamp(self.lower, self.upper);
    }

    fn advance(&mut self, dt: f64) {
        let step = self.max_rate * dt;
        let delta = self.target - self.current;
        if delta.abs() <= step {
            self.current = self.target;
        } else {
            self.current += step.copysign(delta);
        }
    }
}
