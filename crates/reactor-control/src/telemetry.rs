// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Telemetry Buffers
// © 1998–2026 Miroslav Šotek. All rights reserved.
// ─────────────────────────────────────────────────────────────────────
//! Fixed-capacity trend channels and the named-scalar bus the host polls
//! after each tick.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A fixed-size circular buffer for a single trend channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CircularChannel {
    data: Vec<f64>,
    capacity: usize,
    head: usize,
    count: usize,
}

impl CircularChannel {
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0.0; capacity],
            capacity,
            head: 0,
            count: 0,
        }
    }

    pub fn push(&mut self, value: f64) {
        self.data[self.head] = value;
        self.head = (self.head + 1) % self.capacity;
        if self.count < self.capacity {
            self.count += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the data in chronological order (oldest to newest).
    pub fn get_view(&self) -> Vec<f64> {
        let mut result = Vec::with_capacity(self.count);
        if self.count < self.capacity {
            result.extend_from_slice(&self.data[0..self.count]);
        } else {
            result.extend_from_slice(&self.data[self.head..self.capacity]);
            result.extend_from_slice(&self.data[0..self.head]);
        }
        result
    }

    pub fn latest(&self) -> f64 {
        if self.count == 0 {
            return 0.0;
        }
        let idx = if self.head == 0 {
            self.capacity - 1
        } else {
            self.head - 1
        };
        self.data[idx]
    }

    pub fn clear(&mut self) {
        self.head = 0;
        self.count = 0;
    }
}

/// Trend channels sampled every Nth tick: flux, filtered rate, xenon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendRecorder {
    pub flux: CircularChannel,
    pub rate: CircularChannel,
    pub xenon: CircularChannel,
}

impl TrendRecorder {
    pub fn new(capacity: usize) -> Self {
        Self {
            flux: CircularChannel::new(capacity),
            rate: CircularChannel::new(capacity),
            xenon: CircularChannel::new(capacity),
        }
    }

    pub fn record(&mut self, flux: f64, rate: f64, xenon: f64) {
        self.flux.push(flux);
        self.rate.push(rate);
        self.xenon.push(xenon);
    }

    pub fn clear(&mut self) {
        self.flux.clear();
        self.rate.clear();
        self.xenon.clear();
    }
}

/// Latest published value per telemetry key. BTreeMap keeps host-side
/// iteration order stable across ticks.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TelemetryBus {
    values: BTreeMap<String, f64>,
}

impl TelemetryBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
