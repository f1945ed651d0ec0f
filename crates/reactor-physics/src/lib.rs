// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Reactor Physics
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Lumped state-space models of the channel reactor: point kinetics with
//! the prompt-excursion latch, xenon-135 poisoning, graphite long-term
//! effect.

pub mod graphite;
pub mod kinetics;
pub mod xenon;
