// ─────────────────────────────────────────────────────────────────────
// SCPN Reactor Core — Reactor Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Channel-reactor core: lattice classification, rod and fuel bookkeeping,
//! the per-tick orchestrator, operator command handling and scram logic.

pub mod command;
pub mod core;
pub mod fuel;
pub mod indicator;
pub mod lattice;
pub mod rod;
