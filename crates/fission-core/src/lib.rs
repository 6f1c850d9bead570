// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Fission Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Core layout synthesis and the pin → assembly → core hierarchy.
//!
//! - `layout`: circular-footprint selection on a square assembly grid
//! - `pin`, `assembly`, `core_lattice`, `vessel`: the nesting levels
//! - `hierarchy`: composition of the levels and lowering to CSG

pub mod assembly;
pub mod core_lattice;
pub mod hierarchy;
pub mod layout;
pub mod pin;
pub mod vessel;
