// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Fission Deck
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Engine input decks for the five tutorial cases.
//!
//! - `materials`, `settings`, `tallies`: declarative model parts
//! - `cases`: one builder per case
//! - `model`, `xml`: validation and rendering of the input files
//! - `engine`, `workspace`, `pipeline`: directories, subprocess, outputs

pub mod cases;
pub mod engine;
pub mod materials;
pub mod model;
pub mod pipeline;
pub mod settings;
pub mod tallies;
pub mod workspace;
pub mod xml;
