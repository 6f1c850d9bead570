// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Tutorial Cases
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! The five progressive models, from an infinite fuel medium to a full core.

mod assembly;
mod finite_pincell;
mod infinite_medium;
mod infinite_pincell;
mod reactor_core;

use fission_types::config::{CaseConfig, CaseKind};
use fission_types::error::FissionResult;

use crate::materials::MaterialLibrary;
use crate::model::Model;

/// Build the model selected by `cfg.case`.
pub fn build(cfg: &CaseConfig) -> FissionResult<Model> {
    cfg.validate()?;
    let lib = MaterialLibrary::standard()?;
    let model = match cfg.case {
        CaseKind::InfiniteMedium => infinite_medium::build(cfg, &lib)?,
        CaseKind::InfinitePincell => infinite_pincell::build(cfg, &lib)?,
        CaseKind::FinitePincell => finite_pincell::build(cfg, &lib)?,
        CaseKind::Assembly => assembly::build(cfg, &lib)?,
        CaseKind::Core => reactor_core::build(cfg, &lib)?,
    };
    log::info!(
        "built {} model: {} cells, {} surfaces, {} tallies",
        cfg.case.slug(),
        model.geometry.cells.len(),
        model.geometry.surfaces.len(),
        model.tallies.tallies.len()
    );
    Ok(model)
}
