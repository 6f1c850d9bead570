// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Case 5: Reactor Core
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Circular core of assemblies inside a steel barrel, surrounded by air.

use fission_core::hierarchy::{compose, CoreSpec};
use fission_core::layout::synthesize;
use fission_types::config::{CaseConfig, CaseKind};
use fission_types::error::FissionResult;

use crate::materials::{MaterialLibrary, AIR, FUEL, STEEL, WATER, ZIRC};
use crate::model::Model;
use crate::settings::{Settings, Source};
use crate::tallies::{Filter, RegularMesh, Tally, TallySet};

/// Flux mesh bins per side over the world square.
const FLUX_MESH_BINS: usize = 100;

pub(crate) fn build(cfg: &CaseConfig, lib: &MaterialLibrary) -> FissionResult<Model> {
    let spec = CoreSpec::from_config(cfg)?;
    let layout = synthesize(spec.grid_size, spec.assembly_pitch(), cfg.core.target_assemblies)?;
    log::info!(
        "core layout: {0}x{0} grid with {1} fuel assemblies, barrel inner radius {2:.1} cm",
        spec.grid_size,
        layout.fuel_count(),
        layout.enclosing_radius
    );
    log::debug!("core map:\n{}", layout.render());

    let hierarchy = compose(&spec, &layout.mask, &lib.core_materials()?)?;
    let geometry = hierarchy.to_geometry()?;

    let core_flux = Tally::new("core_flux")
        .filter(Filter::Mesh(RegularMesh::centred_square(
            FLUX_MESH_BINS,
            hierarchy.exterior.half_width,
        )))
        .score("flux");

    Ok(Model {
        case: CaseKind::Core,
        materials: lib.select(&[FUEL, ZIRC, WATER, STEEL, AIR])?,
        geometry,
        settings: Settings::eigenvalue(&cfg.run, Source::point([0.0, 0.0, 0.0]))?,
        tallies: TallySet::new(vec![core_flux])?,
        cross_sections: cfg.cross_sections.clone(),
        fuel_assemblies: Some(hierarchy.core.fuel_count()),
    })
}
