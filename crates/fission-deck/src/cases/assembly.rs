// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Case 4: Fuel Assembly
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! One assembly in a reflective square with a per-pin fission mesh.

use fission_core::hierarchy::CoreSpec;
use fission_geometry::{BoundaryType, Fill, GeometryBuilder, RectangularPrism};
use fission_types::config::{CaseConfig, CaseKind};
use fission_types::error::FissionResult;

use crate::materials::{MaterialLibrary, FUEL, WATER, ZIRC};
use crate::model::Model;
use crate::settings::{Settings, Source};
use crate::tallies::{Filter, RegularMesh, Tally, TallySet};

/// Axial half-extent of the source box.
const SOURCE_HALF_HEIGHT: f64 = 1.0;

pub(crate) fn build(cfg: &CaseConfig, lib: &MaterialLibrary) -> FissionResult<Model> {
    let assembly = CoreSpec::from_config(cfg)?.assembly(lib.pin_materials()?)?;
    let mut b = GeometryBuilder::new();
    let assembly_universe = assembly.build(&mut b);
    let outer = assembly.outer_pitch();
    let prism = RectangularPrism::new(&mut b, outer, outer, BoundaryType::Reflective);
    let root_cell = b.cell(None, Fill::Universe(assembly_universe), Some(prism.inside()));
    let root = b.universe(None, vec![root_cell]);
    let geometry = b.finish(root)?;

    let half = assembly.lattice_width() / 2.0;
    let source = Source::fissionable_box(
        [-half, -half, -SOURCE_HALF_HEIGHT],
        [half, half, SOURCE_HALF_HEIGHT],
    );
    let pin_power = Tally::new("pin_power")
        .filter(Filter::Mesh(RegularMesh::centred_square(assembly.size, half)))
        .score("fission");

    log::info!(
        "assembly: {0}x{0} pins, {1} guide tubes, outer pitch {2:.3}",
        assembly.size,
        assembly.guide_tubes.positions().len(),
        outer
    );

    Ok(Model {
        case: CaseKind::Assembly,
        materials: lib.select(&[FUEL, ZIRC, WATER])?,
        geometry,
        settings: Settings::eigenvalue(&cfg.run, source)?,
        tallies: TallySet::new(vec![pin_power])?,
        cross_sections: cfg.cross_sections.clone(),
        fuel_assemblies: None,
    })
}
