// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Case 3: Finite Pin Cell
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! A single pin of finite height with vacuum on all six faces, so
//! neutrons leak and k-eff falls below k-infinity.

use fission_core::pin::PinCell;
use fission_geometry::{BoundaryType, Fill, GeometryBuilder, RectangularPrism, ZSlab};
use fission_types::config::{CaseConfig, CaseKind};
use fission_types::error::FissionResult;

use crate::materials::{MaterialLibrary, FUEL, WATER, ZIRC};
use crate::model::Model;
use crate::settings::{Settings, Source};
use crate::tallies::{Filter, Tally, TallySet};

const BOUNDARY_NAMES: [&str; 6] = ["min_x", "max_x", "min_y", "max_y", "z_min", "z_max"];

pub(crate) fn build(cfg: &CaseConfig, lib: &MaterialLibrary) -> FissionResult<Model> {
    let height = cfg.finite_pincell.height;
    let pin = PinCell::new(
        cfg.pin.fuel_radius,
        cfg.pin.cladding_radius,
        cfg.pin.pitch,
        lib.pin_materials()?,
    )?;
    let mut b = GeometryBuilder::new();
    let pin_universe = pin.build(&mut b);
    let slab = ZSlab::new(&mut b, height, BoundaryType::Vacuum);
    let prism = RectangularPrism::with_names(
        &mut b,
        pin.pitch,
        pin.pitch,
        BoundaryType::Vacuum,
        [Some("min_x"), Some("max_x"), Some("min_y"), Some("max_y")],
    );
    let root_cell = b.cell(
        None,
        Fill::Universe(pin_universe),
        Some(prism.inside() & slab.inside()),
    );
    let root = b.universe(None, vec![root_cell]);
    let geometry = b.finish(root)?;

    let half = pin.pitch / 2.0;
    let source = Source::fissionable_box([-half, -half, -height / 2.0], [half, half, height / 2.0]);

    let leakage = Tally::new("leakage")
        .filter(Filter::surfaces_named(&geometry, &BOUNDARY_NAMES)?)
        .score("current");
    let absorption = Tally::new("absorption")
        .score("absorption")
        .score("fission");

    Ok(Model {
        case: CaseKind::FinitePincell,
        materials: lib.select(&[FUEL, ZIRC, WATER])?,
        geometry,
        settings: Settings::eigenvalue(&cfg.run, source)?,
        tallies: TallySet::new(vec![leakage, absorption])?,
        cross_sections: cfg.cross_sections.clone(),
        fuel_assemblies: None,
    })
}
