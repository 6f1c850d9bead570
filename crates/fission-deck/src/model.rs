// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Model
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! A complete engine input: materials, geometry, settings and tallies.

use std::path::{Path, PathBuf};

use fission_geometry::Geometry;
use fission_types::config::CaseKind;
use fission_types::error::{FissionError, FissionResult};
use fission_types::material::Material;
use serde::Serialize;

use crate::settings::Settings;
use crate::tallies::TallySet;
use crate::xml;

pub const MATERIALS_FILE: &str = "materials.xml";
pub const GEOMETRY_FILE: &str = "geometry.xml";
pub const SETTINGS_FILE: &str = "settings.xml";
pub const TALLIES_FILE: &str = "tallies.xml";

#[derive(Debug, Clone)]
pub struct Model {
    pub case: CaseKind,
    pub materials: Vec<Material>,
    pub geometry: Geometry,
    pub settings: Settings,
    pub tallies: TallySet,
    pub cross_sections: Option<String>,
    /// Fuel assemblies placed, for core models.
    pub fuel_assemblies: Option<usize>,
}

/// Rendered file contents, in write order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    pub files: Vec<(&'static str, String)>,
}

/// Counts and names for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub case: CaseKind,
    pub title: &'static str,
    pub materials: Vec<String>,
    pub surfaces: usize,
    pub cells: usize,
    pub universes: usize,
    pub lattices: usize,
    pub tallies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_assemblies: Option<usize>,
}

impl Model {
    /// Every material the geometry fills must be exported, and the run
    /// settings must be consistent.
    pub fn validate(&self) -> FissionResult<()> {
        for id in self.geometry.material_ids() {
            if !self.materials.iter().any(|m| m.id == id) {
                return Err(FissionError::Geometry(format!(
                    "geometry fills material {id} which is not exported"
                )));
            }
        }
        self.settings.validate()
    }

    pub fn render(&self) -> Deck {
        Deck {
            files: vec![
                (
                    MATERIALS_FILE,
                    xml::materials_xml(&self.materials, self.cross_sections.as_deref()),
                ),
                (GEOMETRY_FILE, xml::geometry_xml(&self.geometry)),
                (SETTINGS_FILE, xml::settings_xml(&self.settings)),
                (TALLIES_FILE, xml::tallies_xml(&self.tallies)),
            ],
        }
    }

    /// Validate, then write the four input files into `dir`.
    pub fn export(&self, dir: &Path) -> FissionResult<Vec<PathBuf>> {
        self.validate()?;
        let deck = self.render();
        let mut written = Vec::with_capacity(deck.files.len());
        for (name, contents) in &deck.files {
            let path = dir.join(name);
            std::fs::write(&path, contents)?;
            log::debug!("wrote {} ({} bytes)", path.display(), contents.len());
            written.push(path);
        }
        Ok(written)
    }

    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            case: self.case,
            title: self.case.title(),
            materials: self.materials.iter().map(|m| m.name.clone()).collect(),
            surfaces: self.geometry.surfaces.len(),
            cells: self.geometry.cells.len(),
            universes: self.geometry.universes.len(),
            lattices: self.geometry.lattices.len(),
            tallies: self.tallies.tallies.iter().map(|t| t.name.clone()).collect(),
            fuel_assemblies: self.fuel_assemblies,
        }
    }
}
