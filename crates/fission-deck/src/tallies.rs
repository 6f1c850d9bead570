// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Tallies
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Tally requests: filters that bin events and the scores to accumulate.
//!
//! Filters and meshes carry no IDs here. [`TallySet`] numbers the distinct
//! ones at export time, so a filter shared by two tallies is written once.

use fission_geometry::{CellId, Geometry, SurfaceId};
use fission_types::constants::{ENERGY_EDGES, ENERGY_LOG10_MAX, ENERGY_LOG10_MIN};
use fission_types::error::{FissionError, FissionResult};
use ndarray::Array1;
use serde::Serialize;

/// Two-dimensional regular mesh, infinite in z.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegularMesh {
    pub dimension: [usize; 2],
    pub lower_left: [f64; 2],
    pub upper_right: [f64; 2],
}

impl RegularMesh {
    /// Square mesh of `n × n` bins covering `|x|, |y| < half_width`.
    pub fn centred_square(n: usize, half_width: f64) -> Self {
        RegularMesh {
            dimension: [n, n],
            lower_left: [-half_width, -half_width],
            upper_right: [half_width, half_width],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "bins", rename_all = "lowercase")]
pub enum Filter {
    Cell(Vec<CellId>),
    Surface(Vec<SurfaceId>),
    Mesh(RegularMesh),
    Energy(Vec<f64>),
}

impl Filter {
    pub fn type_name(&self) -> &'static str {
        match self {
            Filter::Cell(_) => "cell",
            Filter::Surface(_) => "surface",
            Filter::Mesh(_) => "mesh",
            Filter::Energy(_) => "energy",
        }
    }

    /// Cell filter from cell names in `geometry`.
    pub fn cells_named(geometry: &Geometry, names: &[&str]) -> FissionResult<Self> {
        let ids = names
            .iter()
            .map(|n| geometry.cell_by_name(n).map(|c| c.id))
            .collect::<FissionResult<Vec<_>>>()?;
        Ok(Filter::Cell(ids))
    }

    /// Surface filter from surface names in `geometry`.
    pub fn surfaces_named(geometry: &Geometry, names: &[&str]) -> FissionResult<Self> {
        let ids = names
            .iter()
            .map(|n| geometry.surface_by_name(n).map(|s| s.id))
            .collect::<FissionResult<Vec<_>>>()?;
        Ok(Filter::Surface(ids))
    }

    /// 100 logarithmic energy groups from 1 meV to 10 MeV.
    pub fn log_energy() -> Self {
        Filter::Energy(energy_bins().to_vec())
    }
}

/// Log-spaced energy bin edges in eV.
pub fn energy_bins() -> Array1<f64> {
    Array1::logspace(10.0, ENERGY_LOG10_MIN, ENERGY_LOG10_MAX, ENERGY_EDGES)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tally {
    pub name: String,
    pub filters: Vec<Filter>,
    pub scores: Vec<String>,
}

impl Tally {
    pub fn new(name: &str) -> Self {
        Tally {
            name: name.to_string(),
            filters: Vec::new(),
            scores: Vec::new(),
        }
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn score(mut self, score: &str) -> Self {
        self.scores.push(score.to_string());
        self
    }
}

/// Tallies with their distinct meshes and filters numbered from 1 in
/// order of first use.
#[derive(Debug, Clone, PartialEq)]
pub struct TallySet {
    pub meshes: Vec<RegularMesh>,
    pub filters: Vec<Filter>,
    /// Per tally: its 1-based filter IDs.
    pub filter_ids: Vec<Vec<usize>>,
    pub tallies: Vec<Tally>,
}

impl TallySet {
    pub fn new(tallies: Vec<Tally>) -> FissionResult<Self> {
        let mut meshes: Vec<RegularMesh> = Vec::new();
        let mut filters: Vec<Filter> = Vec::new();
        let mut filter_ids = Vec::with_capacity(tallies.len());
        let mut seen_names: Vec<&str> = Vec::with_capacity(tallies.len());

        for tally in &tallies {
            if tally.scores.is_empty() {
                return Err(FissionError::ConfigError(format!(
                    "tally '{}' has no scores",
                    tally.name
                )));
            }
            if seen_names.contains(&tally.name.as_str()) {
                return Err(FissionError::ConfigError(format!(
                    "duplicate tally name '{}'",
                    tally.name
                )));
            }
            seen_names.push(&tally.name);

            let mut ids = Vec::with_capacity(tally.filters.len());
            for filter in &tally.filters {
                if let Filter::Mesh(mesh) = filter {
                    if !meshes.contains(mesh) {
                        meshes.push(mesh.clone());
                    }
                }
                let id = match filters.iter().position(|f| f == filter) {
                    Some(pos) => pos + 1,
                    None => {
                        filters.push(filter.clone());
                        filters.len()
                    }
                };
                ids.push(id);
            }
            filter_ids.push(ids);
        }

        Ok(TallySet {
            meshes,
            filters,
            filter_ids,
            tallies,
        })
    }

    /// 1-based ID of `mesh`, if registered.
    pub fn mesh_id(&self, mesh: &RegularMesh) -> Option<usize> {
        self.meshes.iter().position(|m| m == mesh).map(|p| p + 1)
    }
}
