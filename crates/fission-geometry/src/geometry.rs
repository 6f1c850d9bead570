// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Geometry Arena
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cells, universes, lattices and the builder that assigns their IDs.

use std::collections::BTreeSet;

use fission_types::error::{FissionError, FissionResult};
use fission_types::material::MaterialId;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::region::Region;
use crate::surface::{BoundaryType, Surface, SurfaceId, SurfaceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UniverseId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LatticeId(pub u32);

impl std::fmt::Display for CellId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for UniverseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::fmt::Display for LatticeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What occupies a cell's region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fill {
    Material(MaterialId),
    Universe(UniverseId),
    Lattice(LatticeId),
    Void,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub id: CellId,
    pub name: Option<String>,
    pub fill: Fill,
    /// `None` means all space.
    pub region: Option<Region>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Universe {
    pub id: UniverseId,
    pub name: Option<String>,
    pub cells: Vec<CellId>,
}

/// Rectangular lattice. Row 0 of `universes` is the top (max y) row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RectLattice {
    pub id: LatticeId,
    pub name: Option<String>,
    pub pitch: [f64; 2],
    pub lower_left: [f64; 2],
    pub universes: Array2<UniverseId>,
    pub outer: Option<UniverseId>,
}

impl RectLattice {
    /// `(nx, ny)` in engine order.
    pub fn dimension(&self) -> (usize, usize) {
        let (rows, cols) = self.universes.dim();
        (cols, rows)
    }

    pub fn upper_right(&self) -> [f64; 2] {
        let (nx, ny) = self.dimension();
        [
            self.lower_left[0] + self.pitch[0] * nx as f64,
            self.lower_left[1] + self.pitch[1] * ny as f64,
        ]
    }

    /// Element `(row, col)` containing `(x, y)` and the element-local
    /// coordinates, or `None` outside the array.
    pub fn element_at(&self, x: f64, y: f64) -> Option<((usize, usize), [f64; 2])> {
        let (nx, ny) = self.dimension();
        let fx = ((x - self.lower_left[0]) / self.pitch[0]).floor();
        let fy = ((y - self.lower_left[1]) / self.pitch[1]).floor();
        if fx < 0.0 || fy < 0.0 || fx >= nx as f64 || fy >= ny as f64 {
            return None;
        }
        let ix = fx as usize;
        let iy = fy as usize;
        let cx = self.lower_left[0] + (ix as f64 + 0.5) * self.pitch[0];
        let cy = self.lower_left[1] + (iy as f64 + 0.5) * self.pitch[1];
        Some(((ny - 1 - iy, ix), [x - cx, y - cy]))
    }
}

/// Result of a point lookup: the material found and the cells traversed,
/// outermost first.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub fill: Fill,
    pub path: Vec<CellId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub surfaces: Vec<Surface>,
    pub cells: Vec<Cell>,
    pub universes: Vec<Universe>,
    pub lattices: Vec<RectLattice>,
    pub root: UniverseId,
}

/// Maximum universe nesting followed by [`Geometry::locate`].
const MAX_DEPTH: usize = 32;

impl Geometry {
    pub fn surface(&self, id: SurfaceId) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.id == id)
    }

    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.iter().find(|c| c.id == id)
    }

    pub fn universe(&self, id: UniverseId) -> Option<&Universe> {
        self.universes.iter().find(|u| u.id == id)
    }

    pub fn lattice(&self, id: LatticeId) -> Option<&RectLattice> {
        self.lattices.iter().find(|l| l.id == id)
    }

    pub fn cell_by_name(&self, name: &str) -> FissionResult<&Cell> {
        self.cells
            .iter()
            .find(|c| c.name.as_deref() == Some(name))
            .ok_or_else(|| FissionError::Geometry(format!("no cell named '{name}'")))
    }

    pub fn surface_by_name(&self, name: &str) -> FissionResult<&Surface> {
        self.surfaces
            .iter()
            .find(|s| s.name.as_deref() == Some(name))
            .ok_or_else(|| FissionError::Geometry(format!("no surface named '{name}'")))
    }

    /// Materials referenced anywhere, sorted.
    pub fn material_ids(&self) -> BTreeSet<MaterialId> {
        self.cells
            .iter()
            .filter_map(|c| match c.fill {
                Fill::Material(m) => Some(m),
                _ => None,
            })
            .collect()
    }

    /// Descend from the root universe to the material at `p`.
    pub fn locate(&self, p: [f64; 3]) -> Option<Location> {
        let mut path = Vec::new();
        let fill = self.locate_in(self.root, p, &mut path, 0)?;
        Some(Location { fill, path })
    }

    fn locate_in(
        &self,
        universe: UniverseId,
        p: [f64; 3],
        path: &mut Vec<CellId>,
        depth: usize,
    ) -> Option<Fill> {
        if depth > MAX_DEPTH {
            return None;
        }
        let lookup = |id: SurfaceId| self.surface(id);
        let cell = self.universe(universe)?.cells.iter().find_map(|&id| {
            let cell = self.cell(id)?;
            match &cell.region {
                Some(region) if !region.contains(p, &lookup) => None,
                _ => Some(cell),
            }
        })?;
        path.push(cell.id);
        match cell.fill {
            Fill::Material(_) | Fill::Void => Some(cell.fill),
            Fill::Universe(u) => self.locate_in(u, p, path, depth + 1),
            Fill::Lattice(l) => {
                let lattice = self.lattice(l)?;
                match lattice.element_at(p[0], p[1]) {
                    Some(((row, col), local)) => {
                        let u = lattice.universes[[row, col]];
                        self.locate_in(u, [local[0], local[1], p[2]], path, depth + 1)
                    }
                    None => self.locate_in(lattice.outer?, p, path, depth + 1),
                }
            }
        }
    }
}

/// Assigns sequential IDs starting at 1 and checks references on
/// [`GeometryBuilder::finish`]. Universes and lattices draw from one
/// counter since the engine resolves both through the same `fill` IDs.
#[derive(Debug, Default)]
pub struct GeometryBuilder {
    surfaces: Vec<Surface>,
    cells: Vec<Cell>,
    universes: Vec<Universe>,
    lattices: Vec<RectLattice>,
    fill_ids: u32,
}

impl GeometryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn surface(&mut self, kind: SurfaceKind, boundary: BoundaryType, name: Option<&str>) -> SurfaceId {
        let id = SurfaceId(self.surfaces.len() as u32 + 1);
        self.surfaces.push(Surface {
            id,
            name: name.map(str::to_string),
            kind,
            boundary,
        });
        id
    }

    pub fn z_cylinder(&mut self, r: f64, name: Option<&str>) -> SurfaceId {
        self.surface(
            SurfaceKind::ZCylinder { x0: 0.0, y0: 0.0, r },
            BoundaryType::Transmission,
            name,
        )
    }

    pub fn cell(&mut self, name: Option<&str>, fill: Fill, region: Option<Region>) -> CellId {
        let id = CellId(self.cells.len() as u32 + 1);
        self.cells.push(Cell {
            id,
            name: name.map(str::to_string),
            fill,
            region,
        });
        id
    }

    fn next_fill_id(&mut self) -> u32 {
        self.fill_ids += 1;
        self.fill_ids
    }

    pub fn universe(&mut self, name: Option<&str>, cells: Vec<CellId>) -> UniverseId {
        let id = UniverseId(self.next_fill_id());
        self.universes.push(Universe {
            id,
            name: name.map(str::to_string),
            cells,
        });
        id
    }

    /// Square-pitched lattice centred on the origin.
    pub fn centred_lattice(
        &mut self,
        name: Option<&str>,
        pitch: f64,
        universes: Array2<UniverseId>,
        outer: Option<UniverseId>,
    ) -> LatticeId {
        let (rows, cols) = universes.dim();
        let id = LatticeId(self.next_fill_id());
        self.lattices.push(RectLattice {
            id,
            name: name.map(str::to_string),
            pitch: [pitch, pitch],
            lower_left: [-pitch * cols as f64 / 2.0, -pitch * rows as f64 / 2.0],
            universes,
            outer,
        });
        id
    }

    /// Validate cross references and freeze the arena.
    pub fn finish(self, root: UniverseId) -> FissionResult<Geometry> {
        let surface_ids: BTreeSet<SurfaceId> = self.surfaces.iter().map(|s| s.id).collect();
        let universe_ids: BTreeSet<UniverseId> = self.universes.iter().map(|u| u.id).collect();
        let lattice_ids: BTreeSet<LatticeId> = self.lattices.iter().map(|l| l.id).collect();

        if !universe_ids.contains(&root) {
            return Err(FissionError::Geometry(format!("root universe {root} does not exist")));
        }

        let mut owned = BTreeSet::new();
        for universe in &self.universes {
            if universe.cells.is_empty() {
                return Err(FissionError::Geometry(format!(
                    "universe {} has no cells",
                    universe.id
                )));
            }
            for cell in &universe.cells {
                if !owned.insert(*cell) {
                    return Err(FissionError::Geometry(format!(
                        "cell {cell} belongs to more than one universe"
                    )));
                }
            }
        }

        for cell in &self.cells {
            if !owned.contains(&cell.id) {
                return Err(FissionError::Geometry(format!(
                    "cell {} is not placed in any universe",
                    cell.id
                )));
            }
            if let Some(region) = &cell.region {
                if let Some(missing) = region.surfaces().into_iter().find(|s| !surface_ids.contains(s)) {
                    return Err(FissionError::Geometry(format!(
                        "cell {} references missing surface {missing}",
                        cell.id
                    )));
                }
            }
            let dangling = match cell.fill {
                Fill::Universe(u) => !universe_ids.contains(&u),
                Fill::Lattice(l) => !lattice_ids.contains(&l),
                Fill::Material(_) | Fill::Void => false,
            };
            if dangling {
                return Err(FissionError::Geometry(format!(
                    "cell {} has a dangling fill {:?}",
                    cell.id, cell.fill
                )));
            }
        }

        for lattice in &self.lattices {
            let referenced = lattice.universes.iter().chain(lattice.outer.iter());
            if let Some(missing) = referenced.into_iter().find(|u| !universe_ids.contains(*u)) {
                return Err(FissionError::Geometry(format!(
                    "lattice {} references missing universe {missing}",
                    lattice.id
                )));
            }
        }

        log::debug!(
            "geometry: {} surfaces, {} cells, {} universes, {} lattices",
            self.surfaces.len(),
            self.cells.len(),
            self.universes.len(),
            self.lattices.len()
        );

        Ok(Geometry {
            surfaces: self.surfaces,
            cells: self.cells,
            universes: self.universes,
            lattices: self.lattices,
            root,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Geometry {
        let mut b = GeometryBuilder::new();
        let water = b.cell(Some("water"), Fill::Material(MaterialId(3)), None);
        let water_u = b.universe(Some("water"), vec![water]);
        let fuel = b.cell(Some("fuel"), Fill::Material(MaterialId(1)), None);
        let fuel_u = b.universe(Some("fuel"), vec![fuel]);
        let map = Array2::from_shape_vec((2, 2), vec![fuel_u, water_u, water_u, water_u]).unwrap();
        let lat = b.centred_lattice(Some("lat"), 2.0, map, Some(water_u));
        let root_cell = b.cell(Some("root"), Fill::Lattice(lat), None);
        let root = b.universe(Some("root"), vec![root_cell]);
        b.finish(root).unwrap()
    }

    #[test]
    fn test_ids_are_sequential() {
        let g = two_by_two();
        let ids: Vec<u32> = g.cells.iter().map(|c| c.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        // Lattice took fill ID 3.
        assert_eq!(g.lattices[0].id, LatticeId(3));
        assert_eq!(g.root, UniverseId(4));
        assert_eq!(g.lattices[0].lower_left, [-2.0, -2.0]);
        assert_eq!(g.lattices[0].upper_right(), [2.0, 2.0]);
    }

    #[test]
    fn test_locate_top_left_is_row_zero() {
        let g = two_by_two();
        // Top-left element (row 0, col 0) holds fuel.
        let loc = g.locate([-1.0, 1.0, 0.0]).unwrap();
        assert_eq!(loc.fill, Fill::Material(MaterialId(1)));
        assert_eq!(loc.path.len(), 2);
        // Bottom-left is water.
        let loc = g.locate([-1.0, -1.0, 0.0]).unwrap();
        assert_eq!(loc.fill, Fill::Material(MaterialId(3)));
        // Outside the array falls back to the outer universe.
        let loc = g.locate([10.0, 10.0, 0.0]).unwrap();
        assert_eq!(loc.fill, Fill::Material(MaterialId(3)));
    }

    #[test]
    fn test_element_at_local_coordinates() {
        let g = two_by_two();
        let ((row, col), local) = g.lattices[0].element_at(1.5, -0.5).unwrap();
        assert_eq!((row, col), (1, 1));
        assert!((local[0] - 0.5).abs() < 1e-12);
        assert!((local[1] - 0.5).abs() < 1e-12);
        assert!(g.lattices[0].element_at(-2.5, 0.0).is_none());
    }

    #[test]
    fn test_finish_rejects_orphan_cell() {
        let mut b = GeometryBuilder::new();
        let c = b.cell(None, Fill::Void, None);
        let _orphan = b.cell(None, Fill::Void, None);
        let root = b.universe(None, vec![c]);
        match b.finish(root) {
            Err(FissionError::Geometry(msg)) => assert!(msg.contains("not placed")),
            other => panic!("expected Geometry error, got {other:?}"),
        }
    }

    #[test]
    fn test_finish_rejects_missing_surface() {
        let mut b = GeometryBuilder::new();
        let c = b.cell(None, Fill::Void, Some(Region::below(SurfaceId(9))));
        let root = b.universe(None, vec![c]);
        assert!(b.finish(root).is_err());
    }

    #[test]
    fn test_named_lookup() {
        let g = two_by_two();
        assert_eq!(g.cell_by_name("fuel").unwrap().id, CellId(2));
        assert!(g.cell_by_name("cladding").is_err());
        let mats: Vec<MaterialId> = g.material_ids().into_iter().collect();
        assert_eq!(mats, vec![MaterialId(1), MaterialId(3)]);
    }
}
