// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Reference dimensions of the tutorial PWR. Lengths in cm.

/// Fuel pellet radius (cm).
pub const FUEL_RADIUS: f64 = 0.39;

/// Cladding outer radius (cm).
pub const CLADDING_RADIUS: f64 = 0.45;

/// Pin lattice pitch (cm).
pub const PIN_PITCH: f64 = 1.26;

/// Pins per assembly side.
pub const ASSEMBLY_SIZE: usize = 17;

/// Zircaloy assembly wall thickness (cm).
pub const WALL_THICKNESS: f64 = 0.2;

/// Inter-assembly water gap thickness (cm).
pub const GAP_THICKNESS: f64 = 0.1;

/// Assemblies per core side.
pub const CORE_GRID_SIZE: usize = 17;

/// Fuel assemblies in the reference circular core.
pub const TARGET_ASSEMBLIES: usize = 177;

/// Steel vessel (barrel) thickness (cm).
pub const VESSEL_THICKNESS: f64 = 5.0;

/// Active core height (cm).
pub const CORE_HEIGHT: f64 = 400.0;

/// Height of the finite pin cell (cm).
pub const FINITE_PINCELL_HEIGHT: f64 = 100.0;

/// Edge length of the reflective infinite-medium box (cm).
pub const INFINITE_MEDIUM_WIDTH: f64 = 10.0;

/// Clearance added to the outermost selected corner distance (cm).
pub const RADIUS_MARGIN: f64 = 1.0;

/// Air clearance between vessel and the square world boundary (cm).
pub const WORLD_MARGIN: f64 = 10.0;

/// Default eigenvalue run: total batches.
pub const BATCHES: u32 = 100;

/// Default eigenvalue run: inactive batches.
pub const INACTIVE: u32 = 10;

/// Default eigenvalue run: particles per batch.
pub const PARTICLES: u64 = 1000;

/// Energy tally range: log10 of lower and upper bound (eV), and bin edges.
pub const ENERGY_LOG10_MIN: f64 = -3.0;
pub const ENERGY_LOG10_MAX: f64 = 7.0;
pub const ENERGY_EDGES: usize = 101;

/// Environment variable consulted for the cross-section library.
pub const CROSS_SECTIONS_ENV: &str = "OPENMC_CROSS_SECTIONS";
