// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{require_non_negative, require_positive, FissionError, FissionResult};

/// Which of the five tutorial models to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseKind {
    InfiniteMedium,
    InfinitePincell,
    FinitePincell,
    Assembly,
    #[default]
    Core,
}

impl CaseKind {
    pub const ALL: [CaseKind; 5] = [
        CaseKind::InfiniteMedium,
        CaseKind::InfinitePincell,
        CaseKind::FinitePincell,
        CaseKind::Assembly,
        CaseKind::Core,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            CaseKind::InfiniteMedium => "infinite-medium",
            CaseKind::InfinitePincell => "infinite-pincell",
            CaseKind::FinitePincell => "finite-pincell",
            CaseKind::Assembly => "assembly",
            CaseKind::Core => "core",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CaseKind::InfiniteMedium => "Infinite Medium",
            CaseKind::InfinitePincell => "Infinite Pin Cell",
            CaseKind::FinitePincell => "Finite Pin Cell",
            CaseKind::Assembly => "Fuel Assembly",
            CaseKind::Core => "Reactor Core",
        }
    }

    pub fn topic(self) -> &'static str {
        match self {
            CaseKind::InfiniteMedium => "Materials and k-infinity",
            CaseKind::InfinitePincell => "Geometry and spatial effects",
            CaseKind::FinitePincell => "Leakage and k-eff",
            CaseKind::Assembly => "Lattices and universes",
            CaseKind::Core => "Full system simulation",
        }
    }
}

impl std::str::FromStr for CaseKind {
    type Err = FissionError;

    fn from_str(s: &str) -> FissionResult<Self> {
        CaseKind::ALL
            .into_iter()
            .find(|kind| kind.slug() == s)
            .ok_or_else(|| FissionError::ConfigError(format!("unknown case '{s}'")))
    }
}

/// Top-level case description. Every field is optional in JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CaseConfig {
    pub case: CaseKind,
    pub pin: PinConfig,
    pub assembly: AssemblyConfig,
    pub core: CoreConfig,
    pub finite_pincell: FinitePincellConfig,
    pub infinite_medium: InfiniteMediumConfig,
    pub run: RunConfig,
    pub engine: EngineConfig,
    /// Path to the engine's `cross_sections.xml`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_sections: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PinConfig {
    #[serde(default = "default_fuel_radius")]
    pub fuel_radius: f64,
    #[serde(default = "default_cladding_radius")]
    pub cladding_radius: f64,
    #[serde(default = "default_pitch")]
    pub pitch: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyConfig {
    #[serde(default = "default_assembly_size")]
    pub size: usize,
    #[serde(default = "default_wall_thickness")]
    pub wall_thickness: f64,
    #[serde(default = "default_gap_thickness")]
    pub gap_thickness: f64,
    /// Explicit guide-tube positions as `[row, col]`.
    /// When absent, the center-and-corners pattern is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guide_tubes: Option<Vec<[usize; 2]>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,
    /// `null` selects every grid position.
    #[serde(default = "default_target_assemblies")]
    pub target_assemblies: Option<usize>,
    /// When absent, derived from the fuel-marked positions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vessel_inner_radius: Option<f64>,
    #[serde(default = "default_vessel_thickness")]
    pub vessel_thickness: f64,
    #[serde(default = "default_core_height")]
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinitePincellConfig {
    #[serde(default = "default_finite_pincell_height")]
    pub height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfiniteMediumConfig {
    #[serde(default = "default_infinite_medium_width")]
    pub width: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(default = "default_batches")]
    pub batches: u32,
    #[serde(default = "default_inactive")]
    pub inactive: u32,
    #[serde(default = "default_particles")]
    pub particles: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_executable")]
    pub executable: String,
    /// OpenMP threads passed as `-s`; engine default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<u32>,
    /// Capture engine stdout instead of streaming it.
    #[serde(default = "default_quiet")]
    pub quiet: bool,
}

fn default_fuel_radius() -> f64 {
    FUEL_RADIUS
}
fn default_cladding_radius() -> f64 {
    CLADDING_RADIUS
}
fn default_pitch() -> f64 {
    PIN_PITCH
}
fn default_assembly_size() -> usize {
    ASSEMBLY_SIZE
}
fn default_wall_thickness() -> f64 {
    WALL_THICKNESS
}
fn default_gap_thickness() -> f64 {
    GAP_THICKNESS
}
fn default_grid_size() -> usize {
    CORE_GRID_SIZE
}
fn default_target_assemblies() -> Option<usize> {
    Some(TARGET_ASSEMBLIES)
}
fn default_vessel_thickness() -> f64 {
    VESSEL_THICKNESS
}
fn default_core_height() -> f64 {
    CORE_HEIGHT
}
fn default_finite_pincell_height() -> f64 {
    FINITE_PINCELL_HEIGHT
}
fn default_infinite_medium_width() -> f64 {
    INFINITE_MEDIUM_WIDTH
}
fn default_batches() -> u32 {
    BATCHES
}
fn default_inactive() -> u32 {
    INACTIVE
}
fn default_particles() -> u64 {
    PARTICLES
}
fn default_executable() -> String {
    "openmc".to_string()
}
fn default_quiet() -> bool {
    true
}

impl Default for PinConfig {
    fn default() -> Self {
        PinConfig {
            fuel_radius: default_fuel_radius(),
            cladding_radius: default_cladding_radius(),
            pitch: default_pitch(),
        }
    }
}

impl Default for AssemblyConfig {
    fn default() -> Self {
        AssemblyConfig {
            size: default_assembly_size(),
            wall_thickness: default_wall_thickness(),
            gap_thickness: default_gap_thickness(),
            guide_tubes: None,
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        CoreConfig {
            grid_size: default_grid_size(),
            target_assemblies: default_target_assemblies(),
            vessel_inner_radius: None,
            vessel_thickness: default_vessel_thickness(),
            height: default_core_height(),
        }
    }
}

impl Default for FinitePincellConfig {
    fn default() -> Self {
        FinitePincellConfig {
            height: default_finite_pincell_height(),
        }
    }
}

impl Default for InfiniteMediumConfig {
    fn default() -> Self {
        InfiniteMediumConfig {
            width: default_infinite_medium_width(),
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            batches: default_batches(),
            inactive: default_inactive(),
            particles: default_particles(),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            executable: default_executable(),
            threads: None,
            quiet: default_quiet(),
        }
    }
}

impl CaseConfig {
    /// Load from a JSON file and validate scalar ranges.
    pub fn from_file(path: &str) -> FissionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> FissionResult<Self> {
        let config: Self = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Range checks that do not need geometry context.
    /// Cross-field geometry checks (radii vs pitch, mask shape) happen in the builders.
    pub fn validate(&self) -> FissionResult<()> {
        require_positive("pin.fuel_radius", self.pin.fuel_radius)?;
        require_positive("pin.cladding_radius", self.pin.cladding_radius)?;
        require_positive("pin.pitch", self.pin.pitch)?;
        if self.assembly.size == 0 {
            return Err(FissionError::ConfigError(
                "assembly.size must be >= 1".to_string(),
            ));
        }
        require_non_negative("assembly.wall_thickness", self.assembly.wall_thickness)?;
        require_non_negative("assembly.gap_thickness", self.assembly.gap_thickness)?;
        if self.core.grid_size == 0 {
            return Err(FissionError::InvalidGridSize(self.core.grid_size));
        }
        if let Some(r) = self.core.vessel_inner_radius {
            require_positive("core.vessel_inner_radius", r)?;
        }
        require_positive("core.vessel_thickness", self.core.vessel_thickness)?;
        require_positive("core.height", self.core.height)?;
        require_positive("finite_pincell.height", self.finite_pincell.height)?;
        require_positive("infinite_medium.width", self.infinite_medium.width)?;
        if self.run.particles == 0 {
            return Err(FissionError::ConfigError(
                "run.particles must be >= 1".to_string(),
            ));
        }
        if self.run.inactive >= self.run.batches {
            return Err(FissionError::ConfigError(format!(
                "run.inactive ({}) must be < run.batches ({})",
                self.run.inactive, self.run.batches
            )));
        }
        if self.engine.executable.trim().is_empty() {
            return Err(FissionError::ConfigError(
                "engine.executable must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    /// CARGO_MANIFEST_DIR points to crates/fission-types/ at compile time,
    /// so the workspace root is two levels up.
    fn project_root() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
    }

    fn config_path(relative: &str) -> String {
        project_root().join(relative).to_string_lossy().to_string()
    }

    #[test]
    fn test_empty_json_uses_reference_defaults() {
        let cfg = CaseConfig::from_json("{}").unwrap();
        assert_eq!(cfg.case, CaseKind::Core);
        assert!((cfg.pin.pitch - 1.26).abs() < 1e-12);
        assert_eq!(cfg.assembly.size, 17);
        assert_eq!(cfg.core.grid_size, 17);
        assert_eq!(cfg.core.target_assemblies, Some(177));
        assert!(cfg.core.vessel_inner_radius.is_none());
        assert_eq!(cfg.run.batches, 100);
        assert_eq!(cfg.engine.executable, "openmc");
        assert!(cfg.engine.quiet);
    }

    #[test]
    fn test_null_target_selects_all() {
        let cfg = CaseConfig::from_json(r#"{"core": {"target_assemblies": null}}"#).unwrap();
        assert_eq!(cfg.core.target_assemblies, None);
        assert_eq!(cfg.core.grid_size, 17);
    }

    #[test]
    fn test_negative_grid_size_rejected_by_parser() {
        let err = CaseConfig::from_json(r#"{"core": {"grid_size": -3}}"#).unwrap_err();
        assert!(matches!(err, FissionError::Json(_)));
    }

    #[test]
    fn test_zero_grid_size_rejected() {
        let err = CaseConfig::from_json(r#"{"core": {"grid_size": 0}}"#).unwrap_err();
        assert!(matches!(err, FissionError::InvalidGridSize(0)));
    }

    #[test]
    fn test_inactive_must_be_below_batches() {
        let err =
            CaseConfig::from_json(r#"{"run": {"batches": 10, "inactive": 10}}"#).unwrap_err();
        match err {
            FissionError::ConfigError(msg) => assert!(msg.contains("run.inactive")),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_case_slug_roundtrip() {
        for kind in CaseKind::ALL {
            assert_eq!(kind.slug().parse::<CaseKind>().unwrap(), kind);
        }
        assert!("reactor".parse::<CaseKind>().is_err());
    }

    #[test]
    fn test_load_all_shipped_configs() {
        let configs = [
            ("configs/01_infinite_medium.json", CaseKind::InfiniteMedium),
            ("configs/02_infinite_pincell.json", CaseKind::InfinitePincell),
            ("configs/03_finite_pincell.json", CaseKind::FinitePincell),
            ("configs/04_assembly.json", CaseKind::Assembly),
            ("configs/05_core.json", CaseKind::Core),
        ];
        for (relative, kind) in configs {
            let path = config_path(relative);
            let cfg = CaseConfig::from_file(&path)
                .unwrap_or_else(|e| panic!("Failed to load config {path}: {e}"));
            assert_eq!(cfg.case, kind, "{path}");
        }
    }

    #[test]
    fn test_roundtrip_serialization() {
        let cfg = CaseConfig::from_file(&config_path("configs/05_core.json")).unwrap();
        let json = serde_json::to_string_pretty(&cfg).unwrap();
        let cfg2 = CaseConfig::from_json(&json).unwrap();
        assert_eq!(cfg.case, cfg2.case);
        assert_eq!(cfg.core.grid_size, cfg2.core.grid_size);
        assert_eq!(cfg.core.target_assemblies, cfg2.core.target_assemblies);
        assert_eq!(cfg.assembly.guide_tubes, cfg2.assembly.guide_tubes);
    }
}
