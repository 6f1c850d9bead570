// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Run Settings
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use fission_types::config::RunConfig;
use fission_types::error::{FissionError, FissionResult};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RunMode {
    Eigenvalue,
}

impl RunMode {
    pub fn as_str(self) -> &'static str {
        match self {
            RunMode::Eigenvalue => "eigenvalue",
        }
    }
}

/// Spatial distribution of the initial fission source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceSpace {
    Point { xyz: [f64; 3] },
    Box { lower_left: [f64; 3], upper_right: [f64; 3] },
}

impl SourceSpace {
    pub fn type_name(&self) -> &'static str {
        match self {
            SourceSpace::Point { .. } => "point",
            SourceSpace::Box { .. } => "box",
        }
    }

    /// Engine parameter list: `x y z` or `llx lly llz urx ury urz`.
    pub fn parameters(&self) -> Vec<f64> {
        match self {
            SourceSpace::Point { xyz } => xyz.to_vec(),
            SourceSpace::Box {
                lower_left,
                upper_right,
            } => lower_left.iter().chain(upper_right.iter()).copied().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Source {
    pub space: SourceSpace,
    /// Reject sampled sites outside fissionable material.
    pub fissionable_only: bool,
}

impl Source {
    pub fn point(xyz: [f64; 3]) -> Self {
        Source {
            space: SourceSpace::Point { xyz },
            fissionable_only: false,
        }
    }

    /// Uniform box restricted to fissionable material.
    pub fn fissionable_box(lower_left: [f64; 3], upper_right: [f64; 3]) -> Self {
        Source {
            space: SourceSpace::Box {
                lower_left,
                upper_right,
            },
            fissionable_only: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub run_mode: RunMode,
    pub batches: u32,
    pub inactive: u32,
    pub particles: u64,
    pub source: Source,
}

impl Settings {
    pub fn eigenvalue(run: &RunConfig, source: Source) -> FissionResult<Self> {
        let settings = Settings {
            run_mode: RunMode::Eigenvalue,
            batches: run.batches,
            inactive: run.inactive,
            particles: run.particles,
            source,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> FissionResult<()> {
        if self.particles == 0 {
            return Err(FissionError::ConfigError(
                "particles per batch must be >= 1".to_string(),
            ));
        }
        if self.inactive >= self.batches {
            return Err(FissionError::ConfigError(format!(
                "inactive batches ({}) must be fewer than total batches ({})",
                self.inactive, self.batches
            )));
        }
        if let SourceSpace::Box {
            lower_left,
            upper_right,
        } = self.source.space
        {
            if lower_left.iter().zip(upper_right.iter()).any(|(lo, hi)| lo >= hi) {
                return Err(FissionError::ConfigError(format!(
                    "source box {lower_left:?}..{upper_right:?} is empty"
                )));
            }
        }
        Ok(())
    }

    pub fn active_batches(&self) -> u32 {
        self.batches - self.inactive
    }
}
