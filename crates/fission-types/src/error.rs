// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FissionError {
    #[error("Invalid grid size {0}: must be >= 1")]
    InvalidGridSize(usize),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Selection mask is {rows}x{cols}, expected {expected}x{expected}")]
    MaskShape {
        expected: usize,
        rows: usize,
        cols: usize,
    },

    #[error("Grid index out of bounds: row={row}, col={col}")]
    GridOutOfBounds { row: usize, col: usize },

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Engine '{program}' exited with {status}")]
    EngineFailed { program: String, status: String },

    #[error("Failed to launch engine '{program}': {source}")]
    EngineLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type FissionResult<T> = Result<T, FissionError>;

/// Reject non-finite or non-positive lengths with a uniform message.
pub fn require_positive(name: &str, value: f64) -> FissionResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(FissionError::ConfigError(format!(
            "{name} must be finite and > 0, got {value}"
        )));
    }
    Ok(value)
}

/// Like [`require_positive`] but admits zero.
pub fn require_non_negative(name: &str, value: f64) -> FissionResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(FissionError::ConfigError(format!(
            "{name} must be finite and >= 0, got {value}"
        )));
    }
    Ok(value)
}
