// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Engine Runner
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Runs the external transport engine once and collects what it wrote.
//!
//! The engine is opaque: it is started in the directory holding the input
//! files, its exit status is the only result inspected, and its HDF5
//! outputs are moved without being read.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use fission_types::config::EngineConfig;
use fission_types::error::{FissionError, FissionResult};

/// Extension of the files the engine produces.
pub const OUTPUT_EXTENSION: &str = "h5";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    pub executable: String,
    pub threads: Option<u32>,
    pub quiet: bool,
}

impl Engine {
    pub fn from_config(cfg: &EngineConfig) -> Self {
        Engine {
            executable: cfg.executable.clone(),
            threads: cfg.threads,
            quiet: cfg.quiet,
        }
    }

    pub fn command(&self, workdir: &Path) -> Command {
        let mut cmd = Command::new(&self.executable);
        cmd.current_dir(workdir);
        if let Some(n) = self.threads {
            cmd.arg("-s").arg(n.to_string());
        }
        cmd
    }

    /// Run to completion in `workdir`. A quiet run captures the engine's
    /// output and logs it at debug level; otherwise it goes to the terminal.
    pub fn run(&self, workdir: &Path) -> FissionResult<()> {
        log::info!("running {} in {}", self.executable, workdir.display());
        let mut cmd = self.command(workdir);
        let launch_error = |source| FissionError::EngineLaunch {
            program: self.executable.clone(),
            source,
        };

        let status = if self.quiet {
            let output = cmd
                .stdin(Stdio::null())
                .output()
                .map_err(launch_error)?;
            for line in String::from_utf8_lossy(&output.stdout).lines() {
                log::debug!("[{}] {line}", self.executable);
            }
            for line in String::from_utf8_lossy(&output.stderr).lines() {
                log::debug!("[{} stderr] {line}", self.executable);
            }
            output.status
        } else {
            cmd.status().map_err(launch_error)?
        };

        if !status.success() {
            return Err(FissionError::EngineFailed {
                program: self.executable.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}

/// Move every `*.h5` file from `from` into `to`, sorted by name.
pub fn collect_outputs(from: &Path, to: &Path) -> FissionResult<Vec<PathBuf>> {
    let mut sources: Vec<PathBuf> = std::fs::read_dir(from)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == OUTPUT_EXTENSION))
        .collect();
    sources.sort();

    let mut moved = Vec::with_capacity(sources.len());
    for src in sources {
        let Some(name) = src.file_name() else {
            continue;
        };
        let dest = to.join(name);
        std::fs::rename(&src, &dest)?;
        log::debug!("moved {} -> {}", src.display(), dest.display());
        moved.push(dest);
    }
    Ok(moved)
}
