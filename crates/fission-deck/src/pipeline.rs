// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Case Pipeline
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Build → export → run → collect, for one case.

use std::path::{Path, PathBuf};

use fission_types::config::CaseConfig;
use fission_types::error::FissionResult;

use crate::cases;
use crate::engine::{collect_outputs, Engine};
use crate::model::{Model, ModelSummary};
use crate::workspace::CaseWorkspace;

pub const SUMMARY_FILE: &str = "summary.json";

#[derive(Debug, Clone)]
pub struct Prepared {
    pub workspace: CaseWorkspace,
    pub model: Model,
    pub inputs: Vec<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub summary: ModelSummary,
    pub workspace: CaseWorkspace,
    pub inputs: Vec<PathBuf>,
    pub outputs: Vec<PathBuf>,
}

/// Build the case and write its inputs under `root/xml`, plus a JSON
/// summary at `root/summary.json`. Nothing is written if the model is
/// invalid.
pub fn prepare(cfg: &CaseConfig, root: &Path) -> FissionResult<Prepared> {
    let model = cases::build(cfg)?;
    model.validate()?;
    let workspace = CaseWorkspace::create(root)?;
    let inputs = model.export(&workspace.xml_dir)?;
    let summary_path = workspace.root.join(SUMMARY_FILE);
    std::fs::write(&summary_path, serde_json::to_string_pretty(&model.summary())?)?;
    log::info!(
        "{}: {} input files in {}",
        cfg.case.slug(),
        inputs.len(),
        workspace.xml_dir.display()
    );
    Ok(Prepared {
        workspace,
        model,
        inputs,
    })
}

/// [`prepare`], then one engine run and collection of its outputs.
pub fn run(cfg: &CaseConfig, root: &Path) -> FissionResult<RunReport> {
    let prepared = prepare(cfg, root)?;
    let engine = Engine::from_config(&cfg.engine);
    engine.run(&prepared.workspace.xml_dir)?;
    let outputs = collect_outputs(&prepared.workspace.xml_dir, &prepared.workspace.output_dir)?;
    log::info!(
        "{}: {} output files moved to {}",
        cfg.case.slug(),
        outputs.len(),
        prepared.workspace.output_dir.display()
    );
    Ok(RunReport {
        summary: prepared.model.summary(),
        workspace: prepared.workspace,
        inputs: prepared.inputs,
        outputs,
    })
}
