// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Case Workspace
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use std::path::{Path, PathBuf};

use fission_types::error::FissionResult;

pub const XML_DIR: &str = "xml";
pub const OUTPUT_DIR: &str = "output";

/// `<root>/xml` holds engine inputs, `<root>/output` collects its results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseWorkspace {
    pub root: PathBuf,
    pub xml_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl CaseWorkspace {
    pub fn new(root: &Path) -> Self {
        CaseWorkspace {
            root: root.to_path_buf(),
            xml_dir: root.join(XML_DIR),
            output_dir: root.join(OUTPUT_DIR),
        }
    }

    /// Create both directories; existing ones are reused.
    pub fn create(root: &Path) -> FissionResult<Self> {
        let ws = Self::new(root);
        std::fs::create_dir_all(&ws.xml_dir)?;
        std::fs::create_dir_all(&ws.output_dir)?;
        log::debug!("workspace ready at {}", ws.root.display());
        Ok(ws)
    }
}
