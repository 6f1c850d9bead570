// ─────────────────────────────────────────────────────────────────────
// SCPN Fission Deck — Command Line
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! `fission` — build and run the tutorial reactor models.
//!
//! Usage:
//!     fission list
//!     fission layout --grid-size 17 --target 177
//!     fission build --config configs/05_core.json --out runs/core
//!     fission run --config configs/03_finite_pincell.json -v

use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser, Subcommand};
use fission_core::layout::synthesize;
use fission_deck::pipeline;
use fission_types::config::{CaseConfig, CaseKind};
use fission_types::constants::{
    ASSEMBLY_SIZE, CORE_GRID_SIZE, CROSS_SECTIONS_ENV, GAP_THICKNESS, PIN_PITCH,
    TARGET_ASSEMBLIES, WALL_THICKNESS,
};
use fission_types::error::{FissionError, FissionResult};

#[derive(Parser)]
#[command(name = "fission")]
#[command(version)]
#[command(about = "Monte-Carlo input decks from a pin cell to a full reactor core", long_about = None)]
struct Cli {
    /// More log output (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the five tutorial cases
    List,

    /// Print a circular core layout
    Layout {
        /// Assemblies per core side
        #[arg(long, default_value_t = CORE_GRID_SIZE)]
        grid_size: usize,

        /// Assembly pitch in cm (reference assembly when omitted)
        #[arg(long)]
        pitch: Option<f64>,

        /// Fuel assemblies to place
        #[arg(long, default_value_t = TARGET_ASSEMBLIES, conflicts_with = "all")]
        target: usize,

        /// Fill every grid position
        #[arg(long)]
        all: bool,

        /// Emit the layout as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write the engine input files for a case
    Build {
        /// Case configuration (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Output root; `xml/` and `output/` are created under it
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write the input files, run the engine and collect its outputs
    Run {
        /// Case configuration (JSON)
        #[arg(short, long)]
        config: PathBuf,

        /// Output root; `xml/` and `output/` are created under it
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn reference_assembly_pitch() -> f64 {
    PIN_PITCH * ASSEMBLY_SIZE as f64 + 2.0 * (WALL_THICKNESS + GAP_THICKNESS)
}

/// Load a config and fill the cross-section path from the environment
/// when the file leaves it out.
fn load_config(path: &Path) -> FissionResult<CaseConfig> {
    let mut cfg = CaseConfig::from_file(&path.to_string_lossy())?;
    if cfg.cross_sections.is_none() {
        cfg.cross_sections = std::env::var(CROSS_SECTIONS_ENV).ok();
    }
    if cfg.cross_sections.is_none() {
        log::warn!("{CROSS_SECTIONS_ENV} is not set; the engine must find cross sections on its own");
    }
    Ok(cfg)
}

fn out_root(out: Option<PathBuf>, case: CaseKind) -> PathBuf {
    out.unwrap_or_else(|| PathBuf::from("runs").join(case.slug()))
}

fn cmd_list() {
    println!("Fission Deck");
    println!("============");
    println!();
    println!("A progressive series of reactor models, from a fuel medium to a full core.");
    println!();
    println!("Cases:");
    for (k, kind) in CaseKind::ALL.iter().enumerate() {
        println!(
            "  {}. {:<18} - {:<28} [{}]",
            k + 1,
            kind.title(),
            kind.topic(),
            kind.slug()
        );
    }
    println!();
    println!("To build a case:");
    println!("  fission build --config configs/01_infinite_medium.json");
}

fn cmd_layout(
    grid_size: usize,
    pitch: Option<f64>,
    target: usize,
    all: bool,
    json: bool,
) -> FissionResult<()> {
    let pitch = pitch.unwrap_or_else(reference_assembly_pitch);
    let target = if all { None } else { Some(target) };
    let layout = synthesize(grid_size, pitch, target)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&layout)?);
        return Ok(());
    }
    print!("{}", layout.render());
    println!();
    println!(
        "Core layout: {grid_size}x{grid_size} grid with {} fuel assemblies",
        layout.fuel_count()
    );
    println!("Barrel inner radius: {:.1} cm", layout.enclosing_radius);
    Ok(())
}

fn cmd_build(config: &Path, out: Option<PathBuf>) -> FissionResult<()> {
    let cfg = load_config(config)?;
    let root = out_root(out, cfg.case);
    let prepared = pipeline::prepare(&cfg, &root)?;
    println!("{}", serde_json::to_string_pretty(&prepared.model.summary())?);
    for path in &prepared.inputs {
        println!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_run(config: &Path, out: Option<PathBuf>) -> FissionResult<()> {
    let cfg = load_config(config)?;
    let root = out_root(out, cfg.case);
    println!("Running {} simulation...", cfg.case.title());
    let report = pipeline::run(&cfg, &root)?;
    if report.outputs.is_empty() {
        log::warn!("engine finished without producing any .h5 files");
    }
    for path in &report.outputs {
        println!("output {}", path.display());
    }
    Ok(())
}

fn main() -> Result<(), FissionError> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::List => {
            cmd_list();
            Ok(())
        }
        Commands::Layout {
            grid_size,
            pitch,
            target,
            all,
            json,
        } => cmd_layout(grid_size, pitch, target, all, json),
        Commands::Build { config, out } => cmd_build(&config, out),
        Commands::Run { config, out } => cmd_run(&config, out),
    }
}
