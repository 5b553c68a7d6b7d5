//! Command-line entry point for the frame solver

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::{debug, info};

use frame2d::input;

/// 2D frame static analysis using the direct stiffness method
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to the model input file
    input: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut structure = input::parse_file(&cli.input)
        .with_context(|| format!("failed to load model from {}", cli.input.display()))?;
    structure.analyze().context("analysis failed")?;

    let summary = structure.summary()?;
    info!(
        "solved {} DOFs ({} restrained); max displacement {:.6e} at node {}",
        summary.total_dofs, summary.restrained_dofs, summary.max_displacement, summary.max_disp_node
    );

    println!("Nodal displacements (X, Y, R)");
    for node in structure.nodes() {
        let d = structure.node_displacement(node.n)?;
        println!("Node {}: ({:.6}, {:.6}, {:.6})", node.n, d.dx, d.dy, d.rz);
    }

    println!();
    println!("Local element end forces (axial, shear, moment)");
    for index in 0..structure.elements().len() {
        let (fi, fj) = structure.member_end_forces(index)?;
        println!("Element {index}:");
        println!("  i-end: ({:.6}, {:.6}, {:.6})", fi.axial, fi.shear, fi.moment);
        println!("  j-end: ({:.6}, {:.6}, {:.6})", fj.axial, fj.shear, fj.moment);
    }

    for node in structure.nodes() {
        let r = structure.node_reaction(node.n)?;
        debug!(
            "node {} reaction: ({:.6}, {:.6}, {:.6})",
            node.n, r.fx, r.fy, r.mz
        );
    }

    Ok(())
}
