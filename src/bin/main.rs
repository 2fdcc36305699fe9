//! naca-dxf - NACA 4-digit airfoil to DXF
//!
//! Usage:
//!   naca-dxf 2412 100.0 -o airfoil_2412.dxf
//!   naca-dxf 0012 50.5 -o symmetric_airfoil.dxf -n 200

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use naca_dxf::airfoil::AirfoilSummary;
use naca_dxf::export::{default_output_name, write_dxf, write_json, EdgeClosure, ExportOptions};
use naca_dxf::{generate_naca4, Naca4Designation};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Closure {
    /// Close an edge only when the surfaces do not meet within the tolerance
    Auto,
    /// Always draw leading and trailing edge lines
    Always,
    /// Never draw edge lines
    Never,
}

impl From<Closure> for EdgeClosure {
    fn from(c: Closure) -> Self {
        match c {
            Closure::Auto => EdgeClosure::Auto,
            Closure::Always => EdgeClosure::Always,
            Closure::Never => EdgeClosure::Never,
        }
    }
}

#[derive(Parser)]
#[command(name = "naca-dxf")]
#[command(about = "Generate a NACA 4-digit airfoil and export it to DXF")]
#[command(version)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// 4-digit NACA designation (e.g. 2412, 0012)
    #[arg(value_name = "NACA_NUMBER")]
    naca: String,

    /// Chord length in millimeters
    #[arg(value_name = "CHORD_LENGTH_MM")]
    chord: f64,

    /// Output DXF filename (default: naca_XXXX_XXXmm.dxf)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Number of points along the chord
    #[arg(short = 'n', long, default_value_t = 100)]
    num_points: usize,

    /// Leading and trailing edge closure
    #[arg(long, value_enum, default_value_t = Closure::Auto)]
    closure: Closure,

    /// Offset in millimeters along x or y below which the surfaces are considered closed
    #[arg(long, default_value_t = 1e-3, value_parser = parse_tolerance)]
    tolerance: f64,

    /// Leave out the designation and chord text
    #[arg(long = "no-annotation")]
    no_annotation: bool,

    /// Also write coordinates and measurements as JSON
    #[arg(long, value_name = "PATH")]
    json: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn parse_tolerance(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("tolerance must be a finite number >= 0, got {}", s));
    }
    Ok(value)
}

/// Uses `RUST_LOG` when it is set, otherwise warnings only. `--verbose` adds debug output on top.
fn log_filter(rust_log: Option<&str>, verbose: bool) -> EnvFilter {
    let filter = rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));

    if verbose {
        filter.add_directive(tracing::Level::DEBUG.into())
    } else {
        filter
    }
}

fn print_summary(summary: &AirfoilSummary) {
    println!("NACA {} specifications:", summary.designation);
    println!(
        "  Maximum camber: {}% at {}% chord",
        summary.max_camber_percent, summary.camber_position_percent
    );
    println!("  Maximum thickness: {}%", summary.thickness_percent);
    println!("  Chord length: {:.1} mm", summary.chord);
    println!(
        "  Points per surface: {}, trailing edge gap: {:.3} mm",
        summary.num_points, summary.trailing_edge_gap
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter(
            std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref(),
            cli.verbose,
        ))
        .init();

    let designation: Naca4Designation = cli.naca.parse().context("Invalid airfoil parameters")?;
    let airfoil = generate_naca4(designation, cli.chord, cli.num_points)
        .context("Invalid airfoil parameters")?;

    let output = cli
        .output
        .unwrap_or_else(|| default_output_name(&designation, cli.chord));
    let options = ExportOptions::new(
        cli.closure.into(),
        cli.tolerance,
        !cli.no_annotation,
        "0",
    );

    write_dxf(&output, &airfoil, &designation, cli.chord, &options)
        .with_context(|| format!("Failed to export {}", output.display()))?;
    println!("Airfoil saved as: {}", output.display());

    if let Some(json) = cli.json {
        write_json(&json, &airfoil, &designation, cli.chord)
            .with_context(|| format!("Failed to export {}", json.display()))?;
        println!("Profile saved as: {}", json.display());
    }

    print_summary(&AirfoilSummary::new(&airfoil, &designation, cli.chord));
    Ok(())
}
