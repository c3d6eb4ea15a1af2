//! `imgslider` command line: builds the image pair manifest a page loads
//! its sliders from, and prints the effective slider configuration.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use imgslider::constants::{DEFAULT_ASSET_PREFIX, MANIFEST_FILE_NAME};
use imgslider::{SliderConfig, manifest};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "imgslider", version, about = "Before/after image slider tooling")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Scan a directory for <name>_a / <name>_b images and write the manifest
    Scan {
        /// Directory holding the images
        #[arg(default_value = DEFAULT_ASSET_PREFIX)]
        dir: PathBuf,

        /// Path prefix written in front of each image
        #[arg(long, default_value = DEFAULT_ASSET_PREFIX)]
        prefix: String,

        /// Manifest path (defaults to <dir>/image_list.json)
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Print the manifest instead of writing it
        #[arg(long)]
        dry_run: bool,
    },
    /// Print the effective slider configuration as JSON
    Config {
        /// Config file (defaults to the user config directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Scan {
            dir,
            prefix,
            output,
            dry_run,
        } => scan(dir, &prefix, output, dry_run),
        Command::Config { path } => print_config(path),
    }
}

fn scan(dir: PathBuf, prefix: &str, output: Option<PathBuf>, dry_run: bool) -> Result<()> {
    let entries = manifest::scan_directory(&dir, prefix)
        .with_context(|| format!("Failed to scan {}", dir.display()))?;

    if dry_run {
        println!("{}", manifest::to_json(&entries)?);
        return Ok(());
    }

    let output = output.unwrap_or_else(|| dir.join(MANIFEST_FILE_NAME));
    manifest::write_manifest(&output, &entries)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("{} has been generated", output.display());
    println!("Found {} image pairs:", entries.len());
    for entry in &entries {
        println!("  {}: {} | {}", entry.name, entry.before, entry.after);
    }
    Ok(())
}

fn print_config(path: Option<PathBuf>) -> Result<()> {
    let config = match path {
        Some(path) => SliderConfig::load_from(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SliderConfig::load(),
    };
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}
