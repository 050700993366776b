mod config;
mod decode_cmd;
mod plan_cmd;
mod swap_cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};

use boxplan_core::Dimensions;

use config::{CatalogSection, ConfigFile};

#[derive(Parser)]
#[command(name = "boxplan", about = "Storage-space tiling planner with shareable plan tokens")]
struct Cli {
    /// Catalog JSON file (overrides BOXPLAN_CATALOG env var and config file)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the boxplan config file (records the catalog path)
    Init {
        /// Path to the catalog JSON file
        catalog_file: String,
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Compute tiling plans for a space (dimensions in millimeters)
    Plan {
        /// Space height in mm
        height: u32,
        /// Space width in mm
        width: u32,
        /// Space depth in mm
        depth: u32,
        /// Print plans as JSON
        #[arg(long)]
        json: bool,
        /// Print a share token for the top-ranked plan
        #[arg(long)]
        share: bool,
    },
    /// Restore a shared plan from a token
    Decode {
        /// The share token
        token: String,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
    /// Swap one box in a shared plan and print the rebuilt plan
    Swap {
        /// The share token
        token: String,
        /// Replacement box id
        #[arg(long = "box")]
        box_id: String,
        /// Row of the cell to edit (0-based)
        #[arg(long)]
        row: usize,
        /// Column of the cell to edit (0-based)
        #[arg(long)]
        col: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init { catalog_file, force } => cmd_init(&catalog_file, force),
        Commands::Plan {
            height,
            width,
            depth,
            json,
            share,
        } => {
            let catalog_path = config::resolve_catalog_path(cli.catalog.as_deref())?;
            let space = Dimensions {
                height,
                width,
                depth,
            };
            plan_cmd::run_plan(&catalog_path, space, json, share)
        }
        Commands::Decode { token, json } => {
            let catalog_path = config::resolve_catalog_path(cli.catalog.as_deref())?;
            decode_cmd::run_decode(&catalog_path, &token, json)
        }
        Commands::Swap {
            token,
            box_id,
            row,
            col,
        } => {
            let catalog_path = config::resolve_catalog_path(cli.catalog.as_deref())?;
            swap_cmd::run_swap(&catalog_path, &token, &box_id, row, col)
        }
    }
}

/// Write the config file recording the catalog path.
fn cmd_init(catalog_file: &str, force: bool) -> Result<()> {
    let path = config::config_path();
    if path.exists() && !force {
        anyhow::bail!(
            "config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    // Validate the catalog before recording it.
    let catalog = boxplan_core::catalog::load_catalog(std::path::Path::new(catalog_file))?;

    config::save_config(&ConfigFile {
        catalog: CatalogSection {
            path: catalog_file.to_string(),
        },
    })?;

    println!("Config written to {}", path.display());
    println!("  Catalog: {} ({} boxes)", catalog_file, catalog.len());
    Ok(())
}
