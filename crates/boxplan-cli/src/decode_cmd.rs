//! Handler for `boxplan decode`.

use std::path::Path;

use anyhow::{Context, Result, bail};

use boxplan_core::catalog::load_catalog;
use boxplan_core::decode_token;

use crate::plan_cmd::render_plan;

/// Restore a shared plan from a token and print it.
///
/// An undecodable token is reported as an error (nothing to restore),
/// not a panic.
pub fn run_decode(catalog_path: &Path, token: &str, json: bool) -> Result<()> {
    let catalog = load_catalog(catalog_path)
        .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;

    let Some(shared) = decode_token(token, &catalog) else {
        bail!("token could not be decoded by any known format; nothing to restore");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&shared.plan)?);
        return Ok(());
    }

    match shared.space {
        Some(space) => println!(
            "Shared plan for a {}x{}x{} mm space:",
            space.height, space.width, space.depth
        ),
        None => println!("Shared plan (token carries no space dimensions):"),
    }
    println!();
    print!("{}", render_plan(&shared.plan));
    Ok(())
}
