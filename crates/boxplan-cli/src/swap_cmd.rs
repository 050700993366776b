//! Handler for `boxplan swap`.

use std::path::Path;

use anyhow::{Context, Result, bail};

use boxplan_core::catalog::load_catalog;
use boxplan_core::{decode_token, encode_token, substitute_box};

use crate::plan_cmd::render_plan;

/// Decode a shared plan, swap the box at one cell, and print the rebuilt
/// plan together with its new share token.
pub fn run_swap(
    catalog_path: &Path,
    token: &str,
    box_id: &str,
    row: usize,
    col: usize,
) -> Result<()> {
    let catalog = load_catalog(catalog_path)
        .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;

    let Some(shared) = decode_token(token, &catalog) else {
        bail!("token could not be decoded by any known format; nothing to edit");
    };
    let Some(space) = shared.space else {
        bail!("this token does not carry the space dimensions, so the plan cannot be rebuilt");
    };

    let Some(updated) = substitute_box(&space, &shared.plan, &catalog, box_id, row, col) else {
        bail!(
            "cannot swap in {box_id:?} at ({row}, {col}): unknown box id or cell out of range"
        );
    };

    println!("Rebuilt plan:");
    println!();
    print!("{}", render_plan(&updated));

    // The rebuilt grid may no longer fit the shared space.
    if updated.total_height > space.height {
        println!();
        println!(
            "Warning: plan height {} mm exceeds the space height {} mm.",
            updated.total_height, space.height
        );
    }

    let new_token = encode_token(&space, &updated).context("failed to encode share token")?;
    println!();
    println!("Share token: {new_token}");
    Ok(())
}
