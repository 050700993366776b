//! Handler for `boxplan plan`.

use std::path::Path;

use anyhow::{Context, Result};

use boxplan_core::catalog::load_catalog;
use boxplan_core::{Dimensions, GridPlan, build_plans, encode_token, rank_plans};

/// Compute, rank, and print tiling plans for a space.
pub fn run_plan(
    catalog_path: &Path,
    space: Dimensions,
    json: bool,
    share: bool,
) -> Result<()> {
    // 1. Load the catalog.
    let catalog = load_catalog(catalog_path)
        .with_context(|| format!("failed to load catalog {}", catalog_path.display()))?;

    // 2. Build and rank.
    let plans = rank_plans(build_plans(&space, &catalog));

    // 3. Print.
    if json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(());
    }

    if plans.is_empty() {
        println!(
            "No plan fits a {}x{}x{} mm space with this catalog.",
            space.height, space.width, space.depth
        );
        return Ok(());
    }

    println!(
        "Found {} plan(s) for {}x{}x{} mm:",
        plans.len(),
        space.height,
        space.width,
        space.depth
    );
    for (i, plan) in plans.iter().enumerate() {
        println!();
        println!("#{}", i + 1);
        print!("{}", render_plan(plan));
    }

    // 4. Optionally print the share token for the top-ranked plan.
    if share {
        let token = encode_token(&space, &plans[0]).context("failed to encode share token")?;
        println!();
        println!("Share token (top plan): {token}");
    }

    Ok(())
}

/// Plain-text summary of one plan, one `  key: value` line per field.
pub fn render_plan(plan: &GridPlan) -> String {
    let mut out = String::new();
    out.push_str(&format!("  Plan ID:       {}\n", plan.id));
    out.push_str(&format!("  Manufacturer:  {}\n", plan.manufacturer));
    out.push_str(&format!("  Depth:         {} mm\n", plan.depth));
    out.push_str(&format!(
        "  Grid:          {} rows x {} cols ({} boxes, {} types)\n",
        plan.row_heights.len(),
        plan.col_widths.len(),
        plan.box_count,
        plan.box_type_count
    ));
    out.push_str(&format!(
        "  Size:          {} x {} mm\n",
        plan.total_height, plan.total_width
    ));
    out.push_str(&format!("  Utilization:   {:.2}%\n", plan.utilization));
    out.push_str(&format!(
        "  Row heights:   {}\n",
        join_lengths(&plan.row_heights)
    ));
    out.push_str(&format!(
        "  Col widths:    {}\n",
        join_lengths(&plan.col_widths)
    ));
    out
}

fn join_lengths(lengths: &[u32]) -> String {
    lengths
        .iter()
        .map(|l| l.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use boxplan_core::Placement;

    #[test]
    fn render_includes_every_metric() {
        let plan = GridPlan {
            id: "plan-m-500-0".to_string(),
            manufacturer: "m".to_string(),
            depth: 500,
            total_height: 300,
            total_width: 200,
            utilization: 87.654,
            row_heights: vec![100, 200],
            col_widths: vec![200],
            placements: vec![
                Placement { box_id: "a".to_string(), row: 0, col: 0 },
                Placement { box_id: "b".to_string(), row: 1, col: 0 },
            ],
            box_count: 2,
            box_type_count: 2,
        };

        let text = render_plan(&plan);
        assert!(text.contains("plan-m-500-0"));
        assert!(text.contains("2 rows x 1 cols (2 boxes, 2 types)"));
        assert!(text.contains("87.65%"));
        assert!(text.contains("100, 200"));
    }
}
