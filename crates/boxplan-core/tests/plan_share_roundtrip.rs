//! End-to-end pipeline tests: catalog -> plans -> ranking -> token ->
//! restored plan -> substitution, over the shared sample catalog.

use boxplan_core::{
    Dimensions, build_plans, decode_token, encode_token, rank_plans, substitute_box,
};
use boxplan_test_utils::{sample_catalog, small_catalog};

/// A space the tenma 530-line tiles exactly (heights 180+180+230+230,
/// widths 300+390+440) and the muji 445-line tiles with some slack.
fn sample_space() -> Dimensions {
    Dimensions {
        height: 820,
        width: 1130,
        depth: 600,
    }
}

#[test]
fn planning_pipeline_produces_ranked_valid_plans() {
    let catalog = sample_catalog();
    let plans = rank_plans(build_plans(&sample_space(), &catalog));

    assert!(!plans.is_empty() && plans.len() <= 3);

    // The exact tiling must outrank the one with slack.
    assert_eq!(plans[0].manufacturer, "tenma");
    assert!((plans[0].utilization - 100.0).abs() < 1e-9);
    assert_eq!(plans[0].row_heights, vec![180, 180, 230, 230]);
    assert_eq!(plans[0].col_widths, vec![300, 390, 440]);
    assert_eq!(plans[0].box_count, 12);

    // Ranking precedence holds across the returned prefix.
    for pair in plans.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let (fa, fb) = (a.utilization.floor(), b.utilization.floor());
        assert!(
            fa > fb
                || (fa == fb && a.box_count < b.box_count)
                || (fa == fb && a.box_count == b.box_count
                    && a.box_type_count >= b.box_type_count),
            "ranking precedence violated between {} and {}",
            a.id,
            b.id
        );
    }

    // Every generated plan honors the grid invariants.
    for plan in &plans {
        assert_eq!(
            plan.placements.len(),
            plan.row_heights.len() * plan.col_widths.len()
        );
        assert!(plan.utilization >= 0.0 && plan.utilization <= 100.0);
        for p in &plan.placements {
            let b = catalog.iter().find(|b| b.id == p.box_id).expect("known box");
            assert!(b.depth <= sample_space().depth);
            assert_eq!(b.manufacturer, plan.manufacturer);
            assert_eq!(b.depth, plan.depth);
        }
    }
}

#[test]
fn top_plan_survives_a_share_round_trip() {
    let catalog = sample_catalog();
    let space = sample_space();
    let plans = rank_plans(build_plans(&space, &catalog));
    let best = &plans[0];

    let token = encode_token(&space, best).expect("encode");
    let shared = decode_token(&token, &catalog).expect("decode");

    assert_eq!(shared.space, Some(space));
    assert_eq!(shared.plan.manufacturer, best.manufacturer);
    assert_eq!(shared.plan.depth, best.depth);
    assert_eq!(shared.plan.row_heights, best.row_heights);
    assert_eq!(shared.plan.col_widths, best.col_widths);
    assert_eq!(shared.plan.placements, best.placements);
    assert_eq!(shared.plan.box_count, best.box_count);
    assert_eq!(shared.plan.box_type_count, best.box_type_count);
    assert!((shared.plan.utilization - best.utilization).abs() <= 0.01);
    assert_ne!(shared.plan.id, best.id, "decoded plan gets a fresh id");
}

#[test]
fn shared_plan_can_be_edited_and_reshared() {
    let catalog = small_catalog();
    let space = Dimensions {
        height: 400,
        width: 400,
        depth: 400,
    };
    let plans = rank_plans(build_plans(&space, &catalog));
    let token = encode_token(&space, &plans[0]).expect("encode");

    let shared = decode_token(&token, &catalog).expect("decode");
    let restored_space = shared.space.expect("token carries the space");
    let swapped = substitute_box(&restored_space, &shared.plan, &catalog, "s-22", 0, 0)
        .expect("swap should succeed");

    assert_eq!(swapped.row_heights[0], 200);
    assert_eq!(swapped.col_widths[0], 200);
    assert_eq!(swapped.id, shared.plan.id, "substitution keeps the id");

    let retoken = encode_token(&restored_space, &swapped).expect("re-encode");
    let reshared = decode_token(&retoken, &catalog).expect("re-decode");
    assert_eq!(reshared.plan.row_heights, swapped.row_heights);
    assert_eq!(reshared.plan.placements, swapped.placements);
}

#[test]
fn infeasible_space_yields_no_plans_without_error() {
    let catalog = sample_catalog();
    // Narrower than every box in the catalog.
    let space = Dimensions {
        height: 100,
        width: 100,
        depth: 100,
    };
    let plans = rank_plans(build_plans(&space, &catalog));
    assert!(plans.is_empty());
}
