//! Candidate plan ranking.

use super::types::GridPlan;

/// How many plans survive ranking.
const MAX_RANKED_PLANS: usize = 3;

/// Total-order the candidate plans and keep the top 3.
///
/// Precedence: higher `floor(utilization)` first, then fewer boxes, then
/// more distinct box types. The sort is stable, so fully-tied plans keep
/// their generation order. Note the first key compares whole percentage
/// points only: 80.0% and 80.9% tie, while 79.9% and 80.0% do not.
pub fn rank_plans(mut plans: Vec<GridPlan>) -> Vec<GridPlan> {
    plans.sort_by(|a, b| {
        let util_a = a.utilization.floor() as i64;
        let util_b = b.utilization.floor() as i64;
        util_b
            .cmp(&util_a)
            .then_with(|| a.box_count.cmp(&b.box_count))
            .then_with(|| b.box_type_count.cmp(&a.box_type_count))
    });
    plans.truncate(MAX_RANKED_PLANS);
    plans
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan(id: &str, utilization: f64, box_count: usize, box_type_count: usize) -> GridPlan {
        GridPlan {
            id: id.to_string(),
            manufacturer: "m".to_string(),
            depth: 500,
            total_height: 0,
            total_width: 0,
            utilization,
            row_heights: vec![],
            col_widths: vec![],
            placements: vec![],
            box_count,
            box_type_count,
        }
    }

    fn ids(plans: &[GridPlan]) -> Vec<&str> {
        plans.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn higher_utilization_wins() {
        let ranked = rank_plans(vec![plan("low", 70.0, 4, 1), plan("high", 90.0, 4, 1)]);
        assert_eq!(ids(&ranked), vec!["high", "low"]);
    }

    #[test]
    fn floored_utilization_ties_resolve_by_box_count() {
        // 80.6 and 80.2 both floor to 80; fewer boxes wins.
        let ranked = rank_plans(vec![plan("a", 80.6, 5, 1), plan("b", 80.2, 3, 1)]);
        assert_eq!(ids(&ranked), vec!["b", "a"]);
    }

    #[test]
    fn fractional_difference_across_a_whole_point_is_not_a_tie() {
        // 79.9 floors to 79, 80.0 to 80: no tie, box count ignored.
        let ranked = rank_plans(vec![plan("a", 79.9, 1, 1), plan("b", 80.0, 9, 1)]);
        assert_eq!(ids(&ranked), vec!["b", "a"]);
    }

    #[test]
    fn remaining_ties_resolve_by_more_box_types() {
        let ranked = rank_plans(vec![plan("plain", 80.0, 4, 1), plan("varied", 80.0, 4, 3)]);
        assert_eq!(ids(&ranked), vec!["varied", "plain"]);
    }

    #[test]
    fn fully_tied_plans_keep_generation_order() {
        let ranked = rank_plans(vec![
            plan("first", 80.0, 4, 2),
            plan("second", 80.0, 4, 2),
            plan("third", 80.0, 4, 2),
        ]);
        assert_eq!(ids(&ranked), vec!["first", "second", "third"]);
    }

    #[test]
    fn never_returns_more_than_three() {
        let ranked = rank_plans(vec![
            plan("a", 50.0, 1, 1),
            plan("b", 60.0, 1, 1),
            plan("c", 70.0, 1, 1),
            plan("d", 80.0, 1, 1),
            plan("e", 90.0, 1, 1),
        ]);
        assert_eq!(ids(&ranked), vec!["e", "d", "c"]);
    }

    #[test]
    fn short_input_passes_through() {
        let ranked = rank_plans(vec![plan("only", 42.0, 1, 1)]);
        assert_eq!(ids(&ranked), vec!["only"]);
        assert!(rank_plans(vec![]).is_empty());
    }
}
