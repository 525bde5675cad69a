use border_swap::{apply_swap, border_count, candidate_actions, search, Deadline, Grid, Termination};
use proptest::prelude::*;
use proptest::sample::Index;

/// Grids of up to 3x3 cells over three labels, small enough to search exhaustively.
fn small_grid() -> impl Strategy<Value = Grid<u8>> {
    (1usize..=3, 1usize..=3)
        .prop_flat_map(|(rows, cols)| prop::collection::vec(prop::collection::vec(0u8..3, cols), rows))
        .prop_map(|rows| Grid::from_rows(rows).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn border_count_ignores_transposition(grid in small_grid()) {
        prop_assert_eq!(border_count(&grid.transpose()), border_count(&grid));
    }

    #[test]
    fn swap_is_self_inverse(grid in small_grid(), pick in any::<Index>()) {
        let actions = candidate_actions(&grid).collect::<Vec<_>>();
        prop_assume!(!actions.is_empty());
        let action = *pick.get(&actions);

        let once = apply_swap(&grid, &action).unwrap();
        prop_assert_eq!(apply_swap(&once, &action).unwrap(), grid);
    }

    #[test]
    fn success_replays_to_result(grid in small_grid(), threshold in 0usize..=12) {
        let report = search(&grid, threshold, Deadline::default());
        prop_assert_ne!(report.termination(), Termination::TimedOut);

        match report.result() {
            Some(result) => {
                let replayed = report.path()
                    .iter()
                    .try_fold(grid.clone(), |current, action| apply_swap(&current, action))
                    .unwrap();
                prop_assert_eq!(&replayed, result);
                prop_assert!(border_count(result) <= threshold);
                prop_assert_eq!(report.final_cost(), Some(border_count(result)));
            }
            None => {
                prop_assert!(report.path().is_empty());
                prop_assert_eq!(report.final_cost(), None);
                prop_assert!(border_count(&grid) > threshold);
            }
        }
    }

    #[test]
    fn root_within_threshold_needs_no_expansion(grid in small_grid(), slack in 0usize..3) {
        let report = search(&grid, border_count(&grid) + slack, Deadline::default());

        prop_assert!(report.is_success());
        prop_assert_eq!(report.metrics().generations, 1);
        prop_assert_eq!(report.metrics().expansions, 0);
        prop_assert!(report.path().is_empty());
        prop_assert_eq!(report.result(), Some(&grid));
    }

    #[test]
    fn expansions_cover_every_visited_grid(grid in small_grid(), threshold in 0usize..=12) {
        let metrics = *search(&grid, threshold, Deadline::default()).metrics();

        prop_assert!(metrics.visited >= 1);
        prop_assert!(metrics.expansions >= (metrics.visited - 1) as u64);
        prop_assert!(metrics.generations <= metrics.visited as u64);
    }

    #[test]
    fn repeated_searches_agree(grid in small_grid(), threshold in 0usize..=12) {
        let first = search(&grid, threshold, Deadline::default());
        let second = search(&grid, threshold, Deadline::default());

        prop_assert_eq!(first.termination(), second.termination());
        prop_assert_eq!(first.path(), second.path());
        prop_assert_eq!(first.result(), second.result());
        prop_assert_eq!(first.metrics().generations, second.metrics().generations);
        prop_assert_eq!(first.metrics().expansions, second.metrics().expansions);
    }

    #[test]
    fn no_shorter_solution_exists(grid in small_grid(), threshold in 0usize..=12) {
        let report = search(&grid, threshold, Deadline::default());
        prop_assume!(report.is_success());

        // every grid reachable in fewer swaps is above the threshold
        let mut layer = vec![grid.clone()];
        for _ in 0..report.path().len() {
            prop_assert!(layer.iter().all(|g| border_count(g) > threshold));
            layer = layer.iter()
                .flat_map(|g| candidate_actions(g).map(move |action| apply_swap(g, &action).unwrap()))
                .collect();
            layer.sort_by_key(|g| g.to_rows());
            layer.dedup();
        }
    }
}
