use std::time::Duration;

use border_swap::{border_count, Grid, SearchConfig, Termination};
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn instance(rows: &[&[u32]]) -> Grid<u32> {
    Grid::from_rows(rows.iter().map(|row| row.iter().copied())).unwrap()
}

#[test]
fn independent_searches_in_parallel() {
    init_logging();

    let instances = vec![
        (instance(&[&[1, 2, 3], &[1, 2, 2], &[3, 3, 1]]), 6),
        (instance(&[&[1, 2, 2, 2], &[1, 2, 1, 1]]), 4),
        (instance(&[&[1, 2, 2, 2], &[1, 2, 1, 1]]), 2),
        (instance(&[&[1, 2, 2, 2], &[1, 3, 3, 3], &[1, 2, 1, 1], &[1, 1, 3, 2]]), 10),
    ];

    let parallel = instances.par_iter()
        .map(|(grid, threshold)| SearchConfig::new(*threshold).unwrap().search(grid))
        .collect::<Vec<_>>();

    for ((grid, threshold), report) in instances.iter().zip(&parallel) {
        log::debug!("Threshold {}:\n{}{}", threshold, grid, report);

        let sequential = SearchConfig::new(*threshold).unwrap().search(grid);
        assert!(report.is_success());
        assert_eq!(report.path(), sequential.path());
        assert_eq!(report.metrics().expansions, sequential.metrics().expansions);
        assert!(border_count(report.result().unwrap()) as i64 <= *threshold);
    }

    let lengths = parallel.iter().map(|report| report.path().len()).collect::<Vec<_>>();
    assert_eq!(lengths, vec![3, 2, 4, 4]);
}

#[test]
fn four_by_four_instance() {
    init_logging();

    let root = instance(&[&[1, 2, 2, 2], &[1, 3, 3, 3], &[1, 2, 1, 1], &[1, 1, 3, 2]]);
    assert_eq!(border_count(&root), 15);

    let report = SearchConfig::new(10).unwrap().search(&root);
    assert_eq!(
        report.path().iter().map(|action| action.as_indices()).collect::<Vec<_>>(),
        vec![((1, 1), (2, 1)), ((2, 1), (2, 2)), ((2, 2), (2, 3)), ((2, 2), (3, 2))]
    );
    assert_eq!(report.result().unwrap().to_rows(), vec![
        vec![1, 2, 2, 2],
        vec![1, 2, 3, 3],
        vec![1, 1, 3, 3],
        vec![1, 1, 1, 2],
    ]);
    assert_eq!(report.final_cost(), Some(10));

    let replayed = report.replay(&root).last().map(|step| step.unwrap().1);
    assert_eq!(replayed.as_ref(), report.result());
}

#[test]
fn large_instance_times_out() {
    init_logging();

    let root = instance(&[
        &[1, 2, 2, 2, 2, 1, 2, 2, 2, 2],
        &[1, 3, 3, 3, 4, 1, 3, 3, 3, 4],
        &[1, 2, 1, 4, 3, 1, 2, 1, 4, 3],
        &[1, 4, 4, 4, 3, 1, 4, 4, 4, 3],
    ]);

    let report = SearchConfig::new(0).unwrap()
        .with_deadline(Duration::from_millis(50))
        .search(&root);

    assert_eq!(report.termination(), Termination::TimedOut);
    assert!(report.result().is_none());
    assert!(report.path().is_empty());
    assert_eq!(report.final_cost(), None);
    assert!(report.metrics().generations >= 1);
    assert!(report.metrics().elapsed >= Duration::from_millis(50));
}
