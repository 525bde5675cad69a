use std::env;
use std::process::ExitCode;
use std::time::Duration;

use border_swap::{Grid, SearchConfig};

const INSTANCES: &[&[&[u32]]] = &[
    &[&[1, 2, 3], &[1, 2, 2], &[3, 3, 1]],
    &[&[1, 2, 2, 2], &[1, 2, 1, 1]],
    &[&[1, 2, 2, 2], &[1, 3, 3, 3], &[1, 2, 1, 1], &[1, 1, 3, 2]],
    &[&[1, 1, 2, 1, 1], &[2, 2, 1, 2, 1], &[1, 1, 2, 1, 2], &[2, 1, 1, 2, 1]],
    &[
        &[1, 2, 2, 2, 2, 1, 2, 2, 2, 2],
        &[1, 3, 3, 3, 4, 1, 3, 3, 3, 4],
        &[1, 2, 1, 4, 3, 1, 2, 1, 4, 3],
        &[1, 4, 4, 4, 3, 1, 4, 4, 4, 3],
    ],
    &[
        &[1, 1, 2, 1, 1, 1, 1, 2, 1, 1],
        &[2, 2, 1, 2, 1, 2, 2, 1, 2, 1],
        &[1, 1, 2, 1, 2, 1, 1, 2, 1, 2],
        &[2, 1, 1, 2, 1, 2, 1, 1, 2, 1],
        &[1, 1, 2, 1, 1, 1, 1, 2, 1, 1],
        &[2, 2, 1, 2, 1, 2, 2, 1, 2, 1],
        &[1, 1, 2, 1, 2, 1, 1, 2, 1, 2],
        &[2, 1, 1, 2, 1, 2, 1, 1, 2, 1],
    ],
    &[
        &[1, 1, 2, 8, 8, 1, 4, 3, 1, 4],
        &[2, 2, 1, 8, 3, 8, 4, 3, 2, 1],
        &[1, 1, 8, 8, 3, 1, 6, 2, 1, 4],
        &[2, 1, 1, 3, 1, 2, 1, 1, 4, 4],
        &[1, 7, 7, 3, 1, 1, 5, 6, 4, 4],
        &[2, 2, 1, 3, 1, 2, 2, 1, 6, 6],
        &[1, 7, 2, 7, 5, 5, 5, 5, 1, 6],
        &[2, 7, 7, 7, 1, 5, 5, 1, 6, 6],
    ],
];

// loose and tight border-count targets for each instance; the last three usually run into the time budget
const LOOSE: &[i64] = &[6, 4, 10, 10, 30, 41, 70];
const TIGHT: &[i64] = &[5, 2, 9, 9, 25, 35, 62];

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let thresholds = match args.next().as_deref() {
        None | Some("loose") => LOOSE,
        Some("tight") => TIGHT,
        Some(other) => {
            eprintln!("unknown threshold table {other:?}, expected \"loose\" or \"tight\"");
            return ExitCode::FAILURE;
        }
    };
    let budget = match args.next().map(|secs| secs.parse::<u64>()) {
        None => Duration::from_secs(60),
        Some(Ok(secs)) => Duration::from_secs(secs),
        Some(Err(err)) => {
            eprintln!("bad time budget: {err}");
            return ExitCode::FAILURE;
        }
    };

    for (index, (rows, threshold)) in INSTANCES.iter().zip(thresholds).enumerate() {
        let grid = match Grid::from_rows(rows.iter().map(|row| row.iter().copied())) {
            Ok(grid) => grid,
            Err(err) => {
                eprintln!("instance {}: {err}", index + 1);
                return ExitCode::FAILURE;
            }
        };
        let config = match SearchConfig::new(*threshold) {
            Ok(config) => config.with_deadline(budget),
            Err(err) => {
                eprintln!("instance {}: {err}", index + 1);
                return ExitCode::FAILURE;
            }
        };

        log::info!("Solving instance {} for at most {} borders.", index + 1, threshold);
        let report = config.search(&grid);

        println!("instance {}:", index + 1);
        println!("{grid}");
        for (step, replayed) in report.replay(&grid).enumerate() {
            match replayed {
                Ok((action, state)) => {
                    println!("swap {}: {action}", step + 1);
                    println!("{state}");
                }
                Err(err) => {
                    eprintln!("instance {}: swap {} does not replay: {err}", index + 1, step + 1);
                    return ExitCode::FAILURE;
                }
            }
        }
        println!("{report}");
    }

    ExitCode::SUCCESS
}
