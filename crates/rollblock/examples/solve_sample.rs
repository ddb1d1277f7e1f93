//! Timing probe for the bundled 6×10 puzzle.
//!
//! Purpose
//! - Show how much of the tree each pruning mode visits on the reference grid
//!   and how long it takes. `Prune::Exhaustive` is left out: on this grid it
//!   does not finish in reasonable time.
//!
//! Code: crates/rollblock/src/search/dfs.rs::solve_with_cfg

use std::time::Instant;

use rollblock::api::{locate, replay, sample_grid, solve_with_cfg, Prune, Replay, SearchCfg};

fn main() {
    let grid = sample_grid();
    let start = locate(&grid).expect("sample grid has a start marker");
    println!("{grid}\n");

    for prune in [Prune::Incumbent, Prune::DistanceBound] {
        let cfg = SearchCfg {
            prune,
            max_depth: None,
        };
        let t0 = Instant::now();
        let sol = solve_with_cfg(&start, &grid, cfg);
        let elapsed_ms = t0.elapsed().as_secs_f64() * 1e3;
        let path = sol.path.expect("sample grid is solvable");
        assert_eq!(
            replay(&start, &path, &grid),
            Replay::ReachedHole { steps: path.len() }
        );
        println!(
            "prune={prune:?} path={path} len={} nodes={} pruned={} time_ms={elapsed_ms:.3}",
            path.len(),
            sol.stats.nodes,
            sol.stats.pruned
        );
    }
}
