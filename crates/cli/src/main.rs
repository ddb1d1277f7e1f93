use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rollblock::api::{
    draw_grid, locate, replay, sample_grid, solve_with_cfg, Grid, GridCfg, Path, Prune, Replay,
    ReplayToken, SearchCfg, SearchStats,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "rollblock")]
#[command(about = "Shortest roll sequences for rolling-block puzzles")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve a grid file (or the bundled sample) and print the roll sequence
    Solve {
        /// Grid file: rows of 0/1/X/B; the bundled sample when omitted
        #[arg(long)]
        grid: Option<PathBuf>,
        /// exhaustive | incumbent | distance
        #[arg(long, default_value = "distance")]
        prune: Prune,
        #[arg(long)]
        max_depth: Option<usize>,
        /// Print a JSON object instead of the bare path
        #[arg(long)]
        json: bool,
    },
    /// Replay a U/D/L/R string and report where the block ends up
    Replay {
        #[arg(long)]
        path: String,
        #[arg(long)]
        grid: Option<PathBuf>,
    },
    /// Print a random grid from the sampler
    Sample {
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 8)]
        width: usize,
        #[arg(long, default_value_t = 6)]
        height: usize,
        #[arg(long, default_value_t = 0.7)]
        density: f64,
        #[arg(long)]
        ragged: bool,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    match cmd.action {
        Action::Solve {
            grid,
            prune,
            max_depth,
            json,
        } => {
            let cfg = SearchCfg { prune, max_depth };
            println!("{}", solve(grid, cfg, json)?);
            Ok(())
        }
        Action::Replay { path, grid } => {
            println!("{}", replay_cmd(&path, grid)?);
            Ok(())
        }
        Action::Sample {
            seed,
            index,
            width,
            height,
            density,
            ragged,
        } => {
            let cfg = GridCfg {
                width,
                height,
                floor_density: density,
                ragged,
            };
            tracing::info!(seed, index, width, height, density, ragged, "sample");
            let grid = draw_grid(cfg, ReplayToken::new(seed, index))?;
            println!("{grid}");
            Ok(())
        }
    }
}

/// Read a grid file, or fall back to the bundled sample.
fn load_grid(path: Option<PathBuf>) -> Result<Grid> {
    match path {
        None => Ok(sample_grid()),
        Some(p) => {
            let text = std::fs::read_to_string(&p)
                .with_context(|| format!("reading grid {}", p.display()))?;
            let grid =
                Grid::parse(&text).with_context(|| format!("parsing grid {}", p.display()))?;
            tracing::debug!(
                file = %p.display(),
                rows = grid.height(),
                cols = grid.width(),
                "grid_loaded"
            );
            Ok(grid)
        }
    }
}

#[derive(Serialize)]
struct SolveReport {
    path: Option<String>,
    length: Option<usize>,
    stats: StatsReport,
}

#[derive(Serialize)]
struct StatsReport {
    nodes: u64,
    out_of_bounds: u64,
    revisits: u64,
    pruned: u64,
    improvements: u64,
    reachable: u64,
}

impl From<SearchStats> for StatsReport {
    fn from(s: SearchStats) -> Self {
        Self {
            nodes: s.nodes,
            out_of_bounds: s.out_of_bounds,
            revisits: s.revisits,
            pruned: s.pruned,
            improvements: s.improvements,
            reachable: s.reachable,
        }
    }
}

fn solve(grid: Option<PathBuf>, cfg: SearchCfg, json: bool) -> Result<String> {
    let grid = load_grid(grid)?;
    let start = locate(&grid)?;
    tracing::info!(prune = ?cfg.prune, max_depth = ?cfg.max_depth, "solve");
    let sol = solve_with_cfg(&start, &grid, cfg);
    let path = sol.path.as_ref().map(Path::to_string);
    tracing::info!(
        path = path.as_deref().unwrap_or("-"),
        nodes = sol.stats.nodes,
        pruned = sol.stats.pruned,
        "solved"
    );
    if json {
        let report = SolveReport {
            length: sol.path.as_ref().map(Path::len),
            path,
            stats: sol.stats.into(),
        };
        return Ok(serde_json::to_string_pretty(&report)?);
    }
    Ok(path.unwrap_or_else(|| "no solution".to_string()))
}

fn replay_cmd(path: &str, grid: Option<PathBuf>) -> Result<String> {
    let grid = load_grid(grid)?;
    let start = locate(&grid)?;
    let path: Path = path
        .parse()
        .with_context(|| format!("parsing path {path:?}"))?;
    let outcome = replay(&start, &path, &grid);
    tracing::debug!(?outcome, "replayed");
    Ok(match outcome {
        Replay::ReachedHole { steps } => format!("reached hole after {steps} rolls"),
        Replay::FellOff { step } => format!("fell off the board at roll {step}"),
        Replay::Revisited { step } => format!("revisited an earlier state at roll {step}"),
        Replay::PassedHole { step } => {
            format!("entered the hole at roll {step} with rolls left over")
        }
        Replay::Stranded { state } => {
            let [a, b] = state.footprint();
            format!("stranded on ({}, {}) and ({}, {})", a.0, a.1, b.0, b.1)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn grid_file(text: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(text.as_bytes()).unwrap();
        f
    }

    #[test]
    fn solve_sample_prints_path() {
        let out = solve(None, SearchCfg::default(), false).unwrap();
        assert_eq!(out, "RDDRRDR");
    }

    #[test]
    fn solve_file_reports_json() {
        let f = grid_file("B1XX\n");
        let out = solve(Some(f.path().to_path_buf()), SearchCfg::default(), true).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["path"], "RR");
        assert_eq!(v["length"], 2);
        assert!(v["stats"]["nodes"].as_u64().unwrap() >= 1);
    }

    #[test]
    fn unsolvable_file_says_so() {
        let f = grid_file("000\n0B0\n000\n11X\n");
        let cfg = SearchCfg::exhaustive();
        let path = Some(f.path().to_path_buf());
        assert_eq!(solve(path.clone(), cfg, false).unwrap(), "no solution");
        let v: serde_json::Value = serde_json::from_str(&solve(path, cfg, true).unwrap()).unwrap();
        assert!(v["path"].is_null());
    }

    #[test]
    fn bad_files_carry_context() {
        let f = grid_file("1B\n1?");
        let err = load_grid(Some(f.path().to_path_buf())).unwrap_err();
        assert!(format!("{err:#}").contains("unknown symbol"));
        let missing = load_grid(Some(PathBuf::from("/nonexistent/grid.txt"))).unwrap_err();
        assert!(missing.to_string().starts_with("reading grid"));
    }

    #[test]
    fn replay_describes_outcomes() {
        assert_eq!(
            replay_cmd("RDDRRDR", None).unwrap(),
            "reached hole after 7 rolls"
        );
        assert_eq!(
            replay_cmd("U", None).unwrap(),
            "fell off the board at roll 1"
        );
        assert_eq!(
            replay_cmd("R", None).unwrap(),
            "stranded on (2, 1) and (3, 1)"
        );
        assert!(replay_cmd("RQ", None).is_err());
    }

    #[test]
    fn cli_parses_flags() {
        let cmd = Cmd::try_parse_from([
            "rollblock", "solve", "--prune", "incumbent", "--max-depth", "9", "--json",
        ])
        .unwrap();
        match cmd.action {
            Action::Solve {
                prune,
                max_depth,
                json,
                grid,
            } => {
                assert_eq!(prune, Prune::Incumbent);
                assert_eq!(max_depth, Some(9));
                assert!(json && grid.is_none());
            }
            _ => panic!("expected solve"),
        }
        assert!(Cmd::try_parse_from(["rollblock", "solve", "--prune", "bfs"]).is_err());
    }
}
