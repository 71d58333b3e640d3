//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use pathviz_core::Point;
use pathviz_paths::{Algorithm, BoardConfig};

/// Watch BFS, DFS, Dijkstra and A* explore a tile grid
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Search algorithm to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmArg::Astar)]
    pub algorithm: AlgorithmArg,

    /// Canvas width in pixels
    #[arg(long, default_value_t = 1000)]
    pub width: i32,

    /// Canvas height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: i32,

    /// Tile side in pixels
    #[arg(long, default_value_t = 20)]
    pub tile: i32,

    /// Text layout to load instead of an empty canvas (`#` `.` `S` `E`)
    #[arg(short, long)]
    pub layout: Option<PathBuf>,

    /// Fill empty cells with barriers at this density (0 to 1)
    #[arg(long, value_name = "DENSITY")]
    pub scatter: Option<f64>,

    /// Seed for --scatter
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause after each visited cell, in milliseconds
    #[arg(long, default_value_t = 10)]
    pub delay_ms: u64,

    /// Print the finished run as text instead of animating it
    #[arg(long)]
    pub plain: bool,

    /// Run every algorithm and print a comparison table
    #[arg(long)]
    pub compare: bool,

    /// Start the animated run at once instead of editing the board first
    #[arg(long)]
    pub no_edit: bool,

    /// Leave the outer ring of cells open
    #[arg(long)]
    pub no_border: bool,

    /// Start cell
    #[arg(long, value_name = "COL,ROW")]
    pub start: Option<Point>,

    /// End cell
    #[arg(long, value_name = "COL,ROW")]
    pub end: Option<Point>,
}

impl Args {
    /// Board parameters for a run without a layout.
    pub fn board_config(&self) -> BoardConfig {
        let defaults = BoardConfig::default();
        BoardConfig {
            width: self.width,
            height: self.height,
            tile_size: self.tile,
            start: self.start.or(defaults.start),
            end: self.end.or(defaults.end),
            border: !self.no_border,
        }
    }
}

/// Algorithm names accepted on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlgorithmArg {
    Bfs,
    Dfs,
    Dijkstra,
    Astar,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(a: AlgorithmArg) -> Self {
        match a {
            AlgorithmArg::Bfs => Algorithm::Bfs,
            AlgorithmArg::Dfs => Algorithm::Dfs,
            AlgorithmArg::Dijkstra => Algorithm::Dijkstra,
            AlgorithmArg::Astar => Algorithm::AStar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_board_defaults() {
        let args = Args::parse_from(["pathviz"]);
        assert_eq!(args.board_config(), BoardConfig::default());
        assert_eq!(Algorithm::from(args.algorithm), Algorithm::AStar);
    }

    #[test]
    fn parses_flags() {
        let args = Args::parse_from([
            "pathviz",
            "--algorithm",
            "dijkstra",
            "--tile",
            "10",
            "--start",
            "2,3",
            "--end",
            "40,20",
            "--no-border",
            "--scatter",
            "0.25",
            "--seed",
            "9",
            "--plain",
        ]);
        assert_eq!(Algorithm::from(args.algorithm), Algorithm::Dijkstra);
        let cfg = args.board_config();
        assert_eq!(cfg.tile_size, 10);
        assert_eq!(cfg.start, Some(Point::new(2, 3)));
        assert_eq!(cfg.end, Some(Point::new(40, 20)));
        assert!(!cfg.border);
        assert_eq!(args.scatter, Some(0.25));
        assert_eq!(args.seed, Some(9));
        assert!(args.plain && !args.compare);
        assert!(!args.no_edit);
        assert!(Args::parse_from(["pathviz", "--no-edit"]).no_edit);
    }

    #[test]
    fn rejects_bad_cell() {
        assert!(Args::try_parse_from(["pathviz", "--start", "3"]).is_err());
        assert!(Args::try_parse_from(["pathviz", "-a", "greedy"]).is_err());
    }
}
