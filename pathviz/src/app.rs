//! Builds the board from the command line and drives one of three front
//! ends: the animated terminal view, a plain text dump, or a comparison of
//! every algorithm.

use std::error::Error;
use std::fmt::Write as _;
use std::fs;
use std::time::Duration;

use pathviz_core::Point;
use pathviz_crossterm::{TerminalView, render_text};
use pathviz_paths::{Algorithm, Board, BoardError, Recorder, SearchOutcome, SearchReport};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::Args;
use crate::layout::Layout;
use crate::scatter::scatter;

/// The board described by `args`: a layout file if one is given, otherwise
/// an empty canvas, then the marker overrides and the random scatter.
pub fn build_board(args: &Args) -> Result<Board, Box<dyn Error>> {
    let mut board = match &args.layout {
        Some(path) => {
            let text = fs::read_to_string(path)?;
            let mut board = Layout::parse(&text)?.to_board(!args.no_border)?;
            override_markers(&mut board, args.start, args.end)?;
            log::info!("loaded layout {}", path.display());
            board
        }
        None => Board::new(args.board_config())?,
    };

    if let Some(density) = args.scatter {
        let added = match args.seed {
            Some(seed) => scatter(&mut board, density, &mut StdRng::seed_from_u64(seed)),
            None => scatter(&mut board, density, &mut rand::rng()),
        };
        log::info!("scattered {added} barriers");
    }
    Ok(board)
}

/// Replace the layout's markers with `start` and `end` where given. Only the
/// final pair is validated, so the two markers may trade places.
fn override_markers(
    board: &mut Board,
    start: Option<Point>,
    end: Option<Point>,
) -> Result<(), BoardError> {
    if start.is_none() && end.is_none() {
        return Ok(());
    }
    let start = start.or(board.start());
    let end = end.or(board.end());
    board.clear_markers();
    if let Some(p) = start {
        board.set_start(p)?;
    }
    if let Some(p) = end {
        board.set_end(p)?;
    }
    Ok(())
}

/// Run every algorithm on `board`.
pub fn compare(board: &Board) -> Result<Vec<SearchReport>, BoardError> {
    Algorithm::ALL
        .into_iter()
        .map(|alg| board.run_report(alg, &mut ()))
        .collect()
}

/// A fixed-width table of `reports`.
pub fn format_table(reports: &[SearchReport]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {:>8} {:>8} {:>6}", "algorithm", "visited", "pushes", "path");
    for r in reports {
        let path = match r.stats.path_len {
            Some(n) => n.to_string(),
            None => "-".to_string(),
        };
        let _ = writeln!(
            out,
            "{:<10} {:>8} {:>8} {:>6}",
            r.algorithm.name(),
            r.stats.visited,
            r.stats.pushes,
            path
        );
    }
    out
}

/// One line describing a finished run.
pub fn summary(report: &SearchReport) -> String {
    match &report.outcome {
        SearchOutcome::Found { path } => format!(
            "{}: path of {} cells, {} visited",
            report.algorithm,
            path.len(),
            report.stats.visited
        ),
        SearchOutcome::Unreachable => format!(
            "{}: no path, {} visited",
            report.algorithm, report.stats.visited
        ),
    }
}

/// Entry point behind `main`.
pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let mut board = build_board(args)?;
    let algorithm = Algorithm::from(args.algorithm);
    log::info!(
        "board {}x{} cells, {} barriers",
        board.grid().cols(),
        board.grid().rows(),
        board.obstacles().barrier_count()
    );

    if args.compare {
        print!("{}", format_table(&compare(&board)?));
        return Ok(());
    }

    if args.plain {
        let mut rec = Recorder::new();
        let report = board.run_report(algorithm, &mut rec)?;
        print!("{}", render_text(&board, &rec));
        println!("{}", summary(&report));
        return Ok(());
    }

    let mut view = TerminalView::stdout(Duration::from_millis(args.delay_ms));
    view.init()?;
    let res = if args.no_edit {
        animate(&board, algorithm, &mut view).map(Some)
    } else {
        edit_and_animate(&mut board, algorithm, &mut view)
    };
    view.close();
    if let Some(report) = res? {
        println!("{}", summary(&report));
    }
    Ok(())
}

/// Alternate between editing and running until the user quits. Returns the
/// last run, if there was one.
fn edit_and_animate(
    board: &mut Board,
    algorithm: Algorithm,
    view: &mut TerminalView,
) -> Result<Option<SearchReport>, Box<dyn Error>> {
    let mut last = None;
    while view.edit(board)? {
        log::info!(
            "running {algorithm} with {} barriers",
            board.obstacles().barrier_count()
        );
        last = Some(animate(board, algorithm, view)?);
    }
    Ok(last)
}

fn animate(
    board: &Board,
    algorithm: Algorithm,
    view: &mut TerminalView,
) -> Result<SearchReport, Box<dyn Error>> {
    view.draw_board(board)?;
    let report = board.run_report(algorithm, view)?;
    if let Some(e) = view.take_error() {
        return Err(e.into());
    }
    view.status(&format!("{}  (press any key)", summary(&report)))?;
    view.wait_key()?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pathviz_paths::CellState;

    #[test]
    fn compare_default_board() {
        let board = build_board(&Args::parse_from(["pathviz"])).unwrap();
        let reports = compare(&board).unwrap();
        assert_eq!(reports.len(), 4);
        let dijkstra = &reports[2];
        let astar = &reports[3];
        assert_eq!(dijkstra.stats.path_len, Some(39));
        assert_eq!(astar.stats.path_len, Some(39));
        assert_eq!(reports[0].stats.path_len, Some(39));
        assert!(astar.stats.visited <= dijkstra.stats.visited);

        let table = format_table(&reports);
        assert_eq!(table.lines().count(), 5);
        assert!(table.lines().nth(4).unwrap().starts_with("A*"));
    }

    #[test]
    fn seeded_scatter_is_reproducible() {
        let args = Args::parse_from(["pathviz", "--scatter", "0.3", "--seed", "42"]);
        let a = build_board(&args).unwrap();
        let b = build_board(&args).unwrap();
        assert_eq!(a.obstacles(), b.obstacles());
        assert!(a.obstacles().barrier_count() > 0);
        assert!(!a.is_blocked(Point::new(5, 5)));
    }

    #[test]
    fn invalid_start_is_an_error() {
        let args = Args::parse_from(["pathviz", "--start", "0,0"]);
        let err = build_board(&args).unwrap_err();
        assert!(err.to_string().starts_with("board:"), "{err}");
    }

    const CORRIDOR: &str = "
S..#.
.....
...E.
";

    #[test]
    fn marker_overrides_may_swap() {
        let mut board = Layout::parse(CORRIDOR).unwrap().to_board(false).unwrap();
        let (s, e) = (Point::new(0, 0), Point::new(3, 2));
        override_markers(&mut board, Some(e), Some(s)).unwrap();
        assert_eq!(board.start(), Some(e));
        assert_eq!(board.end(), Some(s));
        assert_eq!(board.cell_state(s), CellState::End);
    }

    #[test]
    fn marker_override_keeps_the_other_marker() {
        let mut board = Layout::parse(CORRIDOR).unwrap().to_board(false).unwrap();
        // Moving only the start onto the old end is still a clash.
        assert_eq!(
            override_markers(&mut board, Some(Point::new(3, 2)), None),
            Err(BoardError::SameStartEnd(Point::new(3, 2)))
        );

        let mut board = Layout::parse(CORRIDOR).unwrap().to_board(false).unwrap();
        override_markers(&mut board, None, Some(Point::new(4, 0))).unwrap();
        assert_eq!(board.start(), Some(Point::new(0, 0)));
        assert_eq!(board.end(), Some(Point::new(4, 0)));
        assert_eq!(
            override_markers(&mut board, Some(Point::new(3, 0)), None),
            Err(BoardError::Blocked(Point::new(3, 0)))
        );
    }

    #[test]
    fn summary_lines() {
        let args = Args::parse_from([
            "pathviz", "--width", "200", "--height", "200", "--start", "1,1", "--end", "3,1",
        ]);
        let mut board = build_board(&args).unwrap();
        let report = board.run_report(Algorithm::Bfs, &mut ()).unwrap();
        assert_eq!(summary(&report), "BFS: path of 1 cells, 4 visited");

        board.add_barrier(Point::new(2, 1)).unwrap();
        board.add_barrier(Point::new(1, 2)).unwrap();
        let report = board.run_report(Algorithm::Bfs, &mut ()).unwrap();
        assert_eq!(summary(&report), "BFS: no path, 0 visited");
    }
}
