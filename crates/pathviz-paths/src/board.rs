//! The [`Board`]: everything a front end edits and runs searches on.

use pathviz_core::Point;

use crate::adjacency::AdjacencyIndex;
use crate::error::BoardError;
use crate::obstacles::ObstacleRegistry;
use crate::search::{Algorithm, SearchOutcome, SearchReport, search, search_report};
use crate::tilegrid::TileGrid;
use crate::visualizer::Visualizer;

/// Parameters for building a [`Board`].
///
/// The default is a 1000x600 canvas with 20-pixel tiles (50x30 cells), a
/// border ring, start at (5, 5) and end at (35, 15).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct BoardConfig {
    /// Canvas width in pixels.
    pub width: i32,
    /// Canvas height in pixels.
    pub height: i32,
    /// Tile side in pixels.
    pub tile_size: i32,
    /// Initial start cell.
    pub start: Option<Point>,
    /// Initial end cell.
    pub end: Option<Point>,
    /// Whether the outermost ring of cells is blocked.
    pub border: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 600,
            tile_size: 20,
            start: Some(Point::new(5, 5)),
            end: Some(Point::new(35, 15)),
            border: true,
        }
    }
}

impl BoardConfig {
    /// A `cols` x `rows` board with tile size 1, a border and no markers.
    pub fn with_cells(cols: i32, rows: i32) -> Self {
        Self {
            width: cols,
            height: rows,
            tile_size: 1,
            start: None,
            end: None,
            border: true,
        }
    }
}

/// What a renderer should draw for one cell outside of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellState {
    Empty,
    Border,
    Barrier,
    Start,
    End,
}

/// A tile grid with its adjacency, obstacles and start/end markers.
///
/// Runs borrow the board immutably, so the obstacle set cannot change while
/// a search is in progress.
#[derive(Debug, Clone)]
pub struct Board {
    grid: TileGrid,
    index: AdjacencyIndex,
    obstacles: ObstacleRegistry,
    start: Option<Point>,
    end: Option<Point>,
}

impl Board {
    /// Build the grid, its adjacency index and obstacle registry, then place
    /// the configured markers.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        let grid = TileGrid::new(config.width, config.height, config.tile_size)?;
        let index = AdjacencyIndex::build(&grid);
        let obstacles = if config.border {
            ObstacleRegistry::with_border(&grid)
        } else {
            ObstacleRegistry::new()
        };
        let mut board = Self {
            grid,
            index,
            obstacles,
            start: None,
            end: None,
        };
        if let Some(p) = config.start {
            board.set_start(p)?;
        }
        if let Some(p) = config.end {
            board.set_end(p)?;
        }
        Ok(board)
    }

    #[inline]
    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    #[inline]
    pub fn index(&self) -> &AdjacencyIndex {
        &self.index
    }

    #[inline]
    pub fn obstacles(&self) -> &ObstacleRegistry {
        &self.obstacles
    }

    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Move the start marker to `p`.
    pub fn set_start(&mut self, p: Point) -> Result<(), BoardError> {
        self.check_marker(p)?;
        if self.end == Some(p) {
            return Err(BoardError::SameStartEnd(p));
        }
        log::debug!("start placed at {p}");
        self.start = Some(p);
        Ok(())
    }

    /// Move the end marker to `p`.
    pub fn set_end(&mut self, p: Point) -> Result<(), BoardError> {
        self.check_marker(p)?;
        if self.start == Some(p) {
            return Err(BoardError::SameStartEnd(p));
        }
        log::debug!("end placed at {p}");
        self.end = Some(p);
        Ok(())
    }

    /// Remove both markers.
    pub fn clear_markers(&mut self) {
        self.start = None;
        self.end = None;
    }

    fn check_marker(&self, p: Point) -> Result<(), BoardError> {
        if !self.grid.contains(p) {
            return Err(BoardError::OutOfBounds(p));
        }
        if self.obstacles.is_blocked(p) {
            return Err(BoardError::Blocked(p));
        }
        Ok(())
    }

    fn check_paintable(&self, p: Point) -> Result<(), BoardError> {
        if !self.grid.contains(p) {
            return Err(BoardError::OutOfBounds(p));
        }
        if self.start == Some(p) || self.end == Some(p) {
            return Err(BoardError::OccupiedByMarker(p));
        }
        Ok(())
    }

    /// Paint a barrier at `p`. Returns `true` if the barrier is new.
    pub fn add_barrier(&mut self, p: Point) -> Result<bool, BoardError> {
        self.check_paintable(p)?;
        Ok(self.obstacles.add_barrier(p))
    }

    /// Erase the barrier at `p`. Returns `true` if one was present.
    pub fn remove_barrier(&mut self, p: Point) -> bool {
        self.obstacles.remove_barrier(p)
    }

    /// Flip the barrier at `p`. Returns whether `p` holds a barrier afterwards.
    pub fn toggle_barrier(&mut self, p: Point) -> Result<bool, BoardError> {
        self.check_paintable(p)?;
        Ok(self.obstacles.toggle_barrier(p))
    }

    /// Erase every barrier; the border stays.
    pub fn reset_barriers(&mut self) {
        self.obstacles.reset_barriers();
    }

    #[inline]
    pub fn is_blocked(&self, p: Point) -> bool {
        self.obstacles.is_blocked(p)
    }

    /// How `p` should be drawn. Cells outside the grid read as border.
    pub fn cell_state(&self, p: Point) -> CellState {
        if self.start == Some(p) {
            CellState::Start
        } else if self.end == Some(p) {
            CellState::End
        } else if !self.grid.contains(p) || self.obstacles.is_border(p) {
            CellState::Border
        } else if self.obstacles.is_barrier(p) {
            CellState::Barrier
        } else {
            CellState::Empty
        }
    }

    fn markers(&self) -> Result<(Point, Point), BoardError> {
        let start = self.start.ok_or(BoardError::MissingStart)?;
        let end = self.end.ok_or(BoardError::MissingEnd)?;
        Ok((start, end))
    }

    /// Run `algorithm` between the markers, reporting progress to `sink`.
    pub fn run<V>(&self, algorithm: Algorithm, sink: &mut V) -> Result<SearchOutcome, BoardError>
    where
        V: Visualizer + ?Sized,
    {
        let (start, end) = self.markers()?;
        Ok(search(algorithm, &self.index, &self.obstacles, start, end, sink))
    }

    /// Like [`run`](Self::run), also returning visit and push counts.
    pub fn run_report<V>(
        &self,
        algorithm: Algorithm,
        sink: &mut V,
    ) -> Result<SearchReport, BoardError>
    where
        V: Visualizer + ?Sized,
    {
        let (start, end) = self.markers()?;
        Ok(search_report(
            algorithm,
            &self.index,
            &self.obstacles,
            start,
            end,
            sink,
        ))
    }
}
