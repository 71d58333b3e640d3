//! Crossterm terminal view for pathviz.
//!
//! Provides a [`TerminalView`] that implements [`pathviz_paths::Visualizer`],
//! painting each cell as two terminal columns so tiles look roughly square,
//! and [`render_text`] for a plain character dump of a finished run. Before
//! a run the view can hand the board to the user for editing with the mouse
//! (see [`edit`](mod@edit)).

pub mod edit;

pub use edit::{EDIT_HELP, EditAction, Editor, apply_edit, terminal_cell};

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event, KeyEventKind},
    execute, queue,
    style::{Color as CtColor, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};

use pathviz_core::Point;
use pathviz_paths::{Board, CellState, Recorder, VisitEvent, Visualizer};

/// Status line shown when a run ends without reaching the end cell.
pub const NO_PATH: &str = "no path: the end cell cannot be reached";

/// What is drawn in one cell: its board state, or a search overlay on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Cell(CellState),
    Frontier,
    Visited,
    Path,
}

impl Shade {
    /// The background colour used by [`TerminalView`].
    pub fn color(self) -> CtColor {
        match self {
            Shade::Cell(CellState::Empty) => CtColor::Rgb { r: 255, g: 255, b: 255 },
            Shade::Cell(CellState::Border) => CtColor::Rgb { r: 20, g: 20, b: 20 },
            Shade::Cell(CellState::Barrier) => CtColor::Rgb { r: 70, g: 70, b: 70 },
            Shade::Cell(CellState::Start) => CtColor::Rgb { r: 230, g: 140, b: 20 },
            Shade::Cell(CellState::End) => CtColor::Rgb { r: 120, g: 40, b: 200 },
            Shade::Frontier => CtColor::Rgb { r: 60, g: 200, b: 80 },
            Shade::Visited => CtColor::Rgb { r: 220, g: 60, b: 60 },
            Shade::Path => CtColor::Rgb { r: 50, g: 210, b: 210 },
        }
    }

    /// The character used by [`render_text`].
    pub fn glyph(self) -> char {
        match self {
            Shade::Cell(CellState::Empty) => '.',
            Shade::Cell(CellState::Border) => '=',
            Shade::Cell(CellState::Barrier) => '#',
            Shade::Cell(CellState::Start) => 'S',
            Shade::Cell(CellState::End) => 'E',
            Shade::Frontier => '+',
            Shade::Visited => 'o',
            Shade::Path => '*',
        }
    }
}

/// Folds recorded events into a per-cell overlay: a later event on the same
/// cell wins, so path beats visited and visited beats frontier.
fn overlay(rec: &Recorder) -> std::collections::HashMap<Point, Shade> {
    let mut marks = std::collections::HashMap::new();
    for ev in rec.events() {
        match *ev {
            VisitEvent::Frontier(p) => {
                marks.insert(p, Shade::Frontier);
            }
            VisitEvent::Visit(p) => {
                marks.insert(p, Shade::Visited);
            }
            VisitEvent::PathStep(p) => {
                marks.insert(p, Shade::Path);
            }
            VisitEvent::Unreachable => {}
        }
    }
    marks
}

/// Renders `board` as text, one character per cell and one line per row,
/// with the events of `rec` drawn over empty cells.
pub fn render_text(board: &Board, rec: &Recorder) -> String {
    let marks = overlay(rec);
    let grid = board.grid();
    let mut out = String::with_capacity(grid.len() + grid.rows() as usize);
    for y in 0..grid.rows() {
        for x in 0..grid.cols() {
            let p = Point::new(x, y);
            let shade = match (board.cell_state(p), marks.get(&p)) {
                (CellState::Empty, Some(&m)) => m,
                (state, _) => Shade::Cell(state),
            };
            out.push(shade.glyph());
        }
        out.push('\n');
    }
    out
}

/// A terminal view that paints a board and animates a search on it.
///
/// The view never fails a search: the first I/O error is kept, later
/// drawing is skipped, and the error can be collected with
/// [`take_error`](Self::take_error).
pub struct TerminalView<W: Write = io::Stdout> {
    out: W,
    delay: Duration,
    rows: u16,
    error: Option<io::Error>,
}

impl TerminalView<io::Stdout> {
    /// A view on standard output pausing `delay` after every visit.
    pub fn stdout(delay: Duration) -> Self {
        Self::new(io::stdout(), delay)
    }
}

impl<W: Write> TerminalView<W> {
    /// A view writing escape sequences to `out`.
    pub fn new(out: W, delay: Duration) -> Self {
        Self {
            out,
            delay,
            rows: 0,
            error: None,
        }
    }

    /// Enter the alternate screen and hide the cursor.
    pub fn init(&mut self) -> io::Result<()> {
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::Clear(ClearType::All)
        )
    }

    /// Restore the terminal. Errors are ignored so this is safe to call on
    /// any exit path.
    pub fn close(&mut self) {
        let _ = execute!(
            self.out,
            event::DisableMouseCapture,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
    }

    /// Paint every cell of `board` in its resting state.
    pub fn draw_board(&mut self, board: &Board) -> io::Result<()> {
        let grid = board.grid();
        self.rows = u16::try_from(grid.rows()).unwrap_or(u16::MAX);
        for p in grid.cells() {
            self.paint(p, Shade::Cell(board.cell_state(p)))?;
        }
        queue!(self.out, ResetColor)?;
        self.out.flush()
    }

    /// Print `msg` on the line below the board.
    pub fn status(&mut self, msg: &str) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(0, self.rows.saturating_add(1)),
            terminal::Clear(ClearType::CurrentLine),
            ResetColor,
            Print(msg)
        )?;
        self.out.flush()
    }

    /// Let the user edit `board` until they start a run or quit. Returns
    /// `true` to run, `false` to quit.
    ///
    /// Mouse capture and raw mode are on only for the duration of the call.
    pub fn edit(&mut self, board: &mut Board) -> io::Result<bool> {
        execute!(self.out, event::EnableMouseCapture)?;
        terminal::enable_raw_mode()?;
        let res = self.edit_loop(board);
        let _ = terminal::disable_raw_mode();
        let _ = execute!(self.out, event::DisableMouseCapture);
        res
    }

    fn edit_loop(&mut self, board: &mut Board) -> io::Result<bool> {
        let mut editor = Editor::new();
        self.draw_board(board)?;
        self.status(EDIT_HELP)?;
        loop {
            let ev = event::read()?;
            let Some(action) = editor.handle(board.grid(), &ev) else {
                continue;
            };
            match action {
                EditAction::Quit => return Ok(false),
                EditAction::Run if board.start().is_some() && board.end().is_some() => {
                    return Ok(true);
                }
                EditAction::Run => {
                    self.status("place the start (s) and end (e) markers first")?;
                    continue;
                }
                _ => {}
            }

            let markers = [board.start(), board.end()];
            if let Err(e) = apply_edit(board, action) {
                log::warn!("edit rejected: {e}");
                self.status(&e.to_string())?;
                continue;
            }
            if action == EditAction::ClearBarriers {
                self.draw_board(board)?;
            } else {
                // The action's cell and wherever the markers were before.
                let touched = markers.into_iter().flatten().chain(action.cell());
                for p in touched {
                    self.paint(p, Shade::Cell(board.cell_state(p)))?;
                }
                queue!(self.out, ResetColor)?;
            }
            match editor.pointer() {
                Some(p) => {
                    let px = board.grid().pixel_origin(p);
                    self.status(&format!("{EDIT_HELP}  [{p} at px {px}]"))?;
                }
                None => self.status(EDIT_HELP)?,
            }
        }
    }

    /// Block until a key is pressed.
    pub fn wait_key(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        let res = loop {
            match event::read() {
                Ok(Event::Key(k)) if k.kind == KeyEventKind::Press => break Ok(()),
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };
        terminal::disable_raw_mode()?;
        res
    }

    /// The first I/O error met while animating, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// The underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&mut self, p: Point, shade: Shade) -> io::Result<()> {
        let (Ok(x), Ok(y)) = (u16::try_from(p.x * 2), u16::try_from(p.y)) else {
            // Off-screen cells are not drawn.
            return Ok(());
        };
        queue!(
            self.out,
            cursor::MoveTo(x, y),
            SetForegroundColor(shade.color()),
            SetBackgroundColor(shade.color()),
            Print("  ")
        )
    }

    fn draw(&mut self, p: Point, shade: Shade, pause: bool) {
        if self.error.is_some() {
            return;
        }
        let res = self
            .paint(p, shade)
            .and_then(|()| queue!(self.out, ResetColor))
            .and_then(|()| self.out.flush());
        if let Err(e) = res {
            log::warn!("terminal view stopped drawing: {e}");
            self.error = Some(e);
            return;
        }
        if pause && !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
    }
}

impl<W: Write> Visualizer for TerminalView<W> {
    fn on_visit(&mut self, cell: Point) {
        self.draw(cell, Shade::Visited, true);
    }

    fn on_frontier(&mut self, cell: Point) {
        self.draw(cell, Shade::Frontier, false);
    }

    fn on_path_step(&mut self, cell: Point) {
        self.draw(cell, Shade::Path, false);
    }

    fn on_unreachable(&mut self) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = self.status(NO_PATH) {
            log::warn!("terminal view stopped drawing: {e}");
            self.error = Some(e);
        }
    }
}
