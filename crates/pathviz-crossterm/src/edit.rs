//! Board editing with mouse and keyboard before a run.
//!
//! | Input | Action |
//! |---|---|
//! | left click | flip the barrier under the pointer |
//! | left drag | paint barriers |
//! | right click or drag | erase barriers |
//! | `s` / `e` | move the start / end marker to the pointer |
//! | `c` | clear every barrier |
//! | Enter, Space | start the search |
//! | `q`, Esc, Ctrl-C | quit |

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use pathviz_core::Point;
use pathviz_paths::{Board, BoardError, TileGrid};

/// Help line shown under the board while editing.
pub const EDIT_HELP: &str =
    "click/drag: barriers  right: erase  s/e: start/end  c: clear  enter: run  q: quit";

/// One edit requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditAction {
    Toggle(Point),
    Paint(Point),
    Erase(Point),
    PlaceStart(Point),
    PlaceEnd(Point),
    ClearBarriers,
    Run,
    Quit,
}

impl EditAction {
    /// The cell the action targets, if any.
    pub fn cell(self) -> Option<Point> {
        match self {
            Self::Toggle(p)
            | Self::Paint(p)
            | Self::Erase(p)
            | Self::PlaceStart(p)
            | Self::PlaceEnd(p) => Some(p),
            Self::ClearBarriers | Self::Run | Self::Quit => None,
        }
    }
}

/// The cell under terminal position `(column, row)`.
///
/// A cell is drawn two columns wide and one row high, so each column spans
/// half a tile of the canvas and each row a full tile. The position is
/// scaled to canvas pixels and snapped to the tile below it.
pub fn terminal_cell(grid: &TileGrid, column: u16, row: u16) -> Option<Point> {
    let t = grid.tile_size();
    grid.cell_at_pixel(i32::from(column) * t / 2, i32::from(row) * t)
}

/// Turns terminal events into [`EditAction`]s, remembering where the
/// pointer last was for the marker keys.
#[derive(Debug, Clone, Default)]
pub struct Editor {
    pointer: Option<Point>,
}

impl Editor {
    pub fn new() -> Self {
        Self::default()
    }

    /// The grid cell under the pointer, if it is over the grid.
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    pub fn handle(&mut self, grid: &TileGrid, ev: &Event) -> Option<EditAction> {
        match ev {
            Event::Mouse(me) => self.mouse(grid, me),
            Event::Key(k) if k.kind == KeyEventKind::Press => self.key(k),
            _ => None,
        }
    }

    fn mouse(&mut self, grid: &TileGrid, me: &MouseEvent) -> Option<EditAction> {
        self.pointer = terminal_cell(grid, me.column, me.row);
        let cell = self.pointer?;
        match me.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(EditAction::Toggle(cell)),
            MouseEventKind::Drag(MouseButton::Left) => Some(EditAction::Paint(cell)),
            MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
                Some(EditAction::Erase(cell))
            }
            _ => None,
        }
    }

    fn key(&self, k: &KeyEvent) -> Option<EditAction> {
        match k.code {
            KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(EditAction::Quit)
            }
            KeyCode::Char('s') => self.pointer.map(EditAction::PlaceStart),
            KeyCode::Char('e') => self.pointer.map(EditAction::PlaceEnd),
            KeyCode::Char('c') => Some(EditAction::ClearBarriers),
            KeyCode::Enter | KeyCode::Char(' ') => Some(EditAction::Run),
            KeyCode::Char('q') | KeyCode::Esc => Some(EditAction::Quit),
            _ => None,
        }
    }
}

/// Apply `action` to `board`. `Run` and `Quit` leave the board untouched.
///
/// Painting over a barrier that is already there, or erasing an empty
/// cell, is not an error.
pub fn apply_edit(board: &mut Board, action: EditAction) -> Result<(), BoardError> {
    match action {
        EditAction::Toggle(p) => board.toggle_barrier(p).map(drop),
        EditAction::Paint(p) => board.add_barrier(p).map(drop),
        EditAction::Erase(p) => {
            board.remove_barrier(p);
            Ok(())
        }
        EditAction::PlaceStart(p) => board.set_start(p),
        EditAction::PlaceEnd(p) => board.set_end(p),
        EditAction::ClearBarriers => {
            board.reset_barriers();
            Ok(())
        }
        EditAction::Run | EditAction::Quit => Ok(()),
    }
}
