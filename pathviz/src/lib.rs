//! pathviz: watch grid searches run in the terminal.
//!
//! The binary is a thin shell over this library so the board setup and the
//! comparison table can be tested without a terminal.

pub mod app;
pub mod cli;
pub mod layout;
pub mod scatter;

pub use app::{build_board, compare, format_table, run, summary};
pub use cli::{AlgorithmArg, Args};
pub use layout::{Layout, LayoutError};
pub use scatter::scatter;
