//! Interactive TUI mode
//!
//! Full-screen terminal interface: the board, a colored keyboard, and
//! transient messages.

pub mod app;
pub mod rendering;

pub use app::{App, run_tui};
