//! Terminal rendering of the form output.

pub mod terminal_view;

pub use terminal_view::{TerminalView, badge};
