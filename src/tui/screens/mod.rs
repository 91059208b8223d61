//! TUI screen implementations.

pub mod form;
pub mod help;

pub use form::{FormScreenState, FormView, draw_form_screen};
pub use help::{HelpState, draw_help};
