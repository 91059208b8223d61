//! Reusable TUI widgets.

pub mod form;
pub mod rows;
pub mod status_bar;

pub use form::{FORM_HEIGHT, Focus, draw_form};
pub use rows::{ROWS_HEIGHT, draw_rows};
pub use status_bar::{StatusBarContext, draw_status_bar};
