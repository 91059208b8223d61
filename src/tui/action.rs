//! Actions returned by screen event handlers.

use super::app::Screen;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these by calling into the form controller or by
/// switching screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Replace the draft name with the given text.
    EditName(String),
    /// Select the next location in the list.
    NextLocation,
    /// Select the previous location in the list.
    PreviousLocation,
    /// Commit the draft into the table.
    Add,
    /// Empty the table and reset the form.
    Clear,
    /// Navigate to the given screen.
    Navigate(Screen),
    /// Quit the application.
    Quit,
}
