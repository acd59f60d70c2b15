//! Actions returned by screen event handlers.

use crate::form::Event;

/// An action that a screen handler returns to the [`App`](super::App).
///
/// The `App` interprets these to update the form state or exit.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// No state change needed.
    None,
    /// Feed an event to the form reducer.
    Dispatch(Event),
    /// Quit the application.
    Quit,
}
