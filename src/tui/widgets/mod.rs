//! Reusable TUI widgets.

pub mod form;
pub mod status_bar;
pub mod submitted;

pub use form::{FormFocus, draw_form, field_label};
pub use status_bar::{StatusBarContext, draw_status_bar};
pub use submitted::{draw_submitted, submitted_lines};
