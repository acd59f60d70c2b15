//! TUI screen implementations.

pub mod contact;

pub use contact::{ContactScreen, TITLE, draw_contact};
