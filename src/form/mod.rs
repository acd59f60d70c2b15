//! Contact form state machine: values, active errors and the submit cycle.
//!
//! All changes go through [`reduce`], which maps a [`FormState`] and an
//! [`Event`] to the next state. Rendering reads the state and never mutates it.

mod errors;
mod state;

pub use errors::ErrorSet;
pub use state::{Event, FormState, Phase, reduce, reduce_at};
