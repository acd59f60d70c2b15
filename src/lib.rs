#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! A terminal contact form: first name, last name, email and an optional
//! message, validated as you type and on submit.

pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod tui;
