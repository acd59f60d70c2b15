//! Optional file logging. The terminal belongs to the TUI, so tracing output
//! only ever goes to a file.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;

use crate::tui::AppError;

/// Most verbose level written to the log file.
pub const MAX_LEVEL: Level = Level::DEBUG;

/// Builds the plain-text subscriber used for the log file.
pub fn subscriber<W>(make_writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_writer(make_writer)
        .with_ansi(false)
        .with_max_level(MAX_LEVEL)
        .finish()
}

/// Installs a global `tracing` subscriber appending to `path`.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init_file_logging(path: &Path) -> Result<(), AppError> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    tracing::subscriber::set_global_default(subscriber(Mutex::new(file)))
        .map_err(|e| AppError::Logging(e.to_string()))
}
