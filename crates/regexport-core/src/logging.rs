//! Logging for the export tool.
//!
//! Every built export URL, every download and every rejected response is
//! logged, so `~/.local/state/regexport/regexport.log` answers "which export
//! did I fetch, with which fields" after the terminal output is gone.
//! `RUST_LOG` overrides the default filter.

use anyhow::Result;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,regexport=debug,regexport_core=debug";

/// Appends to the export log. Falls back to stderr for an event whose
/// file handle cannot be duplicated.
struct ExportLog(fs::File);

enum ExportLogWriter {
    File(fs::File),
    Stderr(io::Stderr),
}

impl io::Write for ExportLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            ExportLogWriter::File(f) => f.write(buf),
            ExportLogWriter::Stderr(e) => e.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            ExportLogWriter::File(f) => f.flush(),
            ExportLogWriter::Stderr(e) => e.flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for ExportLog {
    type Writer = ExportLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(file) => ExportLogWriter::File(file),
            Err(_) => ExportLogWriter::Stderr(io::stderr()),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the export log, creating its directory.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("regexport")?;
    Ok(xdg_dirs.place_state_file("regexport.log")?)
}

/// Install the global subscriber writing to the export log.
///
/// Errors (unwritable state dir) leave no subscriber installed, so the
/// caller can use [`init_logging_stderr`] instead.
pub fn init_logging() -> Result<PathBuf> {
    let path = log_file_path()?;
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(ExportLog(file)))
        .with_ansi(false)
        .init();

    tracing::debug!(log = %path.display(), "export log opened");
    Ok(path)
}

/// Install the global subscriber writing to stderr.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}
