//! Shared setup for commands that build an export URL.

use anyhow::Result;
use regexport_core::config::RegexportConfig;
use regexport_core::snapshot::load_snapshot;
use regexport_core::{CheckboxSnapshot, CheckedSet, ExportUrlBuilder};

use crate::cli::SelectionArgs;

pub(super) fn builder(cfg: &RegexportConfig, origin: Option<&str>) -> Result<ExportUrlBuilder> {
    let origin = origin.unwrap_or(&cfg.origin);
    Ok(ExportUrlBuilder::new(origin)?)
}

/// The checkbox state: a snapshot file, or exactly the `--check` fields.
pub(super) fn snapshot(args: &SelectionArgs) -> Result<Box<dyn CheckboxSnapshot>> {
    match &args.snapshot {
        Some(path) => Ok(Box::new(load_snapshot(path)?)),
        None => Ok(Box::new(args.checks.iter().copied().collect::<CheckedSet>())),
    }
}
