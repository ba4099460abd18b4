//! `regexport path <event> <format>` – print an export endpoint path.

use anyhow::Result;
use regexport_core::config::RegexportConfig;
use regexport_core::format::{ExportFormat, ExportTarget};
use regexport_core::ExportUrlBuilder;

pub fn run_path(
    cfg: &RegexportConfig,
    event: String,
    format: ExportFormat,
    job: Option<u64>,
) -> Result<()> {
    let builder = ExportUrlBuilder::new(&cfg.origin)?;
    let mut target = ExportTarget::new(event, format);
    target.job = job;
    println!("{}", target.path(&builder)?);
    Ok(())
}
