//! `regexport url <path>` – print the export URL.

use anyhow::Result;
use regexport_core::build_and_navigate;
use regexport_core::config::RegexportConfig;
use url::Url;

use super::request::{builder, snapshot};
use crate::cli::RequestArgs;

pub fn run_url(cfg: &RegexportConfig, args: &RequestArgs) -> Result<()> {
    let builder = builder(cfg, args.origin.as_deref())?;
    let snapshot = snapshot(&args.selection)?;
    build_and_navigate(&builder, &args.path, snapshot.as_ref(), &mut |url: &Url| {
        println!("{url}")
    })?;
    Ok(())
}
