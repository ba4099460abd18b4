//! `regexport fetch <path>` – download the export into a directory.

use anyhow::{Context, Result};
use regexport_core::build_and_navigate;
use regexport_core::checksum::sha256_path;
use regexport_core::config::RegexportConfig;
use regexport_core::download::DownloadNavigator;
use std::path::PathBuf;

use super::request::{builder, snapshot};
use crate::cli::RequestArgs;

pub fn run_fetch(
    cfg: &RegexportConfig,
    args: &RequestArgs,
    output_dir: Option<PathBuf>,
    session_cookie: Option<String>,
) -> Result<()> {
    let builder = builder(cfg, args.origin.as_deref())?;
    let snapshot = snapshot(&args.selection)?;
    let output_dir = match output_dir.or_else(|| cfg.download_dir.clone()) {
        Some(dir) => dir,
        None => std::env::current_dir().context("current directory")?,
    };

    let mut http = cfg.http.clone();
    if session_cookie.is_some() {
        http.session_cookie = session_cookie;
    }
    if http.session_cookie.is_none() {
        tracing::warn!("no session cookie configured; the server will likely ask for a login");
    }

    let mut navigator = DownloadNavigator::new(output_dir, &http);
    let url = build_and_navigate(&builder, &args.path, snapshot.as_ref(), &mut navigator)?;
    println!("Fetched {url}");
    for path in navigator.saved() {
        let digest = sha256_path(path)?;
        println!("{}  {}", digest, path.display());
    }
    Ok(())
}
