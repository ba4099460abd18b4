//! CLI for building and fetching registration exports.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use regexport_core::config::{self, RegexportConfig};
use regexport_core::format::ExportFormat;
use regexport_core::ExportField;
use std::path::PathBuf;

use commands::{run_columns, run_fetch, run_fields, run_path, run_url};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "regexport")]
#[command(about = "Build and download helper registration exports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Where the checkbox states come from.
#[derive(Debug, Args)]
pub struct SelectionArgs {
    /// Include a field (name, email, phone, shirt, nutrition, comment). Repeatable.
    #[arg(long = "check", value_name = "FIELD")]
    pub checks: Vec<ExportField>,

    /// JSON file mapping checkbox ids to their checked state.
    #[arg(long, conflicts_with = "checks")]
    pub snapshot: Option<PathBuf>,
}

/// Which export to request and with which fields.
#[derive(Debug, Args)]
pub struct RequestArgs {
    /// Export endpoint path, e.g. `/summer-fest/export/excel`.
    pub path: String,

    /// Origin to resolve the path against (overrides config).
    #[arg(long)]
    pub origin: Option<String>,

    #[command(flatten)]
    pub selection: SelectionArgs,
}

/// What the event collected and what the exported job requires.
#[derive(Debug, Args)]
pub struct EventArgs {
    /// The event asks helpers for a phone number.
    #[arg(long)]
    pub ask_phone: bool,

    /// The event asks helpers for a T-shirt size.
    #[arg(long)]
    pub ask_shirt: bool,

    /// The event asks helpers for nutrition preferences.
    #[arg(long)]
    pub ask_nutrition: bool,

    /// The exporting user may see sensitive data.
    #[arg(long)]
    pub include_sensitive: bool,

    /// Request the food-handling column.
    #[arg(long)]
    pub food_handling: bool,

    /// The exported job requires a food-handling instruction.
    #[arg(long)]
    pub job_requires_food_handling: bool,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the export URL for the selected fields.
    Url {
        #[command(flatten)]
        request: RequestArgs,
    },

    /// Download the export and save it.
    Fetch {
        #[command(flatten)]
        request: RequestArgs,

        /// Directory for the downloaded file (overrides config).
        #[arg(long)]
        output_dir: Option<PathBuf>,

        /// `Cookie` header for the export endpoint (overrides config).
        #[arg(long)]
        session_cookie: Option<String>,
    },

    /// Show the columns an export will contain and, for excel, its sheet names.
    Columns {
        /// `excel` or `pdf`.
        format: ExportFormat,

        #[command(flatten)]
        selection: SelectionArgs,

        #[command(flatten)]
        event: EventArgs,

        /// Job name, one worksheet each. Repeatable.
        #[arg(long = "job", value_name = "NAME")]
        jobs: Vec<String>,
    },

    /// Print the endpoint path for an event (or one job) export.
    Path {
        /// Event URL name.
        event: String,

        /// `excel` or `pdf`.
        format: ExportFormat,

        /// Restrict the export to one job.
        #[arg(long)]
        job: Option<u64>,
    },

    /// List the export fields and the checkbox ids they are read from.
    Fields,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);
        cli.command.run(&cfg)
    }

    fn run(self, cfg: &RegexportConfig) -> Result<()> {
        match self {
            CliCommand::Url { request } => run_url(cfg, &request)?,
            CliCommand::Fetch {
                request,
                output_dir,
                session_cookie,
            } => run_fetch(cfg, &request, output_dir, session_cookie)?,
            CliCommand::Columns {
                format,
                selection,
                event,
                jobs,
            } => run_columns(format, &selection, &event, &jobs)?,
            CliCommand::Path { event, format, job } => run_path(cfg, event, format, job)?,
            CliCommand::Fields => run_fields(),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
