//! Export endpoint addressing: which event, which file format, which job.

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::ExportError;
use crate::url_builder::ExportUrlBuilder;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Excel,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ExportFormat::Excel => "excel",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Pdf => "application/pdf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excel" => Ok(ExportFormat::Excel),
            "pdf" => Ok(ExportFormat::Pdf),
            other => Err(ExportError::UnknownFormat(other.to_string())),
        }
    }
}

/// An export of a whole event, or of a single job within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    pub event: String,
    pub format: ExportFormat,
    pub job: Option<u64>,
}

impl ExportTarget {
    pub fn new(event: impl Into<String>, format: ExportFormat) -> Self {
        Self {
            event: event.into(),
            format,
            job: None,
        }
    }

    pub fn job(mut self, job: u64) -> Self {
        self.job = Some(job);
        self
    }

    /// `{origin}/{event}/export/{format}[/{job}]`, the event encoded as one segment.
    pub fn resolve(&self, builder: &ExportUrlBuilder) -> Result<Url, ExportError> {
        let mut url = builder.origin().clone();
        let job = self.job.map(|j| j.to_string());
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|()| ExportError::InvalidOrigin {
                    origin: builder.origin().to_string(),
                    reason: "origin cannot carry a path".to_string(),
                })?;
            segments
                .clear()
                .push(&self.event)
                .push("export")
                .push(self.format.as_str());
            if let Some(job) = &job {
                segments.push(job);
            }
        }
        Ok(url)
    }

    /// Path component of [`ExportTarget::resolve`], suitable for `ExportUrlBuilder::build`.
    pub fn path(&self, builder: &ExportUrlBuilder) -> Result<String, ExportError> {
        Ok(self.resolve(builder)?.path().to_string())
    }
}
