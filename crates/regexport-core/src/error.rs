//! Domain errors for export requests and URLs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// A checkbox the export reads is not present in the snapshot.
    #[error("checkbox element `{checkbox_id}` not found")]
    MissingCheckbox { checkbox_id: &'static str },

    #[error("invalid origin `{origin}`: {reason}")]
    InvalidOrigin { origin: String, reason: String },

    #[error("cannot resolve export path `{path}`")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unknown export field `{0}`")]
    UnknownField(String),

    #[error("unknown export format `{0}` (expected `excel` or `pdf`)")]
    UnknownFormat(String),

    /// Server side: a query parameter of the contract is absent.
    #[error("query parameter `{0}` is missing")]
    MissingParameter(&'static str),

    /// Server side: a flag is neither `true` nor `false`.
    #[error("query parameter `{param}` must be `true` or `false`, got `{value}`")]
    InvalidFlag { param: &'static str, value: String },
}
