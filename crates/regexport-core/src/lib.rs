pub mod config;
pub mod logging;

pub mod checksum;
pub mod columns;
pub mod download;
pub mod error;
pub mod field;
pub mod format;
pub mod request;
pub mod sheet;
pub mod snapshot;
pub mod url_builder;
pub mod url_model;

pub use error::ExportError;
pub use field::ExportField;
pub use request::ExportRequest;
pub use snapshot::{CheckboxSnapshot, CheckedSet};
pub use url_builder::{build_and_navigate, ExportUrlBuilder, Navigator};
