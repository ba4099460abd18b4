//! CLI command handlers, one per file.

mod columns;
mod fetch;
mod fields;
mod path;
mod print_url;
mod request;

pub use columns::run_columns;
pub use fetch::run_fetch;
pub use fields::run_fields;
pub use path::run_path;
pub use print_url::run_url;
