//! Runtime setup and output path handling.

mod output;
mod runtime;

pub use output::determine_output_path;
pub use runtime::{configure_threads, init_logging};
