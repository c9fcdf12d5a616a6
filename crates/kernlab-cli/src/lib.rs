//! Shared utilities for kernlab-cli
//!
//! Argument parsing and path handling used by the command implementations.

pub mod parsers;
pub mod processing;

// Re-export commonly used items at the crate root for convenience
pub use parsers::{build_filter, parse_filter_kind, FilterKind};
pub use processing::{configure_threads, determine_output_path, init_logging};
