//! Parsing functions for CLI arguments.

mod filter;

pub use filter::{build_filter, parse_filter_kind, FilterKind};
