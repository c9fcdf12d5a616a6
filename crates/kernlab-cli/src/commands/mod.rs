//! Command implementations for the kernlab CLI.

mod filter;
mod harness;
mod histogram;
mod mandelbrot;
mod white_balance;

// Re-export all command functions
pub use filter::cmd_filter;
pub use harness::cmd_harness;
pub use histogram::cmd_histogram;
pub use mandelbrot::cmd_mandelbrot;
pub use white_balance::cmd_white_balance;
