//! venus-transit CLI
//!
//! Command-line interface for the Earth/Venus transit animation core.

#![forbid(unsafe_code)]

use std::process::ExitCode;

use venus_transit::cli::{run_cli, Args};

fn main() -> ExitCode {
    run_cli(Args::parse())
}
