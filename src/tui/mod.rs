//! TUI module for venus-transit.
//!
//! Contains the reusable application state for the `transit-tui` binary.
//! The actual terminal I/O stays in the binary; everything that can be
//! tested without a terminal lives here.

pub mod app;
