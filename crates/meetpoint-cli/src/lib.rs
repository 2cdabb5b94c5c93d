//! Meetpoint CLI library.
//!
//! Subcommand handlers and output selection for the `meetpoint` binary. The
//! binary only parses arguments and dispatches into these modules.

pub mod commands;
pub mod output;
