//! Command Line Interface (CLI) layer for SHEETCUT.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the `split`, `square`, `batch`
//! and `extract-text` subcommands. It wires user-provided options to the
//! library functionality exposed via `sheetcut::api`.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
