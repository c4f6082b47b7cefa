//! Command Line Interface (CLI) layer for autotrim.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`): logging setup, parameter
//! resolution (config file plus flags), input collection, and the final
//! summary. It wires user-provided options to `autotrim::BatchPipeline`.
//!
//! If you are embedding autotrim into another application, prefer the
//! library API (`autotrim::api`) instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
