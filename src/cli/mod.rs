//! Command Line Interface (CLI) layer for IMGPREP.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for batch preprocessing runs. It
//! wires user-provided options to the underlying library functionality
//! exposed via `imgprep::api`.
//!
//! If you are embedding IMGPREP into another application, prefer using
//! the high-level `imgprep::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
