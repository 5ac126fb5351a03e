//! Script execution engine for agent tooling.
//!
//! This crate lets a host submit a fragment of source code and receive a
//! structured return value plus everything the code wrote to stdout and
//! stderr, without managing processes, temporary files, or output parsing
//! itself.
//!
//! # Architecture Overview
//!
//! One execution flows through a short pipeline:
//!
//! - **Source splitting**: import lines are separated from body lines, with
//!   home-alias expansion applied inside imports only
//! - **Harness synthesis**: the body is wrapped so its resolved value is
//!   captured through a sentinel line on stdout
//! - **Ephemeral workspace**: a per-execution temp directory holds the
//!   harness and is removed on every exit path
//! - **Process launch**: an isolated runtime runs the harness from the
//!   caller's working directory, both pipes drained concurrently
//! - **Result decoding**: the sentinel payload becomes the return value and
//!   is stripped from the user-visible stdout
//!
//! The engine performs no sandboxing, resource limiting, or timeout
//! enforcement; it trusts the submitted code completely.

pub mod config;
pub mod core_types;
pub mod decode;
pub mod errors;
pub mod executors;
pub mod harness;
pub mod launcher;
pub mod source;
pub mod tools;
pub mod workspace;

pub use config::{load_config, ExecutorConfig, RunletConfig};
pub use core_types::{ExecutionRequest, ExecutionResult, ToolMetadata};
pub use errors::{ExecutorError, RunletError};
pub use executors::{CodeExecutor, RuntimeCodeExecutor};
pub use launcher::{HarnessLauncher, RawOutput, RuntimeLauncher};
pub use tools::{RunCodeTool, Tool, ToolRegistry};
