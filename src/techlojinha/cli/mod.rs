//! # CLI Layer
//!
//! One possible UI client for techlojinha: the terminal stand-in for the shop's
//! desktop form. This is the only place that:
//! - Knows about terminal I/O (stdout, stderr, stdin)
//! - Parses arguments
//! - Installs the log subscriber
//!
//! ## Structure
//!
//! - `setup`: clap definitions
//! - `commands`: `run()`, configuration resolution and per-command handlers
//! - `shell`: the interactive form session
//! - `print`: colored output of a `CmdResult`
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod print;
mod setup;
mod shell;

pub use commands::run;
