//! Command-line interface for tinywiki.
//!
//! Exposes the argument parser and command handlers so the binary stays a
//! thin composition root.

pub mod commands;
pub mod handlers;
pub mod parser;

pub use commands::Commands;
pub use parser::Cli;
