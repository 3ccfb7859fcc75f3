//! Command-line front end for CrisisLens.
//!
//! `crisislens serve` runs the web server, `crisislens analyze` submits an
//! image to a running server the same way the browser form does.
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tokio_test as _;

// Used only by the binary target.
use anyhow as _;
use dotenvy as _;
use tokio as _;

pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod presentation;

pub use commands::Commands;
pub use error::CliError;
pub use parser::Cli;
