//! Command-line front end for genbind.
//!
//! - `args`: clap definitions for the `genbind` binary
//! - `table_file`: JSON type tables loaded into a `TypeTable`
//! - `check`: resolve every declared binding of a table and collect diagnostics
//! - `tracing_config`: `GENBIND_LOG` / `GENBIND_LOG_FORMAT` subscriber setup

pub mod args;
pub mod check;
pub mod table_file;
pub mod tracing_config;

#[cfg(test)]
mod tests;
