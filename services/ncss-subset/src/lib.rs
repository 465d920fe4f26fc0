//! Command-line front end for the ncss crates.

pub mod cli;
pub mod commands;

pub use cli::{Args, Command};
pub use commands::{load_config, run_grid, run_stations};
