//! CLI interface for trunkwire
//!
//! This crate provides the `trunkwire` command-line decoder: argument
//! parsing, hex input handling and the subcommands themselves.

pub mod args;
pub mod commands;
pub mod input;

pub use args::{Cli, Commands};
