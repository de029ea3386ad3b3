//! Command-line client for the ZeroTier controller API.
//!
//! Layers, innermost first: `domain` (platforms, operations, command grammar),
//! `application` (token and controller services), `infrastructure` (I/O
//! boundaries and wiring), `cli` (clap surface and output).

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
