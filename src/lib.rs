//! barcus - a personal task tracker
//!
//! This crate turns the one-line commands users type (`todo homework`,
//! `mark 2`, `deadline essay /by 22/08/2024 16:00`) into typed [`Command`]s,
//! and ships a small CLI for checking how lines parse.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod parser;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::BarcusError;
pub use parser::{parse, Command, Keyword, ParseError};
