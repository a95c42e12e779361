//! Command-line front-end for barcus.

pub mod args;
pub mod commands;
pub mod completions;
