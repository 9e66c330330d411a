//! Evacmap CLI library.
//!
//! This crate provides the command handlers, output formatting, and the
//! drill timer used by the `evacmap-cli` binary.

#![deny(warnings)]

pub mod commands;
pub mod output;
pub mod timer;
