//! Subcommand handlers for the podview binary.

pub mod config;
pub mod info;
pub mod play;
