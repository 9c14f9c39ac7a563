//! Result formatting for the CLI

pub mod formatter;
