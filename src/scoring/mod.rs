//! ATS keyword scoring pipeline

pub mod deadline;
pub mod engine;
pub mod keyword_db;
pub mod matcher;
pub mod scorer;
pub mod section_parser;
pub mod types;
