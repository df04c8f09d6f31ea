//! Parser for CSL test-suite fixtures
//!
//! A fixture is a plain text file made of named sections delimited by
//! `>>===== NAME =====>>` and `<<===== NAME =====<<` marker lines. This
//! library extracts those sections and assembles them into a
//! [`FixtureRecord`] that serializes to JSON for downstream test tooling.

pub mod parser;
pub mod cli;

// Re-export common types
pub use parser::{parse_fixture, parse_fixture_file, FixtureRecord, ParserError, SectionMap};
pub use cli::{fixture_path_from_args, usage};
