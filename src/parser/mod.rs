use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

// Import sub-modules
mod assembler;
mod debug_utils;
mod markers;
mod record;
mod sections;

// Re-export important types
pub use assembler::{assemble_record, decode_json_section};
pub use markers::{classify_line, Marker};
pub use record::FixtureRecord;
pub use sections::{extract_sections, SectionMap};

use debug_utils::{log_document_content, parser_debug};

// Define error type
#[derive(Error, Debug)]
pub enum ParserError {
    #[error("Failed to read fixture file: {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize fixture record: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Parse fixture text into a record.
///
/// Never fails: unterminated sections are dropped and undecodable JSON
/// sections are left out of the record.
pub fn parse_fixture(content: &str) -> FixtureRecord {
    log_document_content(content);

    let sections = extract_sections(content);
    parser_debug(&format!(
        "Extracted {} sections: {:?}",
        sections.len(),
        sections.keys().collect::<Vec<_>>()
    ));

    assemble_record(&sections)
}

/// Read a fixture from disk and parse it.
///
/// # Errors
///
/// Returns [`ParserError::Io`] when the file is missing, unreadable, or
/// not valid UTF-8.
pub fn parse_fixture_file<P: AsRef<Path>>(path: P) -> Result<FixtureRecord, ParserError> {
    let path = path.as_ref();
    parser_debug(&format!("Reading fixture: {}", path.display()));

    let content = fs::read_to_string(path).map_err(|source| ParserError::Io {
        path: path.display().to_string(),
        source,
    })?;

    Ok(parse_fixture(&content))
}
