//! Debug utilities for the parser module

use chrono::Local;

/// Environment variable that switches on parser debug output
pub const DEBUG_ENV_VAR: &str = "CSL_FIXTURE_DEBUG";

pub fn debug_enabled() -> bool {
    std::env::var_os(DEBUG_ENV_VAR).is_some()
}

/// Log a debug message if CSL_FIXTURE_DEBUG is set.
///
/// Goes to stderr; stdout carries the JSON record.
pub fn parser_debug(message: &str) {
    if debug_enabled() {
        eprintln!("[{}] PARSER DEBUG: {}", Local::now().format("%H:%M:%S"), message);
    }
}

/// Log the content of a fixture being parsed
pub fn log_document_content(content: &str) {
    if !debug_enabled() {
        return;
    }

    let preview: String = content.chars().take(200).collect();
    if preview.len() < content.len() {
        parser_debug(&format!("Fixture content: {}... (length: {})", preview, content.len()));
    } else {
        parser_debug(&format!("Fixture content: {}", preview));
    }

    let lines: Vec<&str> = content.lines().take(5).collect();
    parser_debug(&format!("First {} lines:", lines.len()));
    for (i, line) in lines.iter().enumerate() {
        parser_debug(&format!("Line {}: {}", i + 1, line));
    }
}
