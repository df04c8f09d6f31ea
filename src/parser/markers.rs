use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// `>>===== NAME =====>>`
    pub static ref START_MARKER: Regex =
        Regex::new(r"^>>=====\s*([A-Z-]+)\s*=====>>$").expect("start marker pattern is valid");

    /// `<<===== NAME =====<<`
    pub static ref END_MARKER: Regex =
        Regex::new(r"^<<=====\s*([A-Z-]+)\s*=====<<$").expect("end marker pattern is valid");
}

/// A section boundary line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Marker {
    Open(String),
    Close(String),
}

/// Classify a line as a section marker. Returns `None` for content lines.
pub fn classify_line(line: &str) -> Option<Marker> {
    if let Some(caps) = START_MARKER.captures(line) {
        return Some(Marker::Open(caps[1].to_string()));
    }

    END_MARKER
        .captures(line)
        .map(|caps| Marker::Close(caps[1].to_string()))
}
