use indexmap::IndexMap;

use super::debug_utils::parser_debug;
use super::markers::{classify_line, Marker};

/// Section name to trimmed section text, in first-seen order.
pub type SectionMap = IndexMap<String, String>;

/// Characters that end a line: `\n`, `\r` (alone or as `\r\n`), vertical
/// tab, form feed, the file/group/record separators, NEL, and the Unicode
/// line and paragraph separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

/// Split text into lines without their terminators.
///
/// A trailing line break does not produce an empty final line.
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = content.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&content[start..i]);
        start = i + c.len_utf8();

        if c == '\r' {
            if let Some(&(j, '\n')) = chars.peek() {
                chars.next();
                start = j + 1;
            }
        }
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }

    lines
}

/// Split fixture text into its named sections.
///
/// A close marker ends whichever section is open, regardless of the name it
/// carries. An open marker inside an open section discards the partial
/// content and starts over. A section still open at end of input is dropped.
/// Repeated names keep the last closed occurrence.
pub fn extract_sections(content: &str) -> SectionMap {
    let mut sections = SectionMap::new();
    let mut current_section: Option<String> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for (i, line) in split_lines(content).into_iter().enumerate() {
        let line_no = i + 1;

        match classify_line(line) {
            Some(Marker::Open(name)) => {
                if let Some(open) = &current_section {
                    parser_debug(&format!(
                        "Line {}: {} opened while {} still open, dropping {} buffered lines",
                        line_no,
                        name,
                        open,
                        buffer.len()
                    ));
                }
                current_section = Some(name);
                buffer.clear();
            }
            Some(Marker::Close(name)) => match current_section.take() {
                Some(open) => {
                    if open != name {
                        parser_debug(&format!(
                            "Line {}: close marker {} ends section {}",
                            line_no, name, open
                        ));
                    }
                    if sections.contains_key(&open) {
                        parser_debug(&format!("Line {}: section {} replaced", line_no, open));
                    }
                    sections.insert(open, buffer.join("\n").trim().to_string());
                    buffer.clear();
                }
                None => {
                    parser_debug(&format!(
                        "Line {}: close marker {} with no open section",
                        line_no, name
                    ));
                }
            },
            None => {
                if current_section.is_some() {
                    buffer.push(line);
                }
            }
        }
    }

    if let Some(open) = current_section {
        parser_debug(&format!(
            "Section {} never closed, dropping {} buffered lines",
            open,
            buffer.len()
        ));
    }

    sections
}
