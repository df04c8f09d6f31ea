use serde_json::Value;

use super::debug_utils::parser_debug;
use super::record::FixtureRecord;
use super::sections::SectionMap;

pub const MODE_SECTION: &str = "MODE";
pub const DESCRIPTION_SECTION: &str = "DESCRIPTION";
pub const RESULT_SECTION: &str = "RESULT";
pub const CSL_SECTION: &str = "CSL";
pub const INPUT_SECTION: &str = "INPUT";
pub const CITATION_ITEMS_SECTION: &str = "CITATION-ITEMS";

/// Build a record from extracted sections. Unrecognized sections are ignored.
pub fn assemble_record(sections: &SectionMap) -> FixtureRecord {
    FixtureRecord {
        mode: sections.get(MODE_SECTION).cloned(),
        description: sections.get(DESCRIPTION_SECTION).cloned(),
        result: sections.get(RESULT_SECTION).cloned(),
        csl: sections.get(CSL_SECTION).cloned(),
        input_items: sections
            .get(INPUT_SECTION)
            .and_then(|text| decode_json_section(INPUT_SECTION, text)),
        citation_items: sections
            .get(CITATION_ITEMS_SECTION)
            .and_then(|text| decode_json_section(CITATION_ITEMS_SECTION, text)),
    }
}

/// Decode a JSON-bearing section. Decode errors yield `None`.
pub fn decode_json_section(name: &str, text: &str) -> Option<Value> {
    match serde_json::from_str(text) {
        Ok(value) => Some(value),
        Err(e) => {
            parser_debug(&format!("Section {} is not valid JSON, omitting: {}", name, e));
            None
        }
    }
}
