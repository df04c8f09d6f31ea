use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::{Serializer, Value};

use super::ParserError;

/// Structured form of one CSL test fixture.
///
/// Every field is present only when the matching section was opened and
/// closed in the fixture. The item fields additionally require the section
/// text to be valid JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FixtureRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub csl: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_items: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub citation_items: Option<Value>,
}

impl FixtureRecord {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Serialize as JSON indented by two spaces, with non-ASCII characters
    /// written as `\uXXXX` escapes
    pub fn to_pretty_json(&self) -> Result<String, ParserError> {
        let mut out = Vec::new();
        let mut serializer = Serializer::with_formatter(&mut out, AsciiFormatter::default());
        self.serialize(&mut serializer)?;

        // Only ASCII bytes are ever written
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

/// Pretty formatter that escapes every non-ASCII character.
///
/// Characters outside the Basic Multilingual Plane become a UTF-16
/// surrogate pair, e.g. `\ud83d\ude00`.
#[derive(Debug, Default)]
struct AsciiFormatter<'a> {
    pretty: PrettyFormatter<'a>,
}

impl Formatter for AsciiFormatter<'_> {
    fn begin_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_array(writer)
    }

    fn end_array<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array(writer)
    }

    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_array_value(writer, first)
    }

    fn end_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_array_value(writer)
    }

    fn begin_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object(writer)
    }

    fn end_object<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object(writer)
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        self.pretty.begin_object_key(writer, first)
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.begin_object_value(writer)
    }

    fn end_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        self.pretty.end_object_value(writer)
    }

    fn write_string_fragment<W: ?Sized + io::Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        let mut start = 0;
        for (i, c) in fragment.char_indices() {
            if c.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + c.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }
}
