//! Terminal rendering for field listings and field detail.

use std::io::Write;

use busbar_sf_rest::FieldDescribe;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::{Error, ErrorKind, Result};

/// Indent used for field detail blocks.
pub const DETAIL_INDENT: &[u8] = b"   ";

/// One row of the field listing.
///
/// Absent values render as empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct FieldRow {
    pub label: String,
    pub name: String,
    #[tabled(rename = "relationshipName")]
    pub relationship_name: String,
    #[tabled(rename = "type")]
    pub field_type: String,
    pub length: String,
}

impl From<FieldDescribe> for FieldRow {
    fn from(field: FieldDescribe) -> Self {
        Self {
            label: field.label.unwrap_or_default(),
            name: field.name.unwrap_or_default(),
            relationship_name: field.relationship_name.unwrap_or_default(),
            field_type: field.field_type.unwrap_or_default(),
            length: field.length.map(|l| l.to_string()).unwrap_or_default(),
        }
    }
}

impl FieldRow {
    /// Project a raw field descriptor onto the listing columns.
    pub fn from_value(value: &Value) -> Result<Self> {
        FieldDescribe::from_value(value)
            .map(Into::into)
            .map_err(|e| Error::with_source(ErrorKind::MalformedField(e.to_string()), e))
    }
}

/// Write the field listing as a table with a header row.
pub fn write_table<W: Write>(rows: Vec<FieldRow>, out: &mut W) -> Result<()> {
    let mut table = Table::new(rows);
    table.with(Style::psql());
    writeln!(out, "{table}")?;
    Ok(())
}

/// Serialize a value as JSON with the given indent.
pub fn to_json_with_indent(value: &Value, indent: &[u8]) -> Result<String> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent));
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Write one field descriptor as an indented JSON block.
pub fn write_detail<W: Write>(field: &Value, out: &mut W) -> Result<()> {
    writeln!(out, "{}", to_json_with_indent(field, DETAIL_INDENT)?)?;
    Ok(())
}
