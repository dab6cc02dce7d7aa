//! Field Lister: fetch an SObject's describe document and show its fields.
//!
//! Two mutually exclusive modes:
//!
//! - **List mode** (no field filter): every field, stably sorted by a chosen
//!   attribute, as a `label | name | relationshipName | type | length` table.
//! - **Detail mode** (field filter given): every field whose `name` matches
//!   the filter case-insensitively, in server order, as 3-space-indented JSON.
//!
//! A describe document without a `fields` array, or a filter that matches
//! nothing, produces no output and is not an error.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use busbar_sf_rest::SalesforceRestClient;
use serde_json::Value;
use tracing::{debug, info, instrument};

use crate::error::{Error, ErrorKind, Result};

mod collation;
mod render;

pub use collation::locale_compare;
pub use render::{to_json_with_indent, write_detail, write_table, FieldRow, DETAIL_INDENT};

/// Sort attribute used when none is given.
pub const DEFAULT_SORT_KEY: &str = "name";

/// Attribute of a field descriptor to sort the listing by.
///
/// Any attribute name is accepted; sorting fails if some field lacks a text
/// value for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey(String);

impl SortKey {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self(attribute.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SortKey {
    fn default() -> Self {
        Self::new(DEFAULT_SORT_KEY)
    }
}

impl FromStr for SortKey {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What to show for an SObject.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldQuery {
    /// Field name to show in detail; `None` lists every field.
    pub field: Option<String>,
    /// Attribute the listing is sorted by. Ignored in detail mode.
    pub sort_key: SortKey,
}

impl FieldQuery {
    /// List every field, sorted by name.
    pub fn list() -> Self {
        Self::default()
    }

    /// Show the full descriptor of the named field.
    pub fn detail(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Self::default()
        }
    }

    /// Sort the listing by another attribute.
    pub fn sorted_by(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }
}

/// Fields picked out of a describe document, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection<'a> {
    /// The document had no `fields` array.
    NoFields,
    /// All fields in display order.
    List(Vec<&'a Value>),
    /// Fields matching the filter, in server order.
    Detail(Vec<&'a Value>),
}

impl<'a> Selection<'a> {
    /// The selected field descriptors, empty for [`Selection::NoFields`].
    pub fn fields(&self) -> &[&'a Value] {
        match self {
            Selection::NoFields => &[],
            Selection::List(fields) | Selection::Detail(fields) => fields,
        }
    }

    /// Render the selection: a table for list mode, JSON blocks for detail.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        match self {
            Selection::NoFields => Ok(()),
            Selection::List(fields) => {
                let rows = fields
                    .iter()
                    .map(|field| FieldRow::from_value(field))
                    .collect::<Result<Vec<_>>>()?;
                write_table(rows, out)
            }
            Selection::Detail(fields) => fields.iter().try_for_each(|field| write_detail(field, out)),
        }
    }
}

/// The `fields` array of a describe document, if it has one.
pub fn fields_of(describe: &Value) -> Option<&[Value]> {
    describe.get("fields")?.as_array().map(Vec::as_slice)
}

/// Pick the fields a query asks for.
pub fn select<'a>(describe: &'a Value, query: &FieldQuery) -> Result<Selection<'a>> {
    let Some(fields) = fields_of(describe) else {
        debug!("Describe response has no fields array");
        return Ok(Selection::NoFields);
    };

    match &query.field {
        Some(filter) => Ok(Selection::Detail(matching_fields(fields, filter))),
        None => Ok(Selection::List(sort_fields(fields, &query.sort_key)?)),
    }
}

/// Stably sort fields by a text attribute in locale order.
///
/// Fields with equal keys keep their server order.
pub fn sort_fields<'a>(fields: &'a [Value], sort_key: &SortKey) -> Result<Vec<&'a Value>> {
    let mut keyed = fields
        .iter()
        .map(|field| match field.get(sort_key.as_str()).and_then(Value::as_str) {
            Some(key) => Ok((key, field)),
            None => Err(Error::new(ErrorKind::UnsortableAttribute {
                attribute: sort_key.to_string(),
                field: field_name(field).to_string(),
            })),
        })
        .collect::<Result<Vec<_>>>()?;

    keyed.sort_by(|(a, _), (b, _)| locale_compare(a, b));
    Ok(keyed.into_iter().map(|(_, field)| field).collect())
}

/// Fields whose `name` equals `filter` ignoring case, in server order.
pub fn matching_fields<'a>(fields: &'a [Value], filter: &str) -> Vec<&'a Value> {
    let wanted = filter.to_uppercase();
    fields
        .iter()
        .filter(|field| {
            field
                .get("name")
                .and_then(Value::as_str)
                .is_some_and(|name| name.to_uppercase() == wanted)
        })
        .collect()
}

fn field_name(field: &Value) -> &str {
    field.get("name").and_then(Value::as_str).unwrap_or("<unnamed>")
}

/// Select and render in one step. Returns how many fields were written.
pub fn render<W: Write>(describe: &Value, query: &FieldQuery, out: &mut W) -> Result<usize> {
    let selection = select(describe, query)?;
    selection.write_to(out)?;
    Ok(selection.fields().len())
}

/// Looks up SObject fields against a live org.
#[derive(Debug, Clone)]
pub struct FieldLister {
    client: SalesforceRestClient,
}

impl FieldLister {
    pub fn new(client: SalesforceRestClient) -> Self {
        Self { client }
    }

    /// Fetch the describe document at the org's newest API version.
    ///
    /// Makes two sequential calls: version discovery, then describe.
    #[instrument(skip(self))]
    pub async fn describe(&self, sobject: &str) -> Result<Value> {
        let version = self.client.max_api_version().await?;
        info!(version = %version.version, "Using org's max API version");

        let client = self.client.clone().with_api_version(version.version);
        Ok(client.describe_sobject_raw(sobject).await?)
    }

    /// Fetch, render per `query` into `out`, and return the raw document.
    pub async fn list_fields<W: Write>(
        &self,
        sobject: &str,
        query: &FieldQuery,
        out: &mut W,
    ) -> Result<Value> {
        let describe = self.describe(sobject).await?;
        let count = render(&describe, query, out)?;
        debug!(sobject, count, "Rendered fields");
        Ok(describe)
    }
}
