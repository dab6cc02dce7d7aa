//! Describe and version types.
//!
//! The describe document itself is handled as raw JSON so it can be handed
//! back to callers unmodified; [`FieldDescribe`] is a typed view over the
//! handful of attributes a field summary needs.

use serde::{Deserialize, Serialize};

// ============================================================================
// API Versions
// ============================================================================

/// API version information from `GET /services/data`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ApiVersion {
    pub version: String,
    pub label: String,
    pub url: String,
}

impl ApiVersion {
    /// Numeric `(major, minor)` form of the version, e.g. `(62, 0)` for `"62.0"`.
    pub fn number(&self) -> Option<(u32, u32)> {
        let (major, minor) = self.version.split_once('.').unwrap_or((self.version.as_str(), "0"));
        Some((major.parse().ok()?, minor.parse().ok()?))
    }
}

/// Pick the highest version the org reports. Unparseable entries are skipped.
pub(crate) fn highest(versions: Vec<ApiVersion>) -> Option<ApiVersion> {
    versions
        .into_iter()
        .filter_map(|v| v.number().map(|n| (n, v)))
        .max_by_key(|(n, _)| *n)
        .map(|(_, v)| v)
}

// ============================================================================
// Field Describe
// ============================================================================

/// Summary view of one element of a describe document's `fields` array.
///
/// Every attribute may be absent or `null`. `length` is `0` for most
/// non-text types; `relationshipName` is only set on lookup and
/// master-detail fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldDescribe {
    pub name: Option<String>,
    pub label: Option<String>,
    #[serde(rename = "type")]
    pub field_type: Option<String>,
    pub length: Option<i64>,
    #[serde(rename = "relationshipName")]
    pub relationship_name: Option<String>,
}

impl FieldDescribe {
    /// Read the summary attributes out of a raw field descriptor.
    pub fn from_value(value: &serde_json::Value) -> serde_json::Result<Self> {
        Self::deserialize(value)
    }
}
